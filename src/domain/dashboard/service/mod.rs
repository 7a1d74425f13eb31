use async_trait::async_trait;
use serde_json::Value;

use crate::domain::dashboard::dto::dashboard_metrics::DashboardMetrics;
use crate::domain::dashboard::dto::filter_set::FilterSet;
use crate::domain::dashboard::dto::system_status::SystemStatus;
use crate::domain::dashboard::dto::technician::Technician;
use crate::domain::dashboard::dto::ticket_item::TicketItem;
use crate::errors::ApiError;

pub mod dashboard_service;

/// Read operations the pages depend on.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn get_dashboard_metrics(&self, filters: &FilterSet) -> Result<DashboardMetrics, ApiError>;

    /// Order is the backend's ranking order.
    async fn get_technician_ranking(&self, filters: &FilterSet) -> Result<Vec<Technician>, ApiError>;

    async fn get_new_tickets(&self, filters: &FilterSet) -> Result<Vec<TicketItem>, ApiError>;

    async fn get_system_status(&self) -> Result<SystemStatus, ApiError>;

    /// Free-form payload; see `technical_group::groups_from_advanced`.
    async fn get_advanced_metrics(&self, filters: &FilterSet) -> Result<Value, ApiError>;
}
