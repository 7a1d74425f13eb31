// src/domain/dashboard/service/dashboard_service.rs
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

use crate::core::client::http_client::HttpClient;
use crate::domain::dashboard::dto::dashboard_metrics::DashboardMetrics;
use crate::domain::dashboard::dto::filter_set::FilterSet;
use crate::domain::dashboard::dto::system_status::SystemStatus;
use crate::domain::dashboard::dto::technician::Technician;
use crate::domain::dashboard::dto::ticket_item::TicketItem;
use crate::domain::dashboard::dto::ApiEnvelope;
use crate::domain::dashboard::service::DashboardApi;
use crate::errors::ApiError;

pub const METRICS_PATH: &str = "/dashboard/metrics";
pub const TECHNICIAN_RANKING_PATH: &str = "/dashboard/technician-ranking";
pub const NEW_TICKETS_PATH: &str = "/dashboard/new-tickets";
pub const SYSTEM_STATUS_PATH: &str = "/dashboard/system-status";
pub const ADVANCED_METRICS_PATH: &str = "/dashboard/advanced-metrics";

/// Typed facade over the dashboard endpoints. Errors from the client pass
/// through unchanged after being logged.
#[derive(Clone)]
pub struct DashboardService {
    client: HttpClient,
}

impl DashboardService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        filters: Option<&FilterSet>,
    ) -> Result<T, ApiError> {
        let query = filters.map(FilterSet::query_pairs).unwrap_or_default();

        match self.client.get_json::<ApiEnvelope<T>>(path, &query).await {
            Ok(envelope) => Ok(envelope.data),
            Err(e) => {
                error!(operation, kind = e.kind(), error = %e, "Error fetching {}", operation);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl DashboardApi for DashboardService {
    async fn get_dashboard_metrics(&self, filters: &FilterSet) -> Result<DashboardMetrics, ApiError> {
        let metrics: DashboardMetrics = self
            .fetch("dashboard metrics", METRICS_PATH, Some(filters))
            .await?;

        if !metrics.trend_is_ascending() {
            warn!(
                points = metrics.trend_data.len(),
                "Backend returned trend data out of date order"
            );
        }

        Ok(metrics)
    }

    async fn get_technician_ranking(&self, filters: &FilterSet) -> Result<Vec<Technician>, ApiError> {
        self.fetch("technician ranking", TECHNICIAN_RANKING_PATH, Some(filters))
            .await
    }

    async fn get_new_tickets(&self, filters: &FilterSet) -> Result<Vec<TicketItem>, ApiError> {
        self.fetch("new tickets", NEW_TICKETS_PATH, Some(filters)).await
    }

    async fn get_system_status(&self) -> Result<SystemStatus, ApiError> {
        self.fetch("system status", SYSTEM_STATUS_PATH, None).await
    }

    async fn get_advanced_metrics(&self, filters: &FilterSet) -> Result<Value, ApiError> {
        self.fetch("advanced metrics", ADVANCED_METRICS_PATH, Some(filters))
            .await
    }
}
