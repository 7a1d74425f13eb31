use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::task::JoinHandle;

use crate::core::state::page::page_controller::{PageController, PageFetcher};
use crate::core::state::page::page_state::PageState;
use crate::domain::dashboard::dto::filter_set::{FilterField, FilterSet};
use crate::domain::dashboard::dto::technical_group::{groups_from_advanced, TechnicalGroup};
use crate::domain::dashboard::service::DashboardApi;
use crate::errors::ApiError;
use crate::ui::components::technical_groups::{render_technical_groups, TITLE};
use crate::ui::pages::{page_error, page_header};

pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// Advanced metrics reduced to the group breakdown.
pub struct TechnicalGroupsFetcher {
    api: Arc<dyn DashboardApi>,
}

#[async_trait]
impl PageFetcher for TechnicalGroupsFetcher {
    type Output = Vec<TechnicalGroup>;

    async fn fetch(&self, filters: &FilterSet) -> Result<Vec<TechnicalGroup>, ApiError> {
        let payload = self.api.get_advanced_metrics(filters).await?;
        Ok(groups_from_advanced(&payload))
    }
}

pub struct TechnicalGroupsPage {
    controller: PageController<TechnicalGroupsFetcher>,
}

impl TechnicalGroupsPage {
    pub fn new(api: Arc<dyn DashboardApi>, today: NaiveDate) -> Self {
        Self::with_filters(api, FilterSet::last_days(today, DEFAULT_RANGE_DAYS))
    }

    pub fn with_filters(api: Arc<dyn DashboardApi>, filters: FilterSet) -> Self {
        Self {
            controller: PageController::new(
                "technical_groups",
                TechnicalGroupsFetcher { api },
                filters,
            ),
        }
    }

    pub fn controller(&self) -> &PageController<TechnicalGroupsFetcher> {
        &self.controller
    }

    pub async fn load(&self) -> PageState<Vec<TechnicalGroup>> {
        self.controller.load().await
    }

    pub async fn retry(&self) -> PageState<Vec<TechnicalGroup>> {
        self.controller.retry().await
    }

    pub async fn set_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<JoinHandle<()>> {
        self.controller.set_date_range(start, end).await
    }

    pub async fn set_filter(
        &self,
        field: FilterField,
        value: Option<String>,
    ) -> Option<JoinHandle<()>> {
        self.controller.set_filter(field, value).await
    }

    pub async fn render(&self) -> String {
        let filters = self.controller.filters().await;
        let state = self.controller.state().await;
        render_groups_page(&filters, &state)
    }
}

pub fn render_groups_page(filters: &FilterSet, state: &PageState<Vec<TechnicalGroup>>) -> String {
    match state {
        PageState::Error(message) => page_error(TITLE, message),
        PageState::Loading => format!(
            "{}\n\n{}",
            page_header(TITLE, filters),
            render_technical_groups(None, true)
        ),
        PageState::Ready(groups) => format!(
            "{}\n\n{}",
            page_header(TITLE, filters),
            render_technical_groups(Some(groups.as_slice()), false)
        ),
    }
}
