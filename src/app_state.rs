use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::info;

use crate::core::client::http_client::HttpClient;
use crate::core::config::AppConfig;
use crate::domain::dashboard::service::dashboard_service::DashboardService;
use crate::domain::dashboard::service::DashboardApi;
use crate::ui::pages::dashboard_page::DashboardPage;
use crate::ui::pages::settings_page::SettingsPage;
use crate::ui::pages::technical_groups_page::TechnicalGroupsPage;
use crate::ui::pages::technicians_page::TechniciansPage;
use crate::ui::pages::tickets_page::TicketsPage;

/// Everything built once at startup. Pages share the one service.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub api: Arc<dyn DashboardApi>,
}

pub fn build_app_state(config: AppConfig) -> Result<AppState> {
    let client = HttpClient::from_config(&config).context("building HTTP client")?;
    info!(base_url = client.base_url(), "Dashboard service ready");

    Ok(AppState {
        api: Arc::new(DashboardService::new(client)),
        config: Arc::new(config),
    })
}

impl AppState {
    /// Page defaults are computed from the local calendar date.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn dashboard_page(&self) -> DashboardPage {
        DashboardPage::new(Arc::clone(&self.api), Self::today())
    }

    pub fn technicians_page(&self) -> TechniciansPage {
        TechniciansPage::new(Arc::clone(&self.api), Self::today())
    }

    pub fn tickets_page(&self) -> TicketsPage {
        TicketsPage::new(Arc::clone(&self.api), Self::today())
    }

    pub fn technical_groups_page(&self) -> TechnicalGroupsPage {
        TechnicalGroupsPage::new(Arc::clone(&self.api), Self::today())
    }

    pub fn settings_page(&self) -> SettingsPage {
        SettingsPage::new(Arc::clone(&self.api))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let state = build_app_state(AppConfig::default()).unwrap();
        assert_eq!(state.config.api_base_url, "http://localhost:5000/api");
    }
}
