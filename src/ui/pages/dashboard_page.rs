use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::task::JoinHandle;

use crate::core::state::page::page_controller::{PageController, PageFetcher};
use crate::core::state::page::page_state::PageState;
use crate::core::util::format_util::FormatUtil;
use crate::domain::dashboard::dto::dashboard_metrics::DashboardMetrics;
use crate::domain::dashboard::dto::filter_set::{FilterField, FilterSet};
use crate::domain::dashboard::service::DashboardApi;
use crate::errors::ApiError;
use crate::ui::components::charts::{render_bars, render_pie, render_trend};
use crate::ui::components::metric_card::MetricCard;
use crate::ui::components::style::{Icon, Tone};
use crate::ui::pages::{page_error, page_header, LOADING_LINE};

pub const TITLE: &str = "Dashboard";
pub const DEFAULT_RANGE_DAYS: i64 = 30;

pub struct DashboardMetricsFetcher {
    api: Arc<dyn DashboardApi>,
}

#[async_trait]
impl PageFetcher for DashboardMetricsFetcher {
    type Output = DashboardMetrics;

    async fn fetch(&self, filters: &FilterSet) -> Result<DashboardMetrics, ApiError> {
        self.api.get_dashboard_metrics(filters).await
    }
}

/// Headline counters and charts for a date range.
pub struct DashboardPage {
    controller: PageController<DashboardMetricsFetcher>,
}

impl DashboardPage {
    pub fn new(api: Arc<dyn DashboardApi>, today: NaiveDate) -> Self {
        Self::with_filters(api, FilterSet::last_days(today, DEFAULT_RANGE_DAYS))
    }

    pub fn with_filters(api: Arc<dyn DashboardApi>, filters: FilterSet) -> Self {
        Self {
            controller: PageController::new("dashboard", DashboardMetricsFetcher { api }, filters),
        }
    }

    pub fn controller(&self) -> &PageController<DashboardMetricsFetcher> {
        &self.controller
    }

    pub async fn load(&self) -> PageState<DashboardMetrics> {
        self.controller.load().await
    }

    pub async fn retry(&self) -> PageState<DashboardMetrics> {
        self.controller.retry().await
    }

    pub async fn set_start_date(&self, date: Option<NaiveDate>) -> Option<JoinHandle<()>> {
        self.controller
            .set_filter(FilterField::StartDate, date.map(FormatUtil::iso_date))
            .await
    }

    pub async fn set_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<JoinHandle<()>> {
        self.controller.set_date_range(start, end).await
    }

    pub async fn set_end_date(&self, date: Option<NaiveDate>) -> Option<JoinHandle<()>> {
        self.controller
            .set_filter(FilterField::EndDate, date.map(FormatUtil::iso_date))
            .await
    }

    pub async fn render(&self) -> String {
        let filters = self.controller.filters().await;
        let state = self.controller.state().await;
        render_dashboard(&filters, &state)
    }
}

pub fn render_dashboard(filters: &FilterSet, state: &PageState<DashboardMetrics>) -> String {
    let metrics = match state {
        PageState::Error(message) => return page_error(TITLE, message),
        PageState::Loading => None,
        PageState::Ready(m) => Some(m),
    };
    let loading = metrics.is_none();

    let mut sections = vec![page_header(TITLE, filters)];

    sections.push(
        headline_cards(metrics)
            .iter()
            .map(|c| c.clone().loading(loading).render())
            .collect::<Vec<_>>()
            .join("\n"),
    );

    match metrics {
        Some(m) => {
            sections.push(render_trend("Tendência de Tickets", &m.trend_data));
            sections.push(render_pie("Distribuição por Prioridade", &m.tickets_by_priority));
            sections.push(render_bars("Distribuição por Status", &m.tickets_by_status));
        }
        None => {
            for title in [
                "Tendência de Tickets",
                "Distribuição por Prioridade",
                "Distribuição por Status",
            ] {
                sections.push(format!("{}\n{}", title, LOADING_LINE));
            }
        }
    }

    sections.push(
        secondary_cards(metrics)
            .iter()
            .map(|c| c.clone().loading(loading).render())
            .collect::<Vec<_>>()
            .join("\n"),
    );

    sections.join("\n\n")
}

fn headline_cards(m: Option<&DashboardMetrics>) -> [MetricCard; 4] {
    let count = |f: fn(&DashboardMetrics) -> u64| m.map(f).unwrap_or(0);
    [
        MetricCard::new("Total de Tickets", count(|m| m.total_tickets), Icon::Ticket).tone(Tone::Blue),
        MetricCard::new("Novos Tickets", count(|m| m.new_tickets), Icon::AlertTriangle)
            .tone(Tone::Orange),
        MetricCard::new("Em Andamento", count(|m| m.in_progress_tickets), Icon::Clock)
            .tone(Tone::Yellow),
        MetricCard::new("Resolvidos", count(|m| m.resolved_tickets), Icon::CheckCircle)
            .tone(Tone::Green),
    ]
}

fn secondary_cards(m: Option<&DashboardMetrics>) -> [MetricCard; 3] {
    let count = |f: fn(&DashboardMetrics) -> u64| m.map(f).unwrap_or(0);
    let average = m
        .map(|m| FormatUtil::hours(m.average_resolution_time))
        .unwrap_or_else(|| "0h".to_string());
    [
        MetricCard::new("Tickets Pendentes", count(|m| m.pending_tickets), Icon::XCircle)
            .tone(Tone::Red),
        MetricCard::new("Tickets Fechados", count(|m| m.closed_tickets), Icon::CheckCircle)
            .tone(Tone::Gray),
        MetricCard::new("Tempo Médio de Resolução", average, Icon::Clock).tone(Tone::Purple),
    ]
}
