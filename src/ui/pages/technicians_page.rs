use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::core::state::page::page_controller::{PageController, PageFetcher};
use crate::core::state::page::page_state::PageState;
use crate::core::util::format_util::FormatUtil;
use crate::domain::dashboard::dto::filter_set::{FilterField, FilterSet};
use crate::domain::dashboard::dto::technician::Technician;
use crate::domain::dashboard::service::DashboardApi;
use crate::errors::ApiError;
use crate::ui::components::level_badge::LevelBadge;
use crate::ui::components::rank_icon::RankIcon;
use crate::ui::components::style::Icon;
use crate::ui::pages::{page_error, page_header, LOADING_LINE};

pub const TITLE: &str = "Ranking de Técnicos";
pub const DEFAULT_RANGE_DAYS: i64 = 30;
pub const EMPTY_TITLE: &str = "Nenhum técnico encontrado";
pub const EMPTY_HINT: &str = "Tente ajustar os filtros de busca.";

/// Level select: backend value and label. The empty value means every level.
pub const LEVEL_OPTIONS: [(&str, &str); 4] = [
    ("", "Todos os níveis"),
    ("senior", "Senior"),
    ("pleno", "Pleno"),
    ("junior", "Junior"),
];

pub struct TechnicianRankingFetcher {
    api: Arc<dyn DashboardApi>,
}

#[async_trait]
impl PageFetcher for TechnicianRankingFetcher {
    type Output = Vec<Technician>;

    async fn fetch(&self, filters: &FilterSet) -> Result<Vec<Technician>, ApiError> {
        self.api.get_technician_ranking(filters).await
    }
}

pub struct TechniciansPage {
    controller: PageController<TechnicianRankingFetcher>,
    search: RwLock<String>,
}

impl TechniciansPage {
    pub fn new(api: Arc<dyn DashboardApi>, today: NaiveDate) -> Self {
        Self::with_filters(api, FilterSet::last_days(today, DEFAULT_RANGE_DAYS))
    }

    pub fn with_filters(api: Arc<dyn DashboardApi>, filters: FilterSet) -> Self {
        Self {
            controller: PageController::new(
                "technicians",
                TechnicianRankingFetcher { api },
                filters,
            ),
            search: RwLock::new(String::new()),
        }
    }

    pub fn controller(&self) -> &PageController<TechnicianRankingFetcher> {
        &self.controller
    }

    pub async fn load(&self) -> PageState<Vec<Technician>> {
        self.controller.load().await
    }

    pub async fn retry(&self) -> PageState<Vec<Technician>> {
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

    pub async fn set_level(&self, level: Option<String>) -> Option<JoinHandle<()>> {
        self.controller.set_filter(FilterField::Level, level).await
    }

    /// Narrows the loaded list; never refetches.
    pub async fn set_search(&self, term: impl Into<String>) {
        *self.search.write().await = term.into();
    }

    pub async fn visible(&self) -> Vec<Technician> {
        let term = self.search.read().await.clone();
        match self.controller.state().await {
            PageState::Ready(all) => filter_technicians(&all, &term),
            _ => Vec::new(),
        }
    }

    pub async fn render(&self) -> String {
        let filters = self.controller.filters().await;
        let state = self.controller.state().await;
        let term = self.search.read().await.clone();
        render_technicians(&filters, &state, &term)
    }
}

/// Technicians whose name or email contains `term`. An empty term keeps all.
pub fn filter_technicians(all: &[Technician], term: &str) -> Vec<Technician> {
    all.iter()
        .filter(|t| term.is_empty() || t.matches_search(term))
        .cloned()
        .collect()
}

pub fn render_technicians(
    filters: &FilterSet,
    state: &PageState<Vec<Technician>>,
    search: &str,
) -> String {
    let all = match state {
        PageState::Error(message) => return page_error(TITLE, message),
        PageState::Loading => {
            return format!("{}\n\n{}", page_header(TITLE, filters), LOADING_LINE)
        }
        PageState::Ready(all) => all,
    };

    let level = filters.level.as_deref().unwrap_or("");
    let level_label = LEVEL_OPTIONS
        .iter()
        .find(|(value, _)| *value == level)
        .map(|(_, label)| *label)
        .unwrap_or(level);

    let mut out = page_header(TITLE, filters);
    out.push_str(&format!("\nNível: {}", level_label));
    if !search.is_empty() {
        out.push_str(&format!("  Busca: \"{}\"", search));
    }

    let visible = filter_technicians(all, search);
    if visible.is_empty() {
        out.push_str(&format!(
            "\n\n{} {}\n  {}",
            Icon::Users.glyph(),
            EMPTY_TITLE,
            EMPTY_HINT
        ));
        return out;
    }

    for t in &visible {
        out.push_str("\n\n");
        out.push_str(&render_row(t));
    }
    out
}

fn render_row(t: &Technician) -> String {
    format!(
        "{:>3} {} <{}> {}\n    Total {}  Resolvidos {}  Pendentes {}  Taxa Resolução {}\n    {} Tempo médio de resolução: {}  Posição: #{}",
        RankIcon::for_rank(t.rank).render(),
        t.name,
        t.email,
        LevelBadge::new(&t.level).render(),
        t.total_tickets,
        t.resolved_tickets,
        t.pending_tickets,
        FormatUtil::percent(t.resolution_rate),
        Icon::TrendingUp.glyph(),
        FormatUtil::hours(t.average_resolution_time),
        t.rank,
    )
}
