use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::core::state::page::page_controller::{PageController, PageFetcher};
use crate::core::state::page::page_state::PageState;
use crate::core::util::format_util::FormatUtil;
use crate::domain::dashboard::dto::filter_set::{FilterField, FilterSet};
use crate::domain::dashboard::dto::ticket_item::TicketItem;
use crate::domain::dashboard::service::DashboardApi;
use crate::errors::ApiError;
use crate::ui::components::priority_badge::PriorityBadge;
use crate::ui::components::status_badge::StatusBadge;
use crate::ui::components::style::{render_badge, Icon};
use crate::ui::pages::{page_error, page_header, LOADING_LINE};

pub const TITLE: &str = "Tickets";
pub const DEFAULT_RANGE_DAYS: i64 = 7;
pub const CONTENT_PREVIEW_CHARS: usize = 100;
pub const EMPTY_TITLE: &str = "Nenhum ticket encontrado";
pub const EMPTY_HINT: &str = "Tente ajustar os filtros de busca ou o período selecionado.";

pub const STATUS_OPTIONS: [(&str, &str); 7] = [
    ("", "Todos os status"),
    ("Novo", "Novo"),
    ("Processando (atribuído)", "Processando (atribuído)"),
    ("Processando (planejado)", "Processando (planejado)"),
    ("Pendente", "Pendente"),
    ("Solucionado", "Solucionado"),
    ("Fechado", "Fechado"),
];

pub const PRIORITY_OPTIONS: [(&str, &str); 6] = [
    ("", "Todas as prioridades"),
    ("Muito alta", "Muito alta"),
    ("Alta", "Alta"),
    ("Média", "Média"),
    ("Baixa", "Baixa"),
    ("Muito baixa", "Muito baixa"),
];

pub struct NewTicketsFetcher {
    api: Arc<dyn DashboardApi>,
}

#[async_trait]
impl PageFetcher for NewTicketsFetcher {
    type Output = Vec<TicketItem>;

    async fn fetch(&self, filters: &FilterSet) -> Result<Vec<TicketItem>, ApiError> {
        self.api.get_new_tickets(filters).await
    }
}

/// Recent tickets, narrowed server-side by the filters and locally by search.
pub struct TicketsPage {
    controller: PageController<NewTicketsFetcher>,
    search: RwLock<String>,
}

impl TicketsPage {
    pub fn new(api: Arc<dyn DashboardApi>, today: NaiveDate) -> Self {
        Self::with_filters(api, FilterSet::last_days(today, DEFAULT_RANGE_DAYS))
    }

    pub fn with_filters(api: Arc<dyn DashboardApi>, filters: FilterSet) -> Self {
        Self {
            controller: PageController::new("tickets", NewTicketsFetcher { api }, filters),
            search: RwLock::new(String::new()),
        }
    }

    pub fn controller(&self) -> &PageController<NewTicketsFetcher> {
        &self.controller
    }

    pub async fn load(&self) -> PageState<Vec<TicketItem>> {
        self.controller.load().await
    }

    pub async fn retry(&self) -> PageState<Vec<TicketItem>> {
        self.controller.retry().await
    }

    pub async fn set_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<JoinHandle<()>> {
        self.controller.set_date_range(start, end).await
    }

    pub async fn set_start_date(&self, date: Option<NaiveDate>) -> Option<JoinHandle<()>> {
        self.controller
            .set_filter(FilterField::StartDate, date.map(FormatUtil::iso_date))
            .await
    }

    pub async fn set_end_date(&self, date: Option<NaiveDate>) -> Option<JoinHandle<()>> {
        self.controller
            .set_filter(FilterField::EndDate, date.map(FormatUtil::iso_date))
            .await
    }

    pub async fn set_status(&self, status: Option<String>) -> Option<JoinHandle<()>> {
        self.controller.set_filter(FilterField::Status, status).await
    }

    pub async fn set_priority(&self, priority: Option<String>) -> Option<JoinHandle<()>> {
        self.controller.set_filter(FilterField::Priority, priority).await
    }

    pub async fn set_technician(&self, technician: Option<String>) -> Option<JoinHandle<()>> {
        self.controller
            .set_filter(FilterField::Technician, technician)
            .await
    }

    pub async fn set_search(&self, term: impl Into<String>) {
        *self.search.write().await = term.into();
    }

    pub async fn visible(&self) -> Vec<TicketItem> {
        let term = self.search.read().await.clone();
        match self.controller.state().await {
            PageState::Ready(all) => filter_tickets(&all, &term),
            _ => Vec::new(),
        }
    }

    pub async fn render(&self) -> String {
        let filters = self.controller.filters().await;
        let state = self.controller.state().await;
        let term = self.search.read().await.clone();
        render_tickets(&filters, &state, &term)
    }
}

pub fn filter_tickets(all: &[TicketItem], term: &str) -> Vec<TicketItem> {
    all.iter()
        .filter(|t| term.is_empty() || t.matches_search(term))
        .cloned()
        .collect()
}

fn option_label<'a>(options: &'a [(&'a str, &'a str)], value: Option<&'a str>) -> &'a str {
    let value = value.unwrap_or("");
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

pub fn render_tickets(
    filters: &FilterSet,
    state: &PageState<Vec<TicketItem>>,
    search: &str,
) -> String {
    let all = match state {
        PageState::Error(message) => return page_error(TITLE, message),
        PageState::Loading => {
            return format!("{}\n\n{}", page_header(TITLE, filters), LOADING_LINE)
        }
        PageState::Ready(all) => all,
    };

    let mut out = page_header(TITLE, filters);
    out.push_str(&format!(
        "\nStatus: {}  Prioridade: {}",
        option_label(&STATUS_OPTIONS, filters.status.as_deref()),
        option_label(&PRIORITY_OPTIONS, filters.priority.as_deref()),
    ));
    if let Some(technician) = filters.technician.as_deref() {
        out.push_str(&format!("  Filtro técnico: {}", technician));
    }
    if !search.is_empty() {
        out.push_str(&format!("  Busca: \"{}\"", search));
    }

    let visible = filter_tickets(all, search);
    if visible.is_empty() {
        out.push_str(&format!(
            "\n\n{} {}\n  {}",
            Icon::Ticket.glyph(),
            EMPTY_TITLE,
            EMPTY_HINT
        ));
        return out;
    }

    for ticket in &visible {
        out.push_str("\n\n");
        out.push_str(&render_ticket(ticket));
    }
    out
}

fn render_ticket(t: &TicketItem) -> String {
    let mut lines = vec![
        format!(
            "#{} {} {} {}",
            t.id,
            t.title,
            StatusBadge::new(&t.status).render(),
            PriorityBadge::new(&t.priority).render()
        ),
        format!("    {}", FormatUtil::truncate(&t.content, CONTENT_PREVIEW_CHARS)),
    ];

    let mut meta = format!("    Solicitante: {}", t.requester);
    if let Some(technician) = t.assignee() {
        meta.push_str(&format!("  Técnico: {}", technician));
    }
    meta.push_str(&format!("  Criado: {}", FormatUtil::date_time(&t.created_date)));
    lines.push(meta);

    if let Some(category) = t.category.as_deref().filter(|c| !c.trim().is_empty()) {
        lines.push(format!("    {}", render_badge(category, None)));
    }
    lines.push(format!(
        "    {} Última atualização: {}",
        Icon::Clock.glyph(),
        FormatUtil::date_time(&t.updated_date)
    ));
    lines.join("\n")
}
