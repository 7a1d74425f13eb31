pub mod dashboard_page;
pub mod settings_page;
pub mod technical_groups_page;
pub mod technicians_page;
pub mod tickets_page;

use crate::domain::dashboard::dto::filter_set::FilterSet;
use crate::ui::components::date_range_picker::render_date_range;
use crate::ui::components::error_message::render_error_message;

const LOADING_LINE: &str = "  carregando...";

/// Title line plus the date range the page is filtered by.
pub(crate) fn page_header(title: &str, filters: &FilterSet) -> String {
    format!("== {} ==\n{}", title, render_date_range(filters))
}

/// What an errored page shows instead of its content.
pub(crate) fn page_error(title: &str, message: &str) -> String {
    format!("== {} ==\n{}", title, render_error_message(message, true))
}
