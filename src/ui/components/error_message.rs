use crate::ui::components::style::Icon;

pub const ERROR_TITLE: &str = "Erro ao carregar dados";
pub const RETRY_LABEL: &str = "Tentar novamente";

/// Error panel; the retry hint appears only when the page can retry.
pub fn render_error_message(message: &str, can_retry: bool) -> String {
    let mut out = format!("{} {}\n  {}", Icon::AlertCircle.glyph(), ERROR_TITLE, message);
    if can_retry {
        out.push_str(&format!("\n  {} {}", Icon::RefreshCw.glyph(), RETRY_LABEL));
    }
    out
}
