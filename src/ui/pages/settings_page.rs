use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::core::state::page::page_controller::{PageController, PageFetcher};
use crate::core::state::page::page_state::PageState;
use crate::core::util::format_util::FormatUtil;
use crate::domain::dashboard::dto::filter_set::FilterSet;
use crate::domain::dashboard::dto::system_status::SystemStatus;
use crate::domain::dashboard::service::DashboardApi;
use crate::domain::settings::dto::settings_form::SettingsForm;
use crate::domain::settings::service::settings_service::save_settings;
use crate::errors::ApiError;
use crate::ui::components::error_message::render_error_message;
use crate::ui::components::style::{Icon, Tone};

pub const TITLE: &str = "Configurações";
pub const NEVER_SYNCED: &str = "Nunca";
pub const UNTESTED_HINT: &str = "Use \"Testar Conexão\" para verificar o backend.";

pub struct SystemStatusFetcher {
    api: Arc<dyn DashboardApi>,
}

#[async_trait]
impl PageFetcher for SystemStatusFetcher {
    type Output = SystemStatus;

    async fn fetch(&self, _filters: &FilterSet) -> Result<SystemStatus, ApiError> {
        self.api.get_system_status().await
    }
}

/// Connection check plus the local preferences form.
pub struct SettingsPage {
    status: PageController<SystemStatusFetcher>,
    form: RwLock<SettingsForm>,
}

impl SettingsPage {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            status: PageController::new(
                "settings",
                SystemStatusFetcher { api },
                FilterSet::default(),
            ),
            form: RwLock::new(SettingsForm::default()),
        }
    }

    /// Fetch the backend status. Nothing is fetched until this is called.
    pub async fn test_connection(&self) -> PageState<SystemStatus> {
        let state = self.status.load().await;
        if let PageState::Error(message) = &state {
            warn!(%message, "Connection test failed");
        }
        state
    }

    /// `None` until the first connection test.
    pub async fn status(&self) -> Option<PageState<SystemStatus>> {
        if self.status.generation().await == 0 {
            return None;
        }
        Some(self.status.state().await)
    }

    pub async fn form(&self) -> SettingsForm {
        self.form.read().await.clone()
    }

    pub async fn edit<U: FnOnce(&mut SettingsForm)>(&self, update: U) {
        update(&mut *self.form.write().await);
    }

    pub async fn save(&self) -> anyhow::Result<()> {
        save_settings(&*self.form.read().await)
    }

    pub async fn render(&self) -> String {
        let status = self.status().await;
        let form = self.form().await;
        render_settings(status.as_ref(), &form)
    }
}

fn connection_text(ok: bool) -> &'static str {
    if ok {
        "Conectado"
    } else {
        "Desconectado"
    }
}

fn status_row(label: &str, ok: bool) -> String {
    let (icon, tone) = if ok {
        (Icon::CheckCircle, Tone::Green)
    } else {
        (Icon::XCircle, Tone::Red)
    };
    format!(
        "  {} {}: {} ({})",
        icon.glyph(),
        label,
        connection_text(ok),
        tone.text_class()
    )
}

/// `dd/mm/yyyy HH:MM:SS`, or `Nunca` when the backend has not synced yet.
pub fn last_sync_text(last_sync: Option<&str>) -> String {
    match last_sync {
        Some(raw) if !raw.trim().is_empty() => FormatUtil::date_time_seconds(raw),
        _ => NEVER_SYNCED.to_string(),
    }
}

pub fn render_status(status: Option<&PageState<SystemStatus>>) -> String {
    let mut out = String::from("Status do Sistema");
    match status {
        None => out.push_str(&format!("\n  {}", UNTESTED_HINT)),
        Some(PageState::Loading) => out.push_str("\n  testando conexão..."),
        Some(PageState::Error(message)) => {
            out.push('\n');
            out.push_str(&render_error_message(message, true));
        }
        Some(PageState::Ready(s)) => {
            out.push('\n');
            out.push_str(
                &[
                    status_row("Conexão GLPI", s.glpi_connection),
                    status_row("Autenticação", s.glpi_authentication),
                    status_row("Cache", s.cache_status),
                    format!(
                        "  {} Última Sync: {}",
                        Icon::AlertTriangle.glyph(),
                        last_sync_text(s.last_sync.as_deref())
                    ),
                ]
                .join("\n"),
            );
        }
    }
    out
}

pub fn render_form(form: &SettingsForm) -> String {
    let masked = |token: &str| if token.is_empty() { "(vazio)" } else { "********" };
    let on_off = |flag: bool| if flag { "ativado" } else { "desativado" };
    [
        "Configuração GLPI".to_string(),
        format!("  URL da API GLPI: {}", form.glpi_url),
        format!("  App Token: {}", masked(&form.app_token)),
        format!("  User Token: {}", masked(&form.user_token)),
        format!("  TTL do Cache (segundos): {}", form.cache_ttl),
        format!("  Intervalo de Atualização (segundos): {}", form.refresh_interval),
        "Preferências".to_string(),
        format!("  Notificações: {}", on_off(form.notifications_enabled)),
        format!("  Atualização Automática: {}", on_off(form.auto_refresh)),
        format!("  Tema: {}", form.theme.label()),
    ]
    .join("\n")
}

pub fn render_settings(status: Option<&PageState<SystemStatus>>, form: &SettingsForm) -> String {
    format!(
        "== {} ==\n\n{}\n\n{}",
        TITLE,
        render_status(status),
        render_form(form)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pages::test_support::StubApi;
    use http::StatusCode;

    fn status(last_sync: Option<&str>) -> SystemStatus {
        SystemStatus {
            glpi_connection: true,
            glpi_authentication: false,
            cache_status: true,
            last_sync: last_sync.map(str::to_string),
        }
    }

    #[test]
    fn last_sync_shows_seconds_or_never() {
        assert_eq!(last_sync_text(Some("2024-01-15T10:30:45")), "15/01/2024 10:30:45");
        assert_eq!(last_sync_text(None), NEVER_SYNCED);
        assert_eq!(last_sync_text(Some(" ")), NEVER_SYNCED);
    }

    #[test]
    fn status_rows_use_connection_words() {
        let out = render_status(Some(&PageState::Ready(status(None))));
        assert!(out.contains("Conexão GLPI: Conectado"));
        assert!(out.contains("Autenticação: Desconectado (text-red-600)"));
        assert!(out.contains("Última Sync: Nunca"));
    }

    #[tokio::test]
    async fn nothing_is_fetched_before_testing() {
        let api = Arc::new(StubApi::default());
        let page = SettingsPage::new(api);
        assert_eq!(page.status().await, None);
        assert!(page.render().await.contains(UNTESTED_HINT));
    }

    #[tokio::test]
    async fn failed_test_shows_error_and_can_be_repeated() {
        let api = Arc::new(StubApi::default());
        api.status.lock().unwrap().push(Err(ApiError::Server {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "GLPI indisponível".into(),
        }));
        api.status.lock().unwrap().push(Ok(status(Some("2024-01-15T10:30:45"))));
        let page = SettingsPage::new(api);

        assert_eq!(
            page.test_connection().await,
            PageState::Error("GLPI indisponível".into())
        );
        assert!(page.render().await.contains("GLPI indisponível"));

        assert!(page.test_connection().await.data().is_some());
        assert!(page.render().await.contains("Última Sync: 15/01/2024 10:30:45"));
    }

    #[tokio::test]
    async fn save_rejects_invalid_edits() {
        let page = SettingsPage::new(Arc::new(StubApi::default()));
        page.edit(|f| f.cache_ttl = 10).await;
        assert!(page.save().await.is_err());

        page.edit(|f| f.cache_ttl = 600).await;
        assert!(page.save().await.is_ok());
        assert!(page.render().await.contains("TTL do Cache (segundos): 600"));
    }
}
