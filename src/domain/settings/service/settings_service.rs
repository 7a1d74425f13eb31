use anyhow::Result;
use tracing::info;
use validator::Validate;

use crate::domain::settings::dto::settings_form::SettingsForm;

/// Validates the form and records it. Nothing is persisted; the backend
/// owns its own GLPI credentials.
pub fn save_settings(form: &SettingsForm) -> Result<()> {
    form.validate()?;
    info!(
        glpi_url = %form.glpi_url,
        app_token_set = !form.app_token.is_empty(),
        user_token_set = !form.user_token.is_empty(),
        cache_ttl = form.cache_ttl,
        refresh_interval = form.refresh_interval,
        auto_refresh = form.auto_refresh,
        notifications = form.notifications_enabled,
        theme = ?form.theme,
        "Settings saved"
    );
    Ok(())
}
