use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_GLPI_URL: &str = "https://glpi.empresa.com/apirest.php";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follows the system preference.
    Auto,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Claro",
            Self::Dark => "Escuro",
            Self::Auto => "Automático",
        }
    }
}

/// Editable GLPI and UI preferences shown on the settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SettingsForm {
    #[validate(url)]
    pub glpi_url: String,
    pub app_token: String,
    pub user_token: String,
    /// Seconds.
    #[validate(range(min = 60, max = 3600))]
    pub cache_ttl: u32,
    pub notifications_enabled: bool,
    pub theme: Theme,
    pub auto_refresh: bool,
    /// Seconds.
    #[validate(range(min = 10, max = 300))]
    pub refresh_interval: u32,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            glpi_url: DEFAULT_GLPI_URL.to_string(),
            app_token: String::new(),
            user_token: String::new(),
            cache_ttl: 300,
            notifications_enabled: true,
            theme: Theme::Light,
            auto_refresh: true,
            refresh_interval: 30,
        }
    }
}
