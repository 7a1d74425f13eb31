use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub glpi_connection: bool,
    pub glpi_authentication: bool,
    pub cache_status: bool,
    /// ISO-8601; `None` means never synced (sent as `""`).
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub last_sync: Option<String>,
}

impl SystemStatus {
    pub fn all_healthy(&self) -> bool {
        self.glpi_connection && self.glpi_authentication && self.cache_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_last_sync_means_never() {
        let status: SystemStatus = serde_json::from_value(json!({
            "glpi_connection": true,
            "glpi_authentication": false,
            "cache_status": true,
            "last_sync": ""
        }))
        .unwrap();
        assert_eq!(status.last_sync, None);
        assert!(!status.all_healthy());
    }

    #[test]
    fn keeps_last_sync_timestamp() {
        let status: SystemStatus = serde_json::from_value(json!({
            "glpi_connection": true,
            "glpi_authentication": true,
            "cache_status": true,
            "last_sync": "2024-01-15T10:30:00"
        }))
        .unwrap();
        assert_eq!(status.last_sync.as_deref(), Some("2024-01-15T10:30:00"));
        assert!(status.all_healthy());
    }
}
