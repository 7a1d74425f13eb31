use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Per-group totals carried by the advanced metrics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalGroup {
    pub name: String,
    pub total_tickets: u64,
    pub resolved_tickets: u64,
    pub pending_tickets: u64,
    pub resolution_rate: f64,
}

/// Pulls `technical_groups` out of an advanced metrics payload.
/// Missing or malformed data yields an empty list.
pub fn groups_from_advanced(payload: &Value) -> Vec<TechnicalGroup> {
    let Some(raw) = payload.get("technical_groups") else {
        return Vec::new();
    };

    match serde_json::from_value::<Vec<TechnicalGroup>>(raw.clone()) {
        Ok(groups) => groups,
        Err(e) => {
            warn!(error = %e, "Ignoring malformed technical_groups in advanced metrics");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_groups() {
        let payload = json!({
            "technical_groups": [
                { "name": "N1 - Service Desk", "total_tickets": 40, "resolved_tickets": 30, "pending_tickets": 10, "resolution_rate": 75.0 }
            ],
            "other": 1
        });
        let groups = groups_from_advanced(&payload);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "N1 - Service Desk");
    }

    #[test]
    fn missing_or_malformed_groups_are_empty() {
        assert!(groups_from_advanced(&json!({})).is_empty());
        assert!(groups_from_advanced(&json!({ "technical_groups": "nope" })).is_empty());
    }
}
