use serde::{Deserialize, Serialize};

/// A row of the technician ranking. `rank` comes from the backend and is
/// never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub total_tickets: u64,
    pub resolved_tickets: u64,
    pub pending_tickets: u64,
    /// Hours.
    pub average_resolution_time: f64,
    /// Percentage, 0–100.
    pub resolution_rate: f64,
    pub level: String,
    pub rank: u32,
}

impl Technician {
    /// Case-insensitive substring match on name or email.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.email.to_lowercase().contains(&needle)
    }
}
