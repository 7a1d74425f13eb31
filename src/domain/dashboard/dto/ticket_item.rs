use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketItem {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub status: String,
    pub priority: String,
    pub requester: String,
    #[serde(default)]
    pub technician: Option<String>,
    /// ISO-8601.
    pub created_date: String,
    /// ISO-8601.
    pub updated_date: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl TicketItem {
    /// Case-insensitive substring match on title, content or requester.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        [&self.title, &self.content, &self.requester]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Assigned technician, treating a blank name as unassigned.
    pub fn assignee(&self) -> Option<&str> {
        self.technician.as_deref().filter(|t| !t.trim().is_empty())
    }
}
