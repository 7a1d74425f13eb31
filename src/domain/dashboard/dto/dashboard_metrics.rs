use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// One day of the ticket trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub tickets: u64,
    pub resolved: u64,
}

/// Aggregate counters for the dashboard page.
///
/// The label→count maps keep the order the backend sent them in, which is
/// the order the charts draw them.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_tickets: u64,
    pub new_tickets: u64,
    pub in_progress_tickets: u64,
    pub resolved_tickets: u64,
    pub closed_tickets: u64,
    pub pending_tickets: u64,
    /// Hours.
    pub average_resolution_time: f64,
    #[serde_as(as = "serde_with::Map<_, _>")]
    #[serde(default)]
    pub tickets_by_priority: Vec<(String, u64)>,
    #[serde_as(as = "serde_with::Map<_, _>")]
    #[serde(default)]
    pub tickets_by_status: Vec<(String, u64)>,
    #[serde(default)]
    pub trend_data: Vec<TrendPoint>,
}

impl DashboardMetrics {
    /// Backend contract: ascending by date, gaps allowed.
    pub fn trend_is_ascending(&self) -> bool {
        self.trend_data.windows(2).all(|w| w[0].date <= w[1].date)
    }
}
