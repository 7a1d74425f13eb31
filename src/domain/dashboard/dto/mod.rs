pub mod dashboard_metrics;
pub mod filter_set;
pub mod system_status;
pub mod technical_group;
pub mod technician;
pub mod ticket_item;

use serde::Deserialize;

/// Success envelope of every dashboard endpoint: `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}
