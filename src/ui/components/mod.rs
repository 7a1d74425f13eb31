// Pure renderers; nothing in here touches the network.
pub mod charts;
pub mod date_range_picker;
pub mod error_message;
pub mod level_badge;
pub mod metric_card;
pub mod priority_badge;
pub mod rank_icon;
pub mod status_badge;
pub mod style;
pub mod technical_groups;
