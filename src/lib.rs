pub mod app_state;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ui;
