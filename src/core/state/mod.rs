// Per-page runtime state
pub mod page;
