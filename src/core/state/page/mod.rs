pub mod page_controller;
pub mod page_state;
