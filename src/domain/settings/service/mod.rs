pub mod settings_service;
