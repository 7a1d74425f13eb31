pub mod settings_form;
