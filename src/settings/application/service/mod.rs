pub mod dns_settings_service;
