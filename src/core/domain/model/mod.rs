pub mod api_response;
pub mod dns_settings;
pub mod versions;
