use crate::core::{
    domain::{
        error::PiholeResult,
        model::{api_response::ApiSuccessResponse, dns_settings::DnsSettings},
    },
    infrastructure::api_client::ApiClient,
};
use async_trait::async_trait;
use std::sync::Arc;

const DNS_SETTINGS_PATH: &str = "settings/dns";

/// Load and save operations the DNS settings editor depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsSettingsGateway: Send + Sync {
    /// Fetches the current DNS settings.
    async fn dns_settings(&self) -> PiholeResult<DnsSettings>;

    /// Replaces the DNS settings with `settings`.
    async fn update_dns_settings(&self, settings: &DnsSettings)
    -> PiholeResult<ApiSuccessResponse>;
}

/// [`DnsSettingsGateway`] backed by the admin API.
#[derive(Debug, Clone)]
pub struct DnsSettingsService {
    client: Arc<ApiClient>,
}

impl DnsSettingsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DnsSettingsGateway for DnsSettingsService {
    async fn dns_settings(&self) -> PiholeResult<DnsSettings> {
        self.client.get(DNS_SETTINGS_PATH).await
    }

    async fn update_dns_settings(
        &self,
        settings: &DnsSettings,
    ) -> PiholeResult<ApiSuccessResponse> {
        self.client.put(DNS_SETTINGS_PATH, settings).await
    }
}
