//! An async-first SDK for the Pi-hole web administration API.
//!
//! Besides typed access to the API, the crate models the DNS settings page:
//! [`DnsFormState`] holds what the form shows and moves between states through
//! plain functions, while [`DnsSettingsEditor`] loads and saves it with
//! operations that are abandoned when the editor is unmounted.

mod auth;
mod core;
mod settings;

#[cfg(test)]
mod tests;

pub use crate::core::domain::{
    config::{ClientConfig, RateLimitConfig},
    error::{PiholeError, PiholeResult, ValidationError},
    model::{
        api_response::ApiSuccessResponse,
        dns_settings::{
            ConditionalForwarding, DEFAULT_FORWARDING_DOMAIN, DnsOptions, DnsSettings,
            ListeningType,
        },
        versions::{ApiVersions, ComponentVersion},
    },
    value_object::{PiholeHost, PiholePort, PiholeUrl, is_valid_hostname, is_valid_ipv4},
};
pub use crate::core::infrastructure::{
    api_client::ApiClient,
    cancelable::{cancelable, ignore_cancel},
};
pub use crate::settings::{
    application::service::dns_settings_service::{DnsSettingsGateway, DnsSettingsService},
    form::{
        alert::{AlertKind, AlertState},
        dns_form::DnsFormState,
        editor::DnsSettingsEditor,
        translator::{API_ERROR, PROCESSING, PassthroughTranslator, SAVE_SUCCEEDED, Translator},
        upstream_list,
    },
};
pub use tokio_util::sync::CancellationToken;

use crate::auth::application::service::login_service::{LoginService, LogoutService};
use std::sync::Arc;

const HTTPS_PORT: u16 = 443;

/// A Client for interacting with the Pi-hole admin API
///
/// # Examples
///
/// ```no_run
/// use pihole_web::{PiholeClient, PiholeResult};
///
/// #[tokio::main]
/// async fn main() -> PiholeResult<()> {
///     let client = PiholeClient::builder()
///         .host("pi.hole")?
///         .port(80)?
///         .build()?;
///
///     client.login("api-key").await?;
///     let settings = client.dns_settings().await?;
///     println!("{:?}", settings.upstream_dns);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PiholeClient {
    api_client: Arc<ApiClient>,
}

/// Builder for PiholeClient configuration
#[derive(Debug, Default)]
pub struct PiholeClientBuilder {
    host: Option<PiholeHost>,
    port: Option<PiholePort>,
    secure: bool,
    config: ClientConfig,
}

impl PiholeClientBuilder {
    pub fn host(mut self, host: impl Into<String>) -> PiholeResult<Self> {
        self.host = Some(PiholeHost::new(host)?);
        Ok(self)
    }

    pub fn port(mut self, port: u16) -> PiholeResult<Self> {
        self.port = Some(PiholePort::new(port)?);
        Ok(self)
    }

    /// Use https. Without an explicit port this also switches the default to 443.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    pub fn rate_limit(mut self, requests_per_second: u32, burst_size: u32) -> Self {
        self.config.rate_limit = Some(RateLimitConfig {
            requests_per_second,
            burst_size,
        });
        self
    }

    pub fn build(self) -> PiholeResult<PiholeClient> {
        let host = self.host.ok_or_else(|| ValidationError::Field {
            field: "host".to_string(),
            message: "Host is required".to_string(),
        })?;

        let port = match self.port {
            Some(port) => port,
            None if self.secure => PiholePort::new(HTTPS_PORT)?,
            None => PiholePort::default(),
        };

        let url = PiholeUrl::new(&host, &port, self.secure)?;
        let api_client = ApiClient::new(url, &self.config)?;

        Ok(PiholeClient {
            api_client: Arc::new(api_client),
        })
    }
}

impl PiholeClient {
    /// Creates a new builder for PiholeClient configuration
    pub fn builder() -> PiholeClientBuilder {
        PiholeClientBuilder::default()
    }

    /// Opens a session using the API key (or web password hash).
    ///
    /// # Errors
    ///
    /// - `PiholeError::Validation` if the key is empty or not a valid header value
    /// - `PiholeError::Authentication` if the server rejects the key
    /// - `PiholeError::Connection` if the server is unreachable
    pub async fn login(&self, key: &str) -> PiholeResult<()> {
        LoginService::new().execute(&self.api_client, key).await
    }

    /// Closes the current session.
    pub async fn logout(&self) -> PiholeResult<()> {
        LogoutService::new().execute(&self.api_client).await
    }

    /// Returns true after a successful login and until logout.
    pub fn is_authenticated(&self) -> bool {
        self.api_client.is_authenticated()
    }

    /// Base URL of the web interface.
    pub fn base_url(&self) -> &PiholeUrl {
        self.api_client.base_url()
    }

    pub async fn dns_settings(&self) -> PiholeResult<DnsSettings> {
        self.dns_settings_service().dns_settings().await
    }

    pub async fn update_dns_settings(
        &self,
        settings: &DnsSettings,
    ) -> PiholeResult<ApiSuccessResponse> {
        self.dns_settings_service()
            .update_dns_settings(settings)
            .await
    }

    /// Versions of the installed components, as shown in the update status.
    pub async fn versions(&self) -> PiholeResult<ApiVersions> {
        self.api_client.get("version").await
    }

    pub fn dns_settings_service(&self) -> DnsSettingsService {
        DnsSettingsService::new(Arc::clone(&self.api_client))
    }

    /// A DNS settings editor that shows untranslated texts.
    pub fn dns_settings_editor(&self) -> DnsSettingsEditor<DnsSettingsService> {
        DnsSettingsEditor::new(Arc::new(self.dns_settings_service()))
    }

    pub fn dns_settings_editor_with_translator<T>(
        &self,
        translator: T,
    ) -> DnsSettingsEditor<DnsSettingsService, T>
    where
        T: Translator,
    {
        DnsSettingsEditor::with_translator(Arc::new(self.dns_settings_service()), translator)
    }
}
