use crate::core::domain::{
    error::{PiholeResult, ValidationError},
    value_object::{pihole_host::PiholeHost, pihole_port::PiholePort},
};
use url::Url;

const API_ROOT: &str = "admin/api/";

/// Base URL of a Pi-hole web interface, e.g. `http://pi.hole:80/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiholeUrl(Url);

impl PiholeUrl {
    /// Builds the base URL from its validated parts.
    pub fn new(host: &PiholeHost, port: &PiholePort, secure: bool) -> PiholeResult<Self> {
        let scheme = if secure { "https" } else { "http" };
        let host = if host.is_ipv6() {
            format!("[{}]", host.as_str())
        } else {
            host.as_str().to_string()
        };
        let raw = format!("{}://{}:{}/", scheme, host, port.get());
        let url = Url::parse(&raw)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        Ok(Self(url))
    }

    /// Creates a URL without validation. Panics on unparsable input.
    #[cfg(test)]
    pub(crate) fn new_unchecked(url: &str) -> Self {
        Self(Url::parse(url).unwrap())
    }

    /// Resolves an API resource path (e.g. `settings/dns`) under `/admin/api/`.
    pub fn api_path(&self, path: &str) -> PiholeResult<Url> {
        let api_root = self
            .0
            .join(API_ROOT)
            .map_err(|e| ValidationError::Format(format!("Invalid API root: {}", e)))?;
        api_root
            .join(path.trim_start_matches('/'))
            .map_err(|e| ValidationError::Format(format!("Invalid API path '{}': {}", path, e)).into())
    }

    /// Returns the base URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}
