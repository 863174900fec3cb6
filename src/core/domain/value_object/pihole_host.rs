use crate::core::domain::{
    error::{PiholeResult, ValidationError},
    value_object::hostname::validate_hostname,
};
use std::net::IpAddr;

/// A validated Pi-hole host: a hostname or an IP address literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiholeHost(String);

impl PiholeHost {
    /// Creates a new host, validating its syntax.
    pub fn new(host: impl Into<String>) -> PiholeResult<Self> {
        let host = host.into();
        validate_host(&host)?;
        Ok(Self(host))
    }

    /// Returns the host as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the host is an IPv6 literal and needs brackets in a URL.
    pub(crate) fn is_ipv6(&self) -> bool {
        matches!(self.0.parse::<IpAddr>(), Ok(IpAddr::V6(_)))
    }
}

/// Validates a host. IP literals are accepted as-is; anything else must be a hostname.
pub(crate) fn validate_host(host: &str) -> Result<(), ValidationError> {
    if host.is_empty() {
        return Err(ValidationError::Field {
            field: "host".to_string(),
            message: "Host cannot be empty".to_string(),
        });
    }
    if host.parse::<IpAddr>().is_ok() {
        return Ok(());
    }
    validate_hostname(host)
}
