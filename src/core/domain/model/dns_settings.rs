//! Domain model for the DNS settings served by the `settings/dns` endpoint.
//!
//! The same shape is read from and written back to the API, so the types
//! carry the snake_case wire naming directly.

use serde::{Deserialize, Serialize};

/// Domain used for conditional forwarding when the server reports none.
pub const DEFAULT_FORWARDING_DOMAIN: &str = "lan";

/// A snapshot of the appliance's DNS settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsSettings {
    /// Upstream resolvers, in the order they were configured.
    pub upstream_dns: Vec<String>,
    pub conditional_forwarding: ConditionalForwarding,
    pub options: DnsOptions,
}

/// Forwarding of queries for a local domain to the network's router.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConditionalForwarding {
    pub enabled: bool,
    /// IPv4 address of the router answering for `domain`.
    pub router_ip: String,
    pub domain: String,
}

/// Resolver behaviour flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsOptions {
    /// Never forward non-FQDN queries upstream.
    pub fqdn_required: bool,
    /// Never forward reverse lookups for private ranges upstream.
    pub bogus_priv: bool,
    pub dnssec: bool,
    pub listening_type: ListeningType,
}

/// Which interfaces and origins the resolver answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListeningType {
    /// Listen on all interfaces, permit all origins.
    All,
    /// Listen on all interfaces, answer only local subnets.
    Local,
    /// Listen only on the configured interface.
    #[default]
    Single,
}
