//! Upstream server list editor.
//!
//! The list keeps insertion order and allows duplicates; removal drops every
//! entry equal to the given value.

use crate::core::domain::value_object::{validate_hostname, validate_ipv4};
use std::net::Ipv6Addr;

/// Appends `upstream` to the list.
pub fn add(mut upstreams: Vec<String>, upstream: impl Into<String>) -> Vec<String> {
    upstreams.push(upstream.into());
    upstreams
}

/// Removes every entry equal to `upstream`.
pub fn remove(mut upstreams: Vec<String>, upstream: &str) -> Vec<String> {
    upstreams.retain(|item| item != upstream);
    upstreams
}

/// Checks a candidate entry before it is offered for adding: an IPv4 or IPv6
/// address, or a hostname, optionally followed by `#port`.
pub fn is_valid_upstream(value: &str) -> bool {
    let (address, port) = match value.rsplit_once('#') {
        Some((address, port)) => (address, Some(port)),
        None => (value, None),
    };

    if let Some(port) = port {
        if !matches!(port.parse::<u16>(), Ok(p) if p != 0) {
            return false;
        }
    }

    validate_ipv4(address).is_ok()
        || address.parse::<Ipv6Addr>().is_ok()
        || validate_hostname(address).is_ok()
}
