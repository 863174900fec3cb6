//! Conditional forwarding panel: each edit yields the whole updated section.

use crate::core::domain::model::dns_settings::ConditionalForwarding;

impl ConditionalForwarding {
    pub fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }

    pub fn with_router_ip(self, router_ip: impl Into<String>) -> Self {
        Self {
            router_ip: router_ip.into(),
            ..self
        }
    }

    pub fn with_domain(self, domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..self
        }
    }
}
