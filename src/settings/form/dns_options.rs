//! DNS options panel: each edit yields the whole updated section.

use crate::core::domain::model::dns_settings::{DnsOptions, ListeningType};

impl DnsOptions {
    pub fn with_fqdn_required(self, fqdn_required: bool) -> Self {
        Self {
            fqdn_required,
            ..self
        }
    }

    pub fn with_bogus_priv(self, bogus_priv: bool) -> Self {
        Self { bogus_priv, ..self }
    }

    pub fn with_dnssec(self, dnssec: bool) -> Self {
        Self { dnssec, ..self }
    }

    pub fn with_listening_type(self, listening_type: ListeningType) -> Self {
        Self {
            listening_type,
            ..self
        }
    }
}

impl ListeningType {
    /// Every choice, in the order the panel lists them.
    pub const ALL: [ListeningType; 3] = [ListeningType::Local, ListeningType::Single, ListeningType::All];

    /// Wire name of the listening type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListeningType::All => "all",
            ListeningType::Local => "local",
            ListeningType::Single => "single",
        }
    }
}
