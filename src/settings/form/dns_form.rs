//! State of the DNS settings form and the transitions between its states.
//!
//! Every transition consumes the current state and returns the next one, so
//! the editor (or any other driver) replaces its state wholesale.

use crate::{
    core::domain::{
        error::PiholeError,
        model::dns_settings::{
            ConditionalForwarding, DEFAULT_FORWARDING_DOMAIN, DnsOptions, DnsSettings,
        },
        value_object::{is_valid_hostname, is_valid_ipv4},
    },
    settings::form::{
        alert::{AlertKind, AlertState},
        translator::{self, Translator},
        upstream_list,
    },
};
use serde_json::json;

/// Everything the DNS settings form displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsFormState {
    pub alert: AlertState,
    /// A save is in flight.
    pub processing: bool,
    pub settings: DnsSettings,
}

impl DnsFormState {
    /// Replaces the settings with a freshly loaded snapshot. An empty
    /// forwarding domain is shown as [`DEFAULT_FORWARDING_DOMAIN`].
    pub fn loaded(self, mut settings: DnsSettings) -> Self {
        if settings.conditional_forwarding.domain.is_empty() {
            settings.conditional_forwarding.domain = DEFAULT_FORWARDING_DOMAIN.to_string();
        }
        Self { settings, ..self }
    }

    pub fn with_upstream_added(mut self, upstream: impl Into<String>) -> Self {
        self.settings.upstream_dns = upstream_list::add(self.settings.upstream_dns, upstream);
        self
    }

    pub fn with_upstream_removed(mut self, upstream: &str) -> Self {
        self.settings.upstream_dns = upstream_list::remove(self.settings.upstream_dns, upstream);
        self
    }

    pub fn with_conditional_forwarding(mut self, conditional_forwarding: ConditionalForwarding) -> Self {
        self.settings.conditional_forwarding = conditional_forwarding;
        self
    }

    pub fn with_options(mut self, options: DnsOptions) -> Self {
        self.settings.options = options;
        self
    }

    /// The router address is valid while forwarding is disabled, or when it is an IPv4 address.
    pub fn is_router_ip_valid(&self) -> bool {
        self.is_forwarding_field_valid(&self.settings.conditional_forwarding.router_ip, is_valid_ipv4)
    }

    /// The domain is valid while forwarding is disabled, or when it is a hostname.
    pub fn is_domain_valid(&self) -> bool {
        self.is_forwarding_field_valid(&self.settings.conditional_forwarding.domain, is_valid_hostname)
    }

    fn is_forwarding_field_valid(&self, value: &str, validator: fn(&str) -> bool) -> bool {
        !self.settings.conditional_forwarding.enabled || validator(value)
    }

    /// Whether the apply button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.processing && self.is_router_ip_valid() && self.is_domain_valid()
    }

    /// Marks a save as started.
    pub fn begin_save(self, t: &dyn Translator) -> Self {
        Self {
            alert: AlertState::show(t.translate(translator::PROCESSING, &json!({})), AlertKind::Info),
            processing: true,
            ..self
        }
    }

    pub fn save_succeeded(self, t: &dyn Translator) -> Self {
        Self {
            alert: AlertState::show(
                t.translate(translator::SAVE_SUCCEEDED, &json!({})),
                AlertKind::Success,
            ),
            processing: false,
            ..self
        }
    }

    /// Reports a failed save. Structured API errors are localized from their
    /// key and data; any other error shows its own message.
    pub fn save_failed(self, error: &PiholeError, t: &dyn Translator) -> Self {
        let message = match error {
            PiholeError::Api { key, data, .. } => t.translate(
                translator::API_ERROR,
                &json!({ "error": t.translate(key, data) }),
            ),
            other => other.to_string(),
        };

        Self {
            alert: AlertState::show(message, AlertKind::Danger),
            processing: false,
            ..self
        }
    }

    pub fn hide_alert(self) -> Self {
        Self {
            alert: self.alert.hidden(),
            ..self
        }
    }
}
