//! Drives a [`DnsFormState`] against the API: load on mount, save on submit,
//! and abandon both on unmount.

use crate::{
    core::{
        domain::{
            error::{PiholeError, PiholeResult},
            model::dns_settings::{ConditionalForwarding, DnsOptions},
        },
        infrastructure::cancelable::{cancelable, ignore_cancel},
    },
    settings::{
        application::service::dns_settings_service::DnsSettingsGateway,
        form::{
            dns_form::DnsFormState,
            translator::{PassthroughTranslator, Translator},
        },
    },
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Editor session for the DNS settings page.
///
/// The session owns a [`CancellationToken`]. [`unmount`](Self::unmount), or
/// dropping the editor, cancels it: a pending load or save then resolves
/// without touching the state.
///
/// # Examples
///
/// ```no_run
/// use pihole_web::{PiholeClient, PiholeResult};
///
/// #[tokio::main]
/// async fn main() -> PiholeResult<()> {
///     let client = PiholeClient::builder().host("pi.hole")?.build()?;
///     let mut editor = client.dns_settings_editor();
///
///     editor.mount().await?;
///     editor.add_upstream("9.9.9.9");
///     editor.submit().await;
///
///     println!("{}", editor.state().alert.message);
///     Ok(())
/// }
/// ```
pub struct DnsSettingsEditor<G, T = PassthroughTranslator> {
    gateway: Arc<G>,
    translator: T,
    state: DnsFormState,
    token: CancellationToken,
}

impl<G> DnsSettingsEditor<G, PassthroughTranslator>
where
    G: DnsSettingsGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_translator(gateway, PassthroughTranslator)
    }
}

impl<G, T> DnsSettingsEditor<G, T>
where
    G: DnsSettingsGateway,
    T: Translator,
{
    pub fn with_translator(gateway: Arc<G>, translator: T) -> Self {
        Self {
            gateway,
            translator,
            state: DnsFormState::default(),
            token: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> &DnsFormState {
        &self.state
    }

    /// A handle that unmounts this editor when cancelled, usable from another task.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_unmounted(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Loads the current settings into the form.
    ///
    /// # Errors
    /// Returns the load error, leaving the state untouched. A load abandoned
    /// by unmounting is not an error.
    pub async fn mount(&mut self) -> PiholeResult<()> {
        let result = cancelable(&self.token, self.gateway.dns_settings()).await;

        match ignore_cancel(result)? {
            Some(settings) if !self.token.is_cancelled() => {
                self.transition(|state| state.loaded(settings));
                info!(
                    upstreams = self.state.settings.upstream_dns.len(),
                    "loaded DNS settings"
                );
            }
            _ => debug!("discarding DNS settings load after unmount"),
        }
        Ok(())
    }

    /// Cancels any pending load or save.
    pub fn unmount(&self) {
        self.token.cancel();
    }

    /// Applies an arbitrary state transition.
    pub fn transition(&mut self, f: impl FnOnce(DnsFormState) -> DnsFormState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }

    pub fn add_upstream(&mut self, upstream: impl Into<String>) {
        self.transition(|state| state.with_upstream_added(upstream));
    }

    pub fn remove_upstream(&mut self, upstream: &str) {
        self.transition(|state| state.with_upstream_removed(upstream));
    }

    pub fn update_conditional_forwarding(&mut self, conditional_forwarding: ConditionalForwarding) {
        self.transition(|state| state.with_conditional_forwarding(conditional_forwarding));
    }

    pub fn update_options(&mut self, options: DnsOptions) {
        self.transition(|state| state.with_options(options));
    }

    pub fn hide_alert(&mut self) {
        self.transition(DnsFormState::hide_alert);
    }

    /// Saves the form. Does nothing while a field is invalid, a save is in
    /// flight, or the editor is unmounted. The outcome is reported through
    /// the alert, never as an error.
    pub async fn submit(&mut self) {
        if !self.state.can_submit() || self.token.is_cancelled() {
            debug!(processing = self.state.processing, "submit ignored");
            return;
        }

        let translator = &self.translator;
        let state = std::mem::take(&mut self.state);
        self.state = state.begin_save(translator);

        let result = cancelable(
            &self.token,
            self.gateway.update_dns_settings(&self.state.settings),
        )
        .await;

        if self.token.is_cancelled() {
            debug!("discarding DNS settings save after unmount");
            return;
        }

        let translator = &self.translator;
        let state = std::mem::take(&mut self.state);
        self.state = match result {
            Ok(_) => {
                info!("saved DNS settings");
                state.save_succeeded(translator)
            }
            Err(PiholeError::Cancelled) => state,
            Err(error) => {
                warn!(%error, "failed to save DNS settings");
                state.save_failed(&error, translator)
            }
        };
    }
}

impl<G, T> Drop for DnsSettingsEditor<G, T> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
