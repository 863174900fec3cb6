//! Internal HTTP client for the Pi-hole admin API.

use crate::core::domain::{
    config::ClientConfig,
    error::{PiholeError, PiholeResult, ValidationError},
    model::api_response::ApiErrorResponse,
    value_object::PiholeUrl,
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, Method, StatusCode, header::HeaderMap};
use serde::{Serialize, de::DeserializeOwned};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Internal HTTP client that resolves resource paths under `/admin/api/` and
/// turns non-success responses into [`PiholeError`]s.
///
/// The session cookie handed out by the `auth` endpoint is kept in the
/// client's cookie store, so every request after a successful login is
/// authenticated without further bookkeeping here.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    base_url: PiholeUrl,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
    authenticated: AtomicBool,
}

impl ApiClient {
    /// Creates a new `ApiClient`. The client starts unauthenticated.
    ///
    /// # Errors
    /// Returns `PiholeError::Connection` if the HTTP client cannot be built and
    /// `PiholeError::Validation` if the rate limit is configured with zeros.
    pub fn new(base_url: PiholeUrl, config: &ClientConfig) -> PiholeResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .cookie_store(true)
            .build()
            .map_err(|e| PiholeError::Connection(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = non_zero("requests_per_second", rl.requests_per_second)?;
                let burst = non_zero("burst_size", rl.burst_size)?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            base_url,
            rate_limiter,
            authenticated: AtomicBool::new(false),
        })
    }

    /// Returns the base URL of the web interface.
    pub fn base_url(&self) -> &PiholeUrl {
        &self.base_url
    }

    pub(crate) fn set_authenticated(&self, authenticated: bool) {
        self.authenticated.store(authenticated, Ordering::SeqCst);
    }

    /// Returns `true` after a successful login and until logout.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    /// Performs a GET request.
    ///
    /// # Errors
    /// Returns `PiholeError` if the request fails, the server reports an
    /// error, or the response cannot be parsed.
    pub async fn get<T>(&self, path: &str) -> PiholeResult<T>
    where
        T: DeserializeOwned,
    {
        self.execute_request(Method::GET, path, None::<&()>, HeaderMap::new())
            .await
    }

    /// Performs a GET request with extra headers.
    pub async fn get_with_headers<T>(&self, path: &str, headers: HeaderMap) -> PiholeResult<T>
    where
        T: DeserializeOwned,
    {
        self.execute_request(Method::GET, path, None::<&()>, headers)
            .await
    }

    /// Performs a PUT request with a JSON body.
    ///
    /// # Errors
    /// Returns `PiholeError` if the request fails, the server reports an
    /// error, or the response cannot be parsed.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> PiholeResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.execute_request(Method::PUT, path, Some(body), HeaderMap::new())
            .await
    }

    /// Performs a DELETE request.
    pub async fn delete<T>(&self, path: &str) -> PiholeResult<T>
    where
        T: DeserializeOwned,
    {
        self.execute_request(Method::DELETE, path, None::<&()>, HeaderMap::new())
            .await
    }

    async fn execute_request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: HeaderMap,
    ) -> PiholeResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self.base_url.api_path(path)?;
        debug!(%method, %url, "sending API request");

        let mut req_builder = self.http_client.request(method.clone(), url).headers(headers);
        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| PiholeError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let error = error_from_response(status, &error_text);
            warn!(%method, path, %status, %error, "API request failed");
            return Err(error);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PiholeError::Connection(format!("Failed to parse response: {}", e)))
    }
}

fn non_zero(field: &str, value: u32) -> Result<NonZeroU32, ValidationError> {
    NonZeroU32::new(value).ok_or_else(|| ValidationError::Field {
        field: field.to_string(),
        message: "Rate limit values must be greater than 0".to_string(),
    })
}

/// Maps a non-success response to an error, preferring the API's structured
/// `{ "error": { "key", "message", "data" } }` body when present.
fn error_from_response(status: StatusCode, body: &str) -> PiholeError {
    if let Ok(ApiErrorResponse { error }) = serde_json::from_str::<ApiErrorResponse>(body) {
        return PiholeError::Api {
            status: status.as_u16(),
            key: error.key,
            message: error.message,
            data: error
                .data
                .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
        };
    }

    if status == StatusCode::UNAUTHORIZED {
        return PiholeError::Authentication("Unauthorized".to_string());
    }

    let body = if body.is_empty() { "unknown" } else { body };
    PiholeError::Connection(format!("API error ({}): {}", status, body))
}
