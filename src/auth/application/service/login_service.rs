use crate::core::{
    domain::{
        error::{PiholeError, PiholeResult, ValidationError},
        model::api_response::ApiSuccessResponse,
    },
    infrastructure::api_client::ApiClient,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::info;

/// `X-Pi-hole-Authenticate`, carrying the API key (or web password hash) on the `auth` endpoint.
pub(crate) const AUTH_HEADER: &str = "x-pi-hole-authenticate";

/// Opens a session on the admin API. The session cookie set by the server is
/// retained by the client's cookie store.
pub struct LoginService;

impl LoginService {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self, client: &ApiClient, key: &str) -> PiholeResult<()> {
        let headers = self.build_auth_headers(key)?;

        match client
            .get_with_headers::<ApiSuccessResponse>("auth", headers)
            .await
        {
            Ok(_) => {
                client.set_authenticated(true);
                info!("authenticated with the admin API");
                Ok(())
            }
            Err(PiholeError::Api {
                status: 401,
                message,
                ..
            }) => {
                client.set_authenticated(false);
                Err(PiholeError::Authentication(if message.is_empty() {
                    "Invalid API key provided".to_string()
                } else {
                    message
                }))
            }
            Err(PiholeError::Authentication(_)) => {
                client.set_authenticated(false);
                Err(PiholeError::Authentication(
                    "Invalid API key provided".to_string(),
                ))
            }
            Err(error) => {
                client.set_authenticated(false);
                Err(error)
            }
        }
    }

    fn build_auth_headers(&self, key: &str) -> PiholeResult<HeaderMap> {
        if key.is_empty() {
            return Err(ValidationError::Field {
                field: "key".to_string(),
                message: "API key cannot be empty".to_string(),
            }
            .into());
        }

        let mut value = HeaderValue::from_str(key).map_err(|_| {
            ValidationError::Format("API key contains invalid characters".to_string())
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(AUTH_HEADER), value);
        Ok(headers)
    }
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new()
    }
}

/// Closes the current session.
pub struct LogoutService;

impl LogoutService {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self, client: &ApiClient) -> PiholeResult<()> {
        client.delete::<ApiSuccessResponse>("auth").await?;
        client.set_authenticated(false);
        info!("closed admin API session");
        Ok(())
    }
}

impl Default for LogoutService {
    fn default() -> Self {
        Self::new()
    }
}
