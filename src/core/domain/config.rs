/// Client-side rate limit applied to every API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

/// Transport configuration for [`ApiClient`](crate::core::infrastructure::api_client::ApiClient).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Accept self-signed certificates (common on appliances served over https).
    pub accept_invalid_certs: bool,
    /// Disabled when `None`.
    pub rate_limit: Option<RateLimitConfig>,
}
