//! Envelopes shared by every endpoint of the admin API.

use serde::Deserialize;

/// Body returned by endpoints that only acknowledge an action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiSuccessResponse {
    pub status: String,
}

/// Body returned alongside a non-success status code.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub key: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}
