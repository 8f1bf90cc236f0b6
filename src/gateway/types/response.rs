//! API response envelope
//!
//! Every endpoint answers HTTP 200 with `{success, ...}` in the body; the
//! outcome lives in the JSON, not the status code (the health endpoint is
//! the one exception). Failures carry a short `message` and the detailed
//! error stays in the server log.

use serde::Serialize;

/// Response envelope: `success` plus an optional message, with any data
/// payload flattened into the top level (`session_url`, `data`, ...).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success with a flattened data payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Success acknowledgment carrying only a message
    pub fn ok_message(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failure with a client-safe message
    pub fn failure(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}
