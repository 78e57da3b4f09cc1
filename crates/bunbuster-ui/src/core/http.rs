//! Transport-agnostic HTTP error handling for the API client.
//!
//! # Design
//! - Classify responses here so the wasm transport stays a thin shell.
//! - Prefer the server's JSON `message`, then the raw body, then the status line.

use bunbuster_api_models::ErrorBody;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure returned by every API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Human-readable message extracted from the response.
        message: String,
    },
    /// A 2xx response carried a payload the client could not decode.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The call needs a bearer token and none is held.
    #[error("not signed in")]
    NoSession,
}

impl ApiError {
    /// Build an HTTP error from the raw response parts.
    #[must_use]
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        Self::Http {
            status,
            message: error_message(status, status_text, body),
        }
    }

    /// Status code for HTTP failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the caller's credentials.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Whether the failure should be swallowed without notifying the user.
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::NoSession)
    }
}

/// Whether a status code counts as success.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Extract a human-readable failure message from a response body.
#[must_use]
pub fn error_message(status: u16, status_text: &str, body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(trimmed)
        && let Some(message) = parsed.message.filter(|message| !message.trim().is_empty())
    {
        return message;
    }
    if !trimmed.is_empty() && !trimmed.starts_with('{') && !trimmed.starts_with('<') {
        return trimmed.to_string();
    }
    if status_text.trim().is_empty() {
        format!("Error {status}")
    } else {
        format!("Error {status}: {}", status_text.trim())
    }
}

/// Decode a JSON response body, classifying non-2xx statuses first.
///
/// # Errors
/// Returns [`ApiError::Http`] for non-2xx statuses and [`ApiError::Decode`] when a
/// successful body does not match `T`.
pub fn decode_json<T: DeserializeOwned>(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_response(status, status_text, body));
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Accept any 2xx response and ignore its body.
///
/// # Errors
/// Returns [`ApiError::Http`] for non-2xx statuses.
pub fn expect_success(status: u16, status_text: &str, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::from_response(status, status_text, body))
    }
}

/// Value for the `Authorization` header.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
