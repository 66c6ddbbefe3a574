//! Response classification shared by every transport.
//!
//! DESIGN
//! ======
//! The browser and the CLI use different HTTP stacks, but both hand the raw
//! status, `Content-Type` and body to [`classify`] so staff see identical
//! messages whichever surface they use. The `Display` text of [`ApiError`]
//! is what the UI prints.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::envelope::ApiResponse;

/// Message used when a failed response carries no `message`.
pub const FALLBACK_SERVER_MESSAGE: &str = "Something went wrong";

/// Shown when a login attempt fails without a server message.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error. Please check your connection.")]
    Network,
    /// Non-JSON error response.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    /// Successful status but the body is not JSON.
    #[error("Invalid response format")]
    InvalidFormat,
    /// The admin session is missing or expired (HTTP 401). `message` is
    /// whatever the body said, kept for callers that are not session checks.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized { message: Option<String> },
    /// JSON error response from the API.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The envelope reported `success: false` or lacked `data`.
    #[error("{0}")]
    Rejected(String),
    /// JSON body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    /// Request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),
    /// Called from a context without a browser (SSR render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status attached to this error, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } | Self::Server { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    /// Re-read a failed login: a 401 there means rejected credentials, not an
    /// expired session, so it carries the server message or "Login failed".
    #[must_use]
    pub fn into_login_failure(self) -> Self {
        match self {
            Self::Unauthorized { message } => {
                Self::Rejected(message.unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_owned()))
            }
            other => other,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// True when a `Content-Type` value announces a JSON body.
#[must_use]
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.to_ascii_lowercase().contains("application/json"))
}

/// Turn a raw HTTP response into an envelope or an [`ApiError`].
///
/// # Errors
///
/// Non-JSON responses yield [`ApiError::Http`] or [`ApiError::InvalidFormat`].
/// A JSON body that does not parse yields [`ApiError::Decode`] whatever the
/// status. Then 401 yields [`ApiError::Unauthorized`] and other failures
/// yield [`ApiError::Server`] (body `message`, then `error`, then the
/// fallback).
pub fn classify<T: DeserializeOwned>(
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<ApiResponse<T>, ApiError> {
    let ok = (200..300).contains(&status);
    if !is_json_content_type(content_type) {
        return Err(if ok { ApiError::InvalidFormat } else { ApiError::Http { status } });
    }
    if ok {
        return serde_json::from_slice(body).map_err(decode_error);
    }

    let parsed = serde_json::from_slice::<ErrorBody>(body).map_err(decode_error)?;
    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .or(parsed.error.filter(|e| !e.is_empty()));
    if status == 401 {
        return Err(ApiError::Unauthorized { message });
    }
    Err(ApiError::Server { status, message: message.unwrap_or_else(|| FALLBACK_SERVER_MESSAGE.to_owned()) })
}

fn decode_error(err: serde_json::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}
