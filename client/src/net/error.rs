//! Typed failures returned by every gateway call.
//!
//! ERROR HANDLING
//! ==============
//! Nothing crosses the gateway boundary as a panic. Each variant's `Display`
//! is the human-readable message shown inline by the UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Fallback when neither the response body nor the transport gives a reason.
pub const GENERIC_FAILURE: &str = "An unexpected error occurred";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The back end rejected a login attempt.
    #[error("{0}")]
    InvalidCredentials(String),
    /// 401 on any call. The session has already been cleared.
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The Scholar scraper answered 2xx but reported its own failure.
    #[error("{0}")]
    Scholar(String),
    /// A successful response arrived for a session that no longer exists.
    #[error("session changed while the request was in flight")]
    Superseded,
}

impl ApiError {
    /// Build the error for a non-success HTTP status.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = failure_message(status, body);
        if status == 401 {
            Self::Unauthorized(message)
        } else {
            Self::Server { status, message }
        }
    }

    /// Reinterpret a rejection from a login endpoint.
    ///
    /// Any 4xx (including 401) means the credentials were refused; transport
    /// and 5xx failures pass through unchanged.
    #[must_use]
    pub fn into_login_failure(self) -> Self {
        match self {
            Self::Unauthorized(message) => Self::InvalidCredentials(message),
            Self::Server { status, message } if (400..500).contains(&status) => {
                Self::InvalidCredentials(message)
            }
            other => other,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pick the most specific message: body `message`, body `error`, then status.
pub(crate) fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {status}"))
}

/// Error produced by a [`Transport`](super::transport::Transport) that never got a response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);
