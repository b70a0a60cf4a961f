use axum::http::StatusCode;
use thiserror::Error;

/// The runtime error value a handler fails with.
///
/// Carries a human-readable message and an optional HTTP status code.
/// A status code outside the valid HTTP range (100–599) is treated as
/// absent and falls back to 500.
///
/// Anything a handler can produce converts into a `Failure`: plain strings,
/// boxed errors and `anyhow::Error` all coerce via their string form.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
    status_code: Option<u16>,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
        }
    }

    pub fn with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// The message, verbatim. Empty when the failing code supplied none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The effective HTTP status: the carried code when it is a valid HTTP
    /// status (100–599), otherwise 500.
    pub fn status(&self) -> StatusCode {
        self.status_code
            .filter(|code| (100..=599).contains(code))
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Failure {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::new(err.to_string())
    }
}
