use axum::http::Method;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors raised while the scope tree and route table are being assembled.
///
/// These are configuration mistakes: they abort the build phase, and a
/// process that hits one must refuse to start serving. They are never
/// converted into per-request responses.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Route already registered: {method} {path}")]
    DuplicateRoute { method: Method, path: String },

    #[error("Malformed prefix {fragment:?}: {reason}")]
    MalformedPrefix { fragment: String, reason: String },
}

impl BuildError {
    /// Create a duplicate-route error
    pub fn duplicate_route(method: Method, path: impl Into<String>) -> Self {
        Self::DuplicateRoute {
            method,
            path: path.into(),
        }
    }

    /// Create a malformed-prefix error
    pub fn malformed_prefix(fragment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPrefix {
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }
}
