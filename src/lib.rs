//! # Trellis
//!
//! Scoped error handling and request dispatch core for Rust web services.
//!
//! Trellis models the registration boundaries of a web application as an
//! encapsulation tree: every plugin-style scope carries its own path prefix
//! and may bind its own error handler, inherited by descendants but
//! invisible to ancestors and siblings. When a route handler fails, the
//! dispatcher resolves the failure to the nearest error handler on the
//! owning scope's ancestor chain and always produces a concrete JSON
//! response.
//!
//! ## Features
//!
//! - **Encapsulation Tree**: arena-owned scopes with composed path prefixes
//! - **Nearest-handler Resolution**: the closest bound error handler wins,
//!   self included
//! - **Bounded Re-entrancy**: a failing error handler is terminal — its
//!   failure is serialized directly, never escalated, so a failing request
//!   runs at most two handlers
//! - **Opaque Handlers**: async capability traits with closure adaptors
//! - **Lock-free Dispatch**: tree and routes are frozen at build time and
//!   shared read-only across in-flight requests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trellis::{App, Failure, Request, Response, error_handler_fn, handler_fn};
//! use axum::http::{Method, StatusCode};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), trellis::BuildError> {
//!     let mut builder = App::builder();
//!     let root = builder.root();
//!
//!     // A scope behaves like a plugin: its own prefix, its own handler.
//!     let api = builder.scope(root, "/api")?;
//!     builder.set_error_handler(
//!         api,
//!         error_handler_fn(|failure: Failure, _req| async move {
//!             Ok(Response::new(
//!                 StatusCode::BAD_GATEWAY,
//!                 json!({ "message": failure.message() }),
//!             ))
//!         }),
//!     );
//!     builder.route(
//!         api,
//!         Method::GET,
//!         "/health",
//!         handler_fn(|_req| async { Ok(Response::ok(json!({ "status": "up" }))) }),
//!     )?;
//!
//!     let app = builder.build();
//!     let request = Request::new(Method::GET, "/api/health");
//!     let outcome = app.dispatch(Method::GET, "/api/health", request).await;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod dispatch;
pub mod error;
pub mod failure;
pub mod handler;
pub mod path;
pub mod request;
pub mod response;
pub mod router;
pub mod scope;

// Re-export core types
pub use app::{App, AppBuilder};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use error::{BuildError, Result};
pub use failure::Failure;
pub use handler::{ErrorHandler, Handler, HandlerResult, error_handler_fn, handler_fn};
pub use request::Request;
pub use response::Response;
pub use router::{Route, RouteTable};
pub use scope::{ScopeId, ScopeTree};

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::{App, AppBuilder};
    pub use crate::dispatch::{DispatchOutcome, Dispatcher};
    pub use crate::error::{BuildError, Result};
    pub use crate::failure::Failure;
    pub use crate::handler::{ErrorHandler, Handler, HandlerResult, error_handler_fn, handler_fn};
    pub use crate::path::compose;
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use crate::router::{Route, RouteTable};
    pub use crate::scope::{ScopeId, ScopeTree};
    pub use async_trait::async_trait;
    pub use axum::http::{Method, StatusCode};
    pub use std::sync::Arc;
}
