//! Application assembly.
//!
//! An explicit build context over the scope tree and route table: the
//! builder carries both through the registration phase, and `build`
//! freezes them into an immutable, shareable [`Dispatcher`]. There is no
//! process-wide instance; everything is threaded through this value.

use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::error::Result;
use crate::handler::{ErrorHandler, Handler};
use crate::request::Request;
use crate::router::RouteTable;
use crate::scope::{ScopeId, ScopeTree};
use axum::http::Method;
use std::sync::Arc;

/// A built application: the frozen dispatcher plus nothing else.
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = App::builder();
/// let root = builder.root();
/// let api = builder.scope(root, "/api")?;
/// builder.set_error_handler(api, error_handler_fn(|failure, _req| async move {
///     Ok(Response::new(StatusCode::BAD_GATEWAY, json!({ "message": failure.message() })))
/// }));
/// builder.route(api, Method::GET, "/health", handler_fn(|_req| async {
///     Ok(Response::ok(json!({ "status": "up" })))
/// }))?;
/// let app = builder.build();
/// ```
pub struct App {
    dispatcher: Arc<Dispatcher>,
}

impl App {
    /// Create a new application builder
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    /// The shared dispatcher, for handing to the transport layer
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Dispatch one request against the built tree and routes
    pub async fn dispatch(
        &self,
        method: Method,
        path: &str,
        request: Request,
    ) -> DispatchOutcome {
        self.dispatcher.dispatch(method, path, request).await
    }
}

/// Builder for [`App`]
///
/// All registration happens here, before any dispatch: scope creation,
/// error-handler binding and route registration. A configuration error
/// aborts the build — it is never deferred to request time.
pub struct AppBuilder {
    tree: ScopeTree,
    routes: RouteTable,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            tree: ScopeTree::new(),
            routes: RouteTable::new(),
        }
    }

    /// The root scope
    pub fn root(&self) -> ScopeId {
        self.tree.root()
    }

    /// Register a child scope under `parent` with the given prefix fragment
    pub fn scope(&mut self, parent: ScopeId, fragment: &str) -> Result<ScopeId> {
        self.tree.child_of(parent, fragment)
    }

    /// Bind (or rebind) the error handler for `scope`
    pub fn set_error_handler(
        &mut self,
        scope: ScopeId,
        handler: Arc<dyn ErrorHandler>,
    ) -> &mut Self {
        self.tree.set_error_handler(scope, handler);
        self
    }

    /// Register a route under `scope`
    pub fn route(
        &mut self,
        scope: ScopeId,
        method: Method,
        fragment: &str,
        handler: Arc<dyn Handler>,
    ) -> Result<()> {
        self.routes.register(&self.tree, scope, method, fragment, handler)
    }

    /// Freeze the tree and routes into an immutable application
    pub fn build(self) -> App {
        tracing::debug!(
            scopes = self.tree.len(),
            routes = self.routes.len(),
            "application built"
        );
        App {
            dispatcher: Arc::new(Dispatcher::new(self.tree, self.routes)),
        }
    }
}
