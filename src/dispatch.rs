//! Request dispatch and failure resolution.

use crate::request::Request;
use crate::response::Response;
use crate::router::RouteTable;
use crate::scope::ScopeTree;
use axum::http::Method;

/// Result of dispatching one request.
///
/// Not-found is a distinct outcome for the surrounding framework's own
/// not-found handling; it never enters the error path.
#[derive(Debug)]
pub enum DispatchOutcome {
    Handled(Response),
    NotFound,
}

impl DispatchOutcome {
    pub fn into_response(self) -> Option<Response> {
        match self {
            Self::Handled(response) => Some(response),
            Self::NotFound => None,
        }
    }
}

/// Executes route handlers and resolves their failures against the scope
/// tree.
///
/// Holds the tree and route table frozen after the build phase, so it is
/// read-only shared state: many in-flight dispatches can run against one
/// `Dispatcher` without locking.
pub struct Dispatcher {
    tree: ScopeTree,
    routes: RouteTable,
}

impl Dispatcher {
    pub fn new(tree: ScopeTree, routes: RouteTable) -> Self {
        Self { tree, routes }
    }

    pub fn tree(&self) -> &ScopeTree {
        &self.tree
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Dispatch one request.
    ///
    /// A failing route handler is resolved to the nearest error handler on
    /// its owning scope's ancestor chain, the owning scope included. A
    /// failure raised by that error handler is terminal: it is serialized
    /// directly and never re-resolved to an ancestor, so a failing request
    /// invokes at most two handlers. Every failure ends in a concrete
    /// response; nothing escapes to the caller.
    pub async fn dispatch(
        &self,
        method: Method,
        path: &str,
        request: Request,
    ) -> DispatchOutcome {
        let Some(route) = self.routes.lookup(&method, path) else {
            return DispatchOutcome::NotFound;
        };

        let failure = match route.handler.call(request.clone()).await {
            Ok(response) => return DispatchOutcome::Handled(response),
            Err(failure) => failure,
        };
        tracing::debug!(%method, path, error = %failure, "route handler failed");

        let response = match self.tree.resolve_error_handler(route.scope) {
            Some((scope, handler)) => {
                tracing::debug!(prefix = self.tree.prefix(scope), "error handler resolved");
                match handler.handle(failure, request).await {
                    Ok(response) => response,
                    Err(second) => {
                        tracing::error!(%method, path, error = %second, "error handler failed");
                        Response::from_failure(&second)
                    }
                }
            }
            None => Response::from_failure(&failure),
        };
        DispatchOutcome::Handled(response)
    }
}
