use crate::failure::Failure;
use crate::request::Request;
use crate::response::Response;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Outcome of a single handler invocation
pub type HandlerResult = Result<Response, Failure>;

type BoxFuture = Pin<Box<dyn Future<Output = HandlerResult> + Send>>;

/// A route handler: a capability accepting a request and producing a
/// response, or failing with a [`Failure`].
///
/// Handlers may suspend; the dispatcher awaits completion before deciding
/// whether error resolution is needed.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    async fn call(&self, request: Request) -> HandlerResult;
}

/// An error handler bound to a scope.
///
/// Invoked with the failure raised by a route handler in the scope's
/// subtree. It may recover by returning a response, or fail in turn — in
/// which case its own failure is serialized directly, with no further
/// resolution.
#[async_trait]
pub trait ErrorHandler: Send + Sync + 'static {
    async fn handle(&self, failure: Failure, request: Request) -> HandlerResult;
}

struct FnHandler {
    run: Box<dyn Fn(Request) -> BoxFuture + Send + Sync>,
}

#[async_trait]
impl Handler for FnHandler {
    async fn call(&self, request: Request) -> HandlerResult {
        (self.run)(request).await
    }
}

/// Wrap an async closure as a [`Handler`]
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn Handler>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(FnHandler {
        run: Box::new(move |request| Box::pin(f(request))),
    })
}

struct FnErrorHandler {
    run: Box<dyn Fn(Failure, Request) -> BoxFuture + Send + Sync>,
}

#[async_trait]
impl ErrorHandler for FnErrorHandler {
    async fn handle(&self, failure: Failure, request: Request) -> HandlerResult {
        (self.run)(failure, request).await
    }
}

/// Wrap an async closure as an [`ErrorHandler`]
pub fn error_handler_fn<F, Fut>(f: F) -> Arc<dyn ErrorHandler>
where
    F: Fn(Failure, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(FnErrorHandler {
        run: Box::new(move |failure, request| Box::pin(f(failure, request))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;
    use serde_json::json;

    #[tokio::test]
    async fn closure_handlers_round_trip() {
        let handler = handler_fn(|request| async move {
            Ok(Response::ok(json!({ "path": request.path() })))
        });
        let response = handler
            .call(Request::new(Method::GET, "/x"))
            .await
            .unwrap();
        assert_eq!(response.body()["path"], "/x");
    }

    #[tokio::test]
    async fn closure_error_handlers_see_the_failure() {
        let handler = error_handler_fn(|failure, _request| async move {
            Err(Failure::new(format!("rethrown: {}", failure.message())))
        });
        let err = handler
            .handle(Failure::new("first"), Request::new(Method::GET, "/x"))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "rethrown: first");
    }
}
