use crate::failure::Failure;
use axum::{
    Json,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;

/// The value a dispatch produces: an HTTP status plus a structured JSON body.
///
/// This core only produces the value; writing it to a socket is the
/// transport layer's job. The [`IntoResponse`] impl is the bridge.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    body: Value,
}

/// Wire shape of a default-built error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status_code: u16,
    error: &'a str,
    message: &'a str,
}

impl Response {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// A 200 response with the given body
    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// Serialize a failure nobody recovered. This is the terminal step of
    /// every error path and never fails: invalid status codes fall back to
    /// 500 and a missing message becomes the empty string. The message is
    /// passed through verbatim, including when it came from an error
    /// handler's own failure.
    pub fn from_failure(failure: &Failure) -> Self {
        let status = failure.status();
        let body = serde_json::to_value(ErrorBody {
            status_code: status.as_u16(),
            error: reason_phrase(status),
            message: failure.message(),
        })
        .expect("error body serialization is infallible");
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}
