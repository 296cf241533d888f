//! The request logger.
//!
//! Every path and every method lands here; non-POST requests are turned away
//! before anything is logged.

use axum::{
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
};

use crate::console::RequestReport;
use crate::http::request::{read_body, BodyError, RequestSummary};
use crate::http::response;
use crate::http::server::AppState;

/// Log a POST request to the console and acknowledge it.
pub async fn log_request(State(state): State<AppState>, request: Request) -> Response {
    if request.method() != Method::POST {
        tracing::debug!(
            method = %request.method(),
            uri = %request.uri(),
            "Rejected non-POST request"
        );
        return response::method_not_allowed();
    }

    let (parts, body) = request.into_parts();
    let summary = RequestSummary::new(&parts, &body);

    let mut report = RequestReport::begin(state.console.clone(), &summary);
    report.headers(&parts.headers);

    let bytes = match read_body(body, state.body_limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            match &e {
                BodyError::Read(_) => tracing::error!(
                    url = %summary.url,
                    remote_addr = %summary.remote_display(),
                    error = %e,
                    "Failed to read request body"
                ),
                BodyError::TooLarge { limit } => tracing::warn!(
                    url = %summary.url,
                    remote_addr = %summary.remote_display(),
                    limit = *limit,
                    "Request body over limit"
                ),
            }
            report.fail(&e);
            return e.into_response();
        }
    };

    report.body(&bytes);
    report.finish();

    tracing::debug!(url = %summary.url, bytes = bytes.len(), "Request logged");
    response::acknowledged()
}
