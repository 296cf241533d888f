//! Fixed responses returned to clients.
//!
//! # Design Decisions
//! - The acknowledgement is a byte-exact literal, not a serialized value
//! - Error responses carry a short plain-text message; details stay in the logs

use axum::http::{
    header::{ALLOW, CONTENT_TYPE},
    StatusCode,
};
use axum::response::{IntoResponse, Response};

use crate::http::request::BodyError;

/// Body of every successful response.
pub const ACKNOWLEDGEMENT: &str =
    r#"{"status": "received", "message": "Request logged successfully"}"#;

pub fn acknowledged() -> Response {
    ([(CONTENT_TYPE, "application/json")], ACKNOWLEDGEMENT).into_response()
}

pub fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(ALLOW, "POST")],
        "Method not allowed",
    )
        .into_response()
}

impl IntoResponse for BodyError {
    fn into_response(self) -> Response {
        match self {
            BodyError::Read(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error reading body").into_response()
            }
            BodyError::TooLarge { .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response()
            }
        }
    }
}
