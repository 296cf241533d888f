//! Request inspection.
//!
//! # Responsibilities
//! - Capture the metadata logged for each request (URL, method, peer, length)
//! - Buffer the request body under the configured limit
//!
//! # Design Decisions
//! - Declared `Content-Length` wins; otherwise the body's exact size hint; otherwise -1
//! - The body is consumed by value, so it is released on every exit path

use std::error::Error as StdError;
use std::net::SocketAddr;

use axum::body::{Body, Bytes, HttpBody};
use axum::extract::ConnectInfo;
use axum::http::{header::CONTENT_LENGTH, request::Parts, HeaderMap, Method};
use http_body_util::LengthLimitError;
use thiserror::Error;

/// Metadata printed at the top of a request block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    /// Path plus query string, as received.
    pub url: String,
    pub method: Method,
    /// Peer address supplied by the transport, when known.
    pub remote_addr: Option<SocketAddr>,
    /// Declared body length, -1 when unknown.
    pub content_length: i64,
}

impl RequestSummary {
    pub fn new(parts: &Parts, body: &Body) -> Self {
        let url = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| parts.uri.to_string());

        let remote_addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Self {
            url,
            method: parts.method.clone(),
            remote_addr,
            content_length: content_length(&parts.headers, body),
        }
    }

    pub fn remote_display(&self) -> String {
        self.remote_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

fn content_length(headers: &HeaderMap, body: &Body) -> i64 {
    let declared = headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok());

    declared
        .or_else(|| body.size_hint().exact().and_then(|n| i64::try_from(n).ok()))
        .unwrap_or(-1)
}

/// Failure to buffer a request body.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The connection failed or the framing was malformed mid-body.
    #[error("Error reading body: {0}")]
    Read(axum::Error),

    /// The body grew past `body.max_bytes`.
    #[error("Body exceeds the {limit} byte limit; content not logged")]
    TooLarge { limit: usize },
}

/// Read the whole body into memory, up to `limit` bytes.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, BodyError> {
    axum::body::to_bytes(body, limit).await.map_err(|e| {
        if exceeded_limit(&e) {
            BodyError::TooLarge { limit }
        } else {
            BodyError::Read(e)
        }
    })
}

fn exceeded_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}
