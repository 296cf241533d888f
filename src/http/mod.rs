//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, connect info, trace layer)
//!     → handler.rs (method check, logging, acknowledgement)
//!     → request.rs (metadata capture, body buffering)
//!     → response.rs (fixed responses)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use request::{BodyError, RequestSummary};
pub use response::ACKNOWLEDGEMENT;
pub use server::{AppState, HttpServer};
