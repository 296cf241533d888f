//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events on stderr)
//!     → tower_http TraceLayer (per-request spans)
//! ```

pub mod logging;

pub use logging::init_logging;
