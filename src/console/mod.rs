//! Console output subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → report.rs (assemble one request block privately)
//!     → sink.rs (single locked write to the shared stream)
//!     → stdout (production) / MemorySink (tests)
//! ```
//!
//! # Design Decisions
//! - The console is a handle passed into the handler, never a global
//! - A request block is written under one lock so concurrent blocks never interleave
//! - Diagnostics go through `tracing`; the console carries only the transcript

pub mod report;
pub mod sink;

pub use report::{canonical_header_name, RequestReport};
pub use sink::{Console, MemorySink};
