//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config → Bind listener → Print banner → Serve
//! ```
//!
//! The process runs until it is interrupted; a bind failure is fatal.

pub mod startup;

pub use startup::{run, StartupError};
