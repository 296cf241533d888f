//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! configured host:port
//!     → listener.rs (resolve, bind)
//!     → Hand off to HTTP layer (one task per connection)
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
