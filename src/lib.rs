//! POST request inspector library.

pub mod cli;
pub mod config;
pub mod console;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::InspectorConfig;
pub use console::Console;
pub use http::HttpServer;
