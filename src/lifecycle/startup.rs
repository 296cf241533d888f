//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener
//! - Announce the server on the console
//! - Hand the listener to the HTTP server
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - No shutdown coordination; the process ends when it is interrupted

use thiserror::Error;

use crate::config::InspectorConfig;
use crate::console::Console;
use crate::http::HttpServer;
use crate::net::{self, ListenerError};

/// Failure that ends the process.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind, announce, and serve until the listener fails.
pub async fn run(config: InspectorConfig, console: Console) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_bytes = ?config.body.max_bytes,
        "Configuration loaded"
    );

    let listener = net::bind(&config.listener).await?;
    console.banner(&config.listener.bind_address);

    HttpServer::new(config, console).run(listener).await?;
    Ok(())
}
