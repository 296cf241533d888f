//! POST request inspector.
//!
//! Accepts requests on any path, prints each POST request (metadata, headers,
//! body) to stdout, and answers with a fixed JSON acknowledgement.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request       ┌──────────┐    ┌───────────┐    ┌──────────────┐
//!     ────────────────────▶│   net    │───▶│   http    │───▶│   handler    │
//!                          │ listener │    │  server   │    │ (catch-all)  │
//!                          └──────────┘    └───────────┘    └──────┬───────┘
//!                                                                  │
//!     Client Response                                              ▼
//!     ◀──────────────────── fixed JSON / 405 / 500          ┌──────────────┐
//!                                                           │   console    │──▶ stdout
//!                                                           └──────────────┘
//! ```

use clap::Parser;

use post_inspector::cli::Cli;
use post_inspector::console::Console;
use post_inspector::lifecycle;
use post_inspector::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = cli.resolve();

    let observability = config
        .as_ref()
        .map(|c| c.observability.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&observability) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!("post-inspector v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = lifecycle::run(config, Console::stdout()).await {
        tracing::error!(error = %e, "Server stopped with a fatal error");
        std::process::exit(1);
    }
}
