//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the single catch-all handler
//! - Wire up middleware (tracing)
//! - Serve connections from a bound listener, recording peer addresses

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::InspectorConfig;
use crate::console::Console;
use crate::http::handler::log_request;

/// Application state injected into the handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub console: Console,
    pub body_limit: usize,
}

/// HTTP server for the inspector.
pub struct HttpServer {
    router: Router,
    config: InspectorConfig,
}

impl HttpServer {
    /// Create a new HTTP server writing request blocks to `console`.
    pub fn new(config: InspectorConfig, console: Console) -> Self {
        let state = AppState {
            console,
            body_limit: config.body.read_limit(),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Every path and method goes to one fallback handler; there is no route table.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(log_request)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Each connection is served on its own task. Returns only if the
    /// listener itself fails.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();
        axum::serve(listener, app).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The configured router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }
}
