//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use post_inspector::config::InspectorConfig;
use post_inspector::console::{Console, MemorySink};
use post_inspector::http::HttpServer;
use post_inspector::net;

/// A server running on an ephemeral port with an in-memory console.
pub struct RunningInspector {
    pub addr: SocketAddr,
    pub console: MemorySink,
}

impl RunningInspector {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the inspector with `config`, overriding the bind address.
pub async fn start_inspector(mut config: InspectorConfig) -> RunningInspector {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let listener = net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (console, sink) = Console::memory();
    let server = HttpServer::new(config, console);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    RunningInspector {
        addr,
        console: sink,
    }
}

/// Client that never routes through an environment proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Poll the console until it contains `needle` or `timeout` elapses.
pub async fn wait_for(sink: &MemorySink, needle: &str, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if sink.contents().contains(needle) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    sink.contents().contains(needle)
}
