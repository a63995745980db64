//! Minimal API Gateway
//!
//! Services register a base URL under a logical name via `POST /registry`;
//! callers reach them through `{service}/{endpoint}` paths and the gateway
//! resolves the target and forwards the request.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                  API GATEWAY                   │
//!                      │                                                │
//!   POST /registry ────┼─▶ registration handler ──▶ ┌───────────────┐  │
//!                      │                            │   registry    │  │
//!   {service}/{endpoint}                            │ name → baseUrl│  │
//!   ───────────────────┼─▶ proxy handler ─────────▶ └──────┬────────┘  │
//!                      │         │                         │           │
//!                      │         ▼                         ▼           │
//!                      │   ┌──────────┐   resolved    ┌─────────┐      │
//!   Client Response    │   │  proxy   │    target     │ target  │      │
//!   ◀──────────────────┼───│forwarder │◀──────────────│ parsing │      │
//!                      │   └────┬─────┘               └─────────┘      │
//!                      │        │ outbound HTTP call                   │
//!                      └────────┼───────────────────────────────────────┘
//!                               ▼
//!                           Backend Server
//! ```

use tokio::net::TcpListener;

use api_gateway::config::loader::load_config;
use api_gateway::config::GatewayConfig;
use api_gateway::http::HttpServer;
use api_gateway::lifecycle::Shutdown;
use api_gateway::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init_tracing();

    tracing::info!("api-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration; defaults apply when no path is given.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(std::path::Path::new(&path))?,
        None => GatewayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        seeded_services = config.services.len(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
