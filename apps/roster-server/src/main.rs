//! Main REST API server for the in-memory roster service.
//!
//! Wires configuration, the roster stores, and the REST API together with
//! command-line parsing and ctrl-c shutdown. Data lives only for the
//! lifetime of the process.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use roster_api::{router::Router, server::Server};
use roster_core::{config::RosterConfig, roster::Roster};
use tokio::signal;

/// Command-line arguments for the roster server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    request_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    // Create configuration
    let config = Arc::new(RosterConfig {
        request_timeout_ms: args.request_timeout_ms,
    });

    // Create the roster with one empty store per entity kind
    let roster = Arc::new(Roster::new());

    // Create router and server
    let router = Router::new(roster, config);
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let server = Server::new(addr, router);

    tracing::info!("Starting roster server...");
    tracing::info!("  Host: {}", args.host);
    tracing::info!("  Port: {}", args.port);
    tracing::info!("  Request timeout: {} ms", args.request_timeout_ms);

    // Start server with graceful shutdown
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.serve().await {
            tracing::error!("Server error: {}", e);
        }
    });

    // Wait for Ctrl+C
    signal::ctrl_c().await?;
    tracing::info!("Shutting down server...");
    server_handle.abort();

    Ok(())
}
