use std::{net::SocketAddr, sync::Arc};

use anyhow::{Result, anyhow};
use axum::{Router, serve};
use dotenv::dotenv;
use rmcp::{
    ServiceExt,
    transport::{
        StreamableHttpServerConfig, StreamableHttpService, stdio,
        streamable_http_server::session::local::LocalSessionManager,
    },
};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use leave_manager_mcp::mcp::{
    LeaveManagerMCPFactory,
    config::{LogFormat, SERVER_CONFIG, Transport},
    leave::LeaveService,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    // Fail fast on invalid configuration
    let config = SERVER_CONFIG
        .as_ref()
        .map_err(|e| anyhow!("Failed to load configuration: {e}"))?;

    init_tracing(config.log_format);

    // One ledger for the lifetime of the process, shared by every session
    let service = Arc::new(LeaveService::seeded(config.clock()));
    info!(transport = %config.transport, today = ?config.today, "Starting LeaveManager MCP server");

    match config.transport {
        Transport::Stdio => serve_stdio(service).await,
        Transport::Http => serve_http(service, config.bind_address).await,
    }
}

// Logs always go to stderr: with the stdio transport, stdout is the protocol channel.
fn init_tracing(log_format: LogFormat) {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "debug".to_string().into()),
    );

    match log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

async fn serve_stdio(service: Arc<LeaveService>) -> Result<()> {
    info!("Serving MCP over stdio");
    let running = LeaveManagerMCPFactory::new(service)
        .serve(stdio())
        .await?;
    let quit_reason = running.waiting().await?;
    info!(?quit_reason, "stdio session ended");
    Ok(())
}

async fn serve_http(service: Arc<LeaveService>, bind_address: SocketAddr) -> Result<()> {
    // Setting up the Streamable HTTP Service
    info!("Setting up the Streamable HTTP Service");
    let mcp_service = StreamableHttpService::new(
        move || Ok(LeaveManagerMCPFactory::new(Arc::clone(&service))),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    // Starting the server... Setting up the router and TCP listener
    info!("Starting server on {}", bind_address);
    let router = Router::new().nest_service("/mcp", mcp_service);
    let tcp_listener = TcpListener::bind(bind_address).await?;

    // Graceful shutdown on CTRL+C
    let shutdown = async {
        signal::ctrl_c().await.unwrap_or_else(|e| {
            eprintln!("failed to install CTRL+C handler: {e}");
        });
    };

    // Finally start the server with graceful shutdown
    serve(tcp_listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
