//! MCP server for Bank of Mexico (Banxico) SIE economic data.
//!
//! Serves the Banxico tool set over streamable HTTP on a configured TCP
//! port (the default, probe-able by `banxico-healthcheck`) or over stdio.

mod server;

use anyhow::Result;
use banxico_tools::BanxicoTools;
use clap::Parser;
use sie_async::SieConfig;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "banxico-mcp")]
#[command(about = "MCP server for Bank of Mexico (Banxico) economic data", version)]
struct Args {
    /// Transport to serve on: http | stdio
    #[arg(long, default_value = "http", value_parser = ["http", "stdio"])]
    transport: String,

    /// TCP port for the HTTP transport
    #[arg(long, env = "MCP_PORT", default_value_t = 8000)]
    port: u16,

    /// List available tools and exit
    #[arg(long)]
    list_tools: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr: the stdio transport owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_tools {
        let names = server::tool_names();
        eprintln!("Available tools ({}):", names.len());
        for name in names {
            eprintln!("  - {name}");
        }
        return Ok(());
    }

    let config = SieConfig::new();
    if !config.has_token() {
        tracing::warn!(
            "BANXICO_API_TOKEN is not set; data tools will return a configuration error"
        );
    }
    let tools = Arc::new(BanxicoTools::with_config(config));

    match args.transport.as_str() {
        "stdio" => serve_stdio(tools).await,
        _ => serve_http(tools, args.port).await,
    }
}

async fn serve_stdio(tools: Arc<BanxicoTools>) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    tracing::info!("starting banxico-mcp on stdio");
    let service = server::BanxicoServer::new(tools).serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}

async fn serve_http(tools: Arc<BanxicoTools>, port: u16) -> Result<()> {
    use rmcp::transport::streamable_http_server::{
        StreamableHttpService, session::local::LocalSessionManager,
    };

    let service = StreamableHttpService::new(
        move || Ok(server::BanxicoServer::new(tools.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "starting banxico-mcp HTTP server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received, exiting");
}
