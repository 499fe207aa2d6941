//! # Media Catalog Server
//!
//! Serves the in-memory media catalog on `GET /gqlMedia?query=...`.
//! With no flags it listens on `0.0.0.0:8080` in permissive pattern mode.

use anyhow::Context;
use clap::Parser;
use media_catalog::{
    config::{ServerConfig, DEFAULT_LOG_FILTER},
    server::{self, AppState, QUERY_PATH},
    Catalog, PatternMode,
};
use std::{net::IpAddr, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "media-catalog")]
#[command(about = "In-memory media catalog behind a structured-query endpoint")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "MEDIA_HOST")]
    host: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long, env = "MEDIA_PORT")]
    port: Option<u16>,

    /// Compare credentials exactly and escape list filter text
    #[arg(long, env = "MEDIA_HARDENED_PATTERNS", default_value_t = false)]
    hardened: bool,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        let mut config = ServerConfig::default();
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.hardened {
            config.pattern_mode = PatternMode::Hardened;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Cli::parse().into_config();
    if config.pattern_mode.is_hardened() {
        info!("hardened pattern mode enabled");
    }

    let catalog = Arc::new(Catalog::seeded(config.pattern_mode));
    let app = server::router(AppState::new(catalog));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server is running on {addr}, endpoint {QUERY_PATH}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
