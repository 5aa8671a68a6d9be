//! previewd - chart preview image API daemon

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use previewd::{Config, Overrides, Server};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Chart preview image API server
#[derive(Parser, Debug)]
#[command(name = "previewd", version, about = "Serve chart preview listings and images")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Path to previews.json
    #[arg(short, long)]
    index: Option<PathBuf>,

    /// Directory containing {song id}/{filename} images
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "previewd=info,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if args.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let overrides = Overrides {
        bind_addr: args.bind,
        index_path: args.index,
        assets_dir: args.assets,
    };
    let config =
        Config::load(args.config.as_deref(), overrides).context("Failed to load configuration")?;

    let server = Arc::new(Server::new(config)?);

    let signal_server = server.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
            signal_server.shutdown();
        }
    });

    server.run().await?;

    Ok(())
}
