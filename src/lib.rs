//! previewd - chart preview image API daemon
//!
//! Serves a pre-built preview index (`previews.json`) and the preview
//! images it points at. Everything is read-only: the index is loaded once
//! at startup and shared by all requests.

pub mod api;
pub mod assets;
pub mod config;
pub mod index;
pub mod lookup;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

use api::AppState;
use assets::AssetResolver;
pub use config::{Config, Overrides};
use index::PreviewIndex;
use lookup::LookupService;

/// The previewd server instance
pub struct Server {
    config: Config,
    state: AppState,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Server {
    /// Create a new server instance
    ///
    /// Fails if the preview index cannot be loaded; the server never
    /// starts with a broken index.
    pub fn new(config: Config) -> Result<Self> {
        let index = PreviewIndex::load(&config.index_path)?;
        info!(
            "Loaded preview index {} ({} songs, {} previews)",
            config.index_path.display(),
            index.len(),
            index.total_previews()
        );

        if !config.assets_dir.is_dir() {
            warn!(
                "Asset directory {} does not exist; image requests will return 404",
                config.assets_dir.display()
            );
        }

        let state = AppState {
            lookup: LookupService::new(Arc::new(index)),
            assets: Arc::new(AssetResolver::new(config.assets_dir.clone())),
        };
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            config,
            state,
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Get the lookup service
    pub fn lookup(&self) -> &LookupService {
        &self.state.lookup
    }

    /// Build the router
    fn router(&self) -> Router {
        api::router(self.state.clone())
    }

    /// Run the server until shutdown
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("previewd listening on {}", local_addr);

        let router = self.router();
        let mut shutdown_rx = self.shutdown_rx.clone();

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_rx.changed().await.ok();
            })
            .await?;

        info!("previewd shutdown complete");
        Ok(())
    }

    /// Signal the server to shutdown
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Get the configured bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }
}
