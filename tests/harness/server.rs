//! TestServer - end-to-end test harness
//!
//! Runs a real `Server` on a random port in a background task, reading a
//! `Fixture` directory. Dropping the harness shuts the server down.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use previewd::{Config, Server};
use reqwest::Client;
use tokio::task::JoinHandle;

use super::Fixture;

/// Test harness that runs previewd on a random port
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    server: Arc<Server>,
    _handle: JoinHandle<()>,
    /// Index and images, removed on drop
    _fixture: Fixture,
}

impl TestServer {
    /// Start a new test server instance over a fixture
    pub async fn start(fixture: Fixture) -> Result<Self> {
        let addr = free_addr()?;

        let config = Config {
            bind_addr: addr,
            index_path: fixture.index_path(),
            assets_dir: fixture.assets_dir(),
        };

        let server = Arc::new(Server::new(config)?);
        let server_clone = server.clone();

        // Spawn the server in a background task
        let handle = tokio::spawn(async move {
            if let Err(e) = server_clone.run().await {
                eprintln!("Server error: {}", e);
            }
        });

        let client = Client::builder().timeout(Duration::from_secs(5)).build()?;
        wait_ready(&client, addr).await?;

        Ok(Self {
            addr,
            client,
            server,
            _handle: handle,
            _fixture: fixture,
        })
    }

    /// Get the base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await?)
    }

    /// GET and parse the body as JSON
    pub async fn get_json(&self, path: &str) -> Result<(u16, serde_json::Value)> {
        let resp = self.get(path).await?;
        let status = resp.status().as_u16();
        Ok((status, resp.json().await?))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.shutdown();
    }
}

/// Find a random available port
pub fn free_addr() -> Result<SocketAddr> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(addr)
}

/// Poll `/health` until the server answers (max 5 seconds)
pub async fn wait_ready(client: &Client, addr: SocketAddr) -> Result<()> {
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        if client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .is_ok()
        {
            return Ok(());
        }
    }
    anyhow::bail!("Server at {} failed to start within 5 seconds", addr)
}
