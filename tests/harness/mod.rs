//! Integration Test Harness
//!
//! - `Fixture` - Temp directory holding a `previews.json` and chart images
//! - `TestServer` - Runs a real server on a random port over a fixture
//!
//! # Example
//!
//! ```rust,ignore
//! use harness::{Fixture, TestServer};
//!
//! #[tokio::test]
//! async fn test_list() {
//!     let server = TestServer::start(Fixture::sample()).await.unwrap();
//!     let resp = server.get("/api/previews").await.unwrap();
//!     assert_eq!(resp.status(), 200);
//! }
//! ```

mod fixture;
mod server;

pub use fixture::{Fixture, IMAGE_BYTES};
pub use server::{free_addr, wait_ready, TestServer};
