//! Static asset resolver - preview images on disk
//!
//! Images live at `<root>/<song id>/<filename>`. Both path segments come
//! straight from the request URL, so each one must be a single plain file
//! name before it is joined onto the root:
//! - no `..`, `.`, or empty segments
//! - no separators (`/`, `\`) or NUL bytes
//! - song id in canonical decimal form
//! - filename extension in [`ALLOWED_EXTENSIONS`]
//!
//! The resolved file must also canonicalize to a location under the root,
//! which keeps symlinks from pointing requests elsewhere.

use std::io;
use std::path::{Component, Path, PathBuf};

use mime_guess::Mime;
use thiserror::Error;
use tokio::fs::File;
use tracing::{debug, warn};

use crate::index::SongId;

/// Image extensions served, lowercase
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Asset resolution errors
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset {0} not found")]
    NotFound(String),

    #[error("invalid asset path {0:?}")]
    InvalidPath(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An opened asset ready to stream
#[derive(Debug)]
pub struct Asset {
    pub file: File,
    pub content_type: Mime,
    pub len: u64,
}

/// Maps `(song id, filename)` pairs onto files under a root directory
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate both segments and build the on-disk path
    ///
    /// Does not touch the filesystem.
    pub fn asset_path(&self, song_id: &str, filename: &str) -> Result<PathBuf, AssetError> {
        let invalid = || AssetError::InvalidPath(format!("{song_id}/{filename}"));

        if !is_plain_segment(song_id) || !is_plain_segment(filename) {
            return Err(invalid());
        }
        let song_id: SongId = song_id.parse().map_err(|_| invalid())?;
        if !has_allowed_extension(filename) {
            return Err(invalid());
        }

        Ok(self.root.join(song_id.to_string()).join(filename))
    }

    /// Resolve and open an asset for streaming
    pub async fn resolve(&self, song_id: &str, filename: &str) -> Result<Asset, AssetError> {
        let path = match self.asset_path(song_id, filename) {
            Ok(path) => path,
            Err(e) => {
                warn!("Rejected asset request {}/{}", song_id, filename);
                return Err(e);
            }
        };
        let not_found = || AssetError::NotFound(format!("{song_id}/{filename}"));

        let canonical = match tokio::fs::canonicalize(&path).await {
            Ok(p) => p,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(source) => return Err(AssetError::Io { path, source }),
        };
        let root = tokio::fs::canonicalize(&self.root)
            .await
            .map_err(|source| AssetError::Io {
                path: self.root.clone(),
                source,
            })?;
        if !canonical.starts_with(&root) {
            warn!(
                "Asset {} resolves outside {}",
                path.display(),
                root.display()
            );
            return Err(AssetError::InvalidPath(format!("{song_id}/{filename}")));
        }

        let file = File::open(&canonical)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => not_found(),
                _ => AssetError::Io {
                    path: canonical.clone(),
                    source,
                },
            })?;
        let metadata = file.metadata().await.map_err(|source| AssetError::Io {
            path: canonical.clone(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(not_found());
        }

        let content_type = mime_guess::from_path(&canonical).first_or_octet_stream();
        debug!(
            "Serving {} ({}, {} bytes)",
            canonical.display(),
            content_type,
            metadata.len()
        );

        Ok(Asset {
            file,
            content_type,
            len: metadata.len(),
        })
    }
}

/// A single, normal path component with no separators
fn is_plain_segment(segment: &str) -> bool {
    if segment.is_empty() || segment.contains(['/', '\\', '\0']) {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn has_allowed_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}
