//! Lookup service - bulk and per-song queries over the preview index

use std::sync::Arc;

use thiserror::Error;

use crate::index::{PreviewIndex, SongId, SongPreviews};

/// Lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("song {0} not found")]
    NotFound(String),
}

/// Read-only query front for a shared [`PreviewIndex`]
#[derive(Debug, Clone)]
pub struct LookupService {
    index: Arc<PreviewIndex>,
}

impl LookupService {
    pub fn new(index: Arc<PreviewIndex>) -> Self {
        Self { index }
    }

    /// The full index, unfiltered
    pub fn get_all(&self) -> &PreviewIndex {
        &self.index
    }

    /// Previews for one song
    ///
    /// `song_id` is the raw path segment. Text that is not a canonical
    /// song id cannot name any song, so it is reported as not found.
    pub fn get_one(&self, song_id: &str) -> Result<&SongPreviews, LookupError> {
        song_id
            .parse::<SongId>()
            .ok()
            .and_then(|id| self.index.get(id))
            .ok_or_else(|| LookupError::NotFound(song_id.to_string()))
    }

    pub fn song_count(&self) -> usize {
        self.index.len()
    }
}
