//! Preview index - the song → difficulty → preview URLs document
//!
//! The index is produced by an external pipeline as `previews.json` and
//! loaded once at startup. After loading it is never mutated.

mod previews;
mod song_id;

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use previews::{Difficulty, SongPreviews};
pub use song_id::{InvalidSongId, SongId};

/// Index load errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read preview index {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed preview index {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// All songs and their previews, ordered by song id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewIndex {
    songs: BTreeMap<SongId, SongPreviews>,
}

impl PreviewIndex {
    /// Load and validate the index from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("Loading preview index from {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&text).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse an index from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn get(&self, id: SongId) -> Option<&SongPreviews> {
        self.songs.get(&id)
    }

    pub fn contains(&self, id: SongId) -> bool {
        self.songs.contains_key(&id)
    }

    /// Iterate songs in ascending id order
    pub fn songs(&self) -> impl Iterator<Item = (SongId, &SongPreviews)> + '_ {
        self.songs.iter().map(|(id, previews)| (*id, previews))
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Number of preview URLs across every song and difficulty
    pub fn total_previews(&self) -> usize {
        self.songs.values().map(SongPreviews::total).sum()
    }
}

impl FromIterator<(SongId, SongPreviews)> for PreviewIndex {
    fn from_iter<I: IntoIterator<Item = (SongId, SongPreviews)>>(iter: I) -> Self {
        Self {
            songs: iter.into_iter().collect(),
        }
    }
}
