//! Numeric song identifiers

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Identifier of a song in the chart catalog
///
/// Always written in canonical decimal form: no sign, no leading zeros.
/// The same text is used as the JSON key in the index, as the URL path
/// segment, and as the asset directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SongId(u64);

/// Rejected song id text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid song id {0:?}")]
pub struct InvalidSongId(pub String);

impl SongId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for SongId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for SongId {
    type Err = InvalidSongId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSongId(s.to_string());

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // "007" and "7" must not name the same song
        if s.len() > 1 && s.starts_with('0') {
            return Err(invalid());
        }

        s.parse::<u64>().map(Self).map_err(|_| invalid())
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SongId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SongId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
