//! On-disk preview index and image tree for tests

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Bytes written for every fixture image
pub const IMAGE_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0fixture-image";

/// Temp directory with `previews.json` and `charts/{id}/{file}`
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Create a fixture from an index document and a list of image files
    pub fn new(index: &Value, images: &[(&str, &str)]) -> Result<Self> {
        Self::with_index_text(&serde_json::to_string_pretty(index)?, images)
    }

    /// Create a fixture from raw index text (may be malformed)
    pub fn with_index_text(index: &str, images: &[(&str, &str)]) -> Result<Self> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("previews.json"), index)?;

        let charts = dir.path().join("charts");
        std::fs::create_dir(&charts)?;
        for (song, file) in images {
            let song_dir = charts.join(song);
            std::fs::create_dir_all(&song_dir)?;
            std::fs::write(song_dir.join(file), IMAGE_BYTES)?;
        }

        Ok(Self { dir })
    }

    /// Two songs: "1" with an empty Ura list, and "2" with Ura only
    pub fn sample() -> Self {
        let index = json!({
            "1": {
                "1": ["https://cdn.example/charts/1/1.jpg"],
                "2": ["https://cdn.example/charts/1/2.jpg"],
                "3": ["https://cdn.example/charts/1/3.jpg"],
                "4": ["https://cdn.example/charts/1/4.jpg", "https://cdn.example/charts/1/4_2.jpg"],
                "5": []
            },
            "2": {
                "1": [],
                "2": [],
                "3": [],
                "4": [],
                "5": ["https://cdn.example/charts/2/5.png"]
            }
        });
        let images = [
            ("1", "1.jpg"),
            ("1", "2.jpg"),
            ("1", "3.jpg"),
            ("1", "4.jpg"),
            ("1", "4_2.jpg"),
            ("2", "5.png"),
        ];
        Self::new(&index, &images).expect("Failed to create sample fixture")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn index_path(&self) -> PathBuf {
        self.dir.path().join("previews.json")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.dir.path().join("charts")
    }
}
