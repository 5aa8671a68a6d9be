//! Per-song preview record and the five fixed difficulties

use serde::{Deserialize, Serialize};

/// Chart difficulty level
///
/// Wire ids are `"1"` through `"5"`, in course order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Oni,
    Ura,
}

impl Difficulty {
    /// All difficulties in wire-id order
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Oni,
        Difficulty::Ura,
    ];

    /// Numeric id used as the JSON key
    pub fn id(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
            Difficulty::Oni => 4,
            Difficulty::Ura => 5,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.id() == id)
    }

    /// Course name in the chart source
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Oni => "oni",
            Difficulty::Ura => "ura",
        }
    }
}

/// Preview image URLs for one song, keyed by difficulty
///
/// Deserialization is strict: all five keys must be present and nothing
/// else is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SongPreviews {
    #[serde(rename = "1")]
    easy: Vec<String>,
    #[serde(rename = "2")]
    normal: Vec<String>,
    #[serde(rename = "3")]
    hard: Vec<String>,
    #[serde(rename = "4")]
    oni: Vec<String>,
    #[serde(rename = "5")]
    ura: Vec<String>,
}

impl SongPreviews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for one difficulty's URL list
    pub fn with(mut self, difficulty: Difficulty, urls: Vec<String>) -> Self {
        *self.slot_mut(difficulty) = urls;
        self
    }

    /// URLs for a difficulty, in display order
    pub fn get(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
            Difficulty::Oni => &self.oni,
            Difficulty::Ura => &self.ura,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &[String])> + '_ {
        Difficulty::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Total URLs across all difficulties
    pub fn total(&self) -> usize {
        self.iter().map(|(_, urls)| urls.len()).sum()
    }

    fn slot_mut(&mut self, difficulty: Difficulty) -> &mut Vec<String> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Normal => &mut self.normal,
            Difficulty::Hard => &mut self.hard,
            Difficulty::Oni => &mut self.oni,
            Difficulty::Ura => &mut self.ura,
        }
    }
}
