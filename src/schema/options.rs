use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::medley::MedleyEntry;

/// Configuration errors. Always fatal: surfaced before any objective is
/// produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("no custom medleys are configured")]
    EmptyMedleyList,
    #[error("medley #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("medley '{0}' is defined more than once")]
    DuplicateMedley(String),
    #[error("medley '{medley}' references unknown game '{game}'")]
    UnknownGame { medley: String, game: String },
    #[error("medley '{medley}' excludes objectives of '{game}', which is not one of its games")]
    NotAMember { medley: String, game: String },
}

/// User-supplied generation options.
///
/// Per-title toggles are opaque to the engine; generators read them by key.
/// A toggle absent from the map reads as enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub include_adult_only_or_unrated_games: bool,
    pub include_difficult_objectives: bool,
    pub include_time_consuming_objectives: bool,
    pub toggles: FxHashMap<String, bool>,
    pub custom_medleys: Vec<MedleyEntry>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            include_adult_only_or_unrated_games: false,
            include_difficult_objectives: true,
            include_time_consuming_objectives: true,
            toggles: FxHashMap::default(),
            custom_medleys: Vec::new(),
        }
    }
}

impl GameOptions {
    /// Load options from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<GameOptions, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse options from a RON string.
    pub fn parse_ron(input: &str) -> Result<GameOptions, ConfigError> {
        Ok(ron::from_str(input)?)
    }

    /// Read a per-title toggle. Missing keys are on.
    pub fn toggle(&self, key: &str) -> bool {
        self.toggles.get(key).copied().unwrap_or(true)
    }

    pub fn set_toggle(&mut self, key: &str, value: bool) {
        self.toggles.insert(key.to_string(), value);
    }

    pub fn with_medleys(mut self, medleys: Vec<MedleyEntry>) -> Self {
        self.custom_medleys = medleys;
        self
    }
}
