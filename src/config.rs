//! Game configuration files.
//!
//! Loads a game description from JSON so a board can be kept on disk and
//! reused across sessions and self-play runs.
//!
//! ```json
//! { "players": "AB", "track_length": 30, "charge_squares": [6], "cliff_squares": [10] }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::{GameError, GameSystem};
use crate::protocol::setup::{GameSetup, SetupError};

/// Errors raised while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// A game description as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// One character per player, in turn order.
    pub players: String,
    pub track_length: u32,
    #[serde(default)]
    pub charge_squares: Vec<u32>,
    #[serde(default)]
    pub cliff_squares: Vec<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            players: "RGBY".to_string(),
            track_length: 90,
            charge_squares: vec![13, 42, 70],
            cliff_squares: vec![23, 50, 85],
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn to_setup(&self) -> GameSetup {
        GameSetup {
            track_length: self.track_length,
            roster: self.players.clone(),
            charge_squares: self.charge_squares.iter().copied().collect::<BTreeSet<_>>(),
            cliff_squares: self.cliff_squares.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    /// Starts a game described by this config.
    pub fn build(&self) -> Result<GameSystem, ConfigError> {
        Ok(self.to_setup().build()?)
    }
}

impl From<&GameSetup> for GameConfig {
    fn from(setup: &GameSetup) -> Self {
        GameConfig {
            players: setup.roster.clone(),
            track_length: setup.track_length,
            charge_squares: setup.charge_squares.iter().copied().collect(),
            cliff_squares: setup.cliff_squares.iter().copied().collect(),
        }
    }
}
