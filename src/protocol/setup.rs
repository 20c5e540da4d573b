//! Setup notation encoding and decoding.
//!
//! A setup string describes a fresh game on one line, so it can be passed on
//! the command line, sent over the console protocol, or stored next to a
//! self-play record.
//!
//! Format: `<track_length>/<roster>/<charge_squares>/<cliff_squares>`
//!
//! Squares are comma-separated; `-` marks an empty list. Example:
//! `30/AB/6/10,20` is a 30-square track for players A and B, with a charge
//! square at 6 and cliffs at 10 and 20.

use std::collections::BTreeSet;

use crate::game::{GameError, GameSystem};

/// Errors that can occur during setup parsing.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("expected 4 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("invalid track length: '{0}'")]
    InvalidLength(String),

    #[error("roster section is empty")]
    EmptyRoster,

    #[error("invalid square: '{0}'")]
    InvalidSquare(String),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// The parameters needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    pub track_length: u32,
    pub roster: String,
    pub charge_squares: BTreeSet<u32>,
    pub cliff_squares: BTreeSet<u32>,
}

impl GameSetup {
    /// Starts a game from this setup.
    pub fn build(&self) -> Result<GameSystem, GameError> {
        GameSystem::new(
            &self.roster,
            self.track_length,
            self.charge_squares.iter().copied(),
            self.cliff_squares.iter().copied(),
        )
    }
}

/// Parses a square list section (comma-separated numbers or "-").
fn parse_squares(s: &str) -> Result<BTreeSet<u32>, SetupError> {
    if s == "-" {
        return Ok(BTreeSet::new());
    }
    s.split(',')
        .map(|entry| {
            entry
                .parse::<u32>()
                .map_err(|_| SetupError::InvalidSquare(entry.to_string()))
        })
        .collect()
}

/// Parses a setup string.
///
/// Only the notation itself is checked here; rule preconditions such as the
/// track length bounds are enforced when the setup is built.
pub fn parse_setup(s: &str) -> Result<GameSetup, SetupError> {
    let sections: Vec<&str> = s.trim().split('/').collect();
    if sections.len() != 4 {
        return Err(SetupError::WrongSectionCount(sections.len()));
    }

    let track_length: u32 = sections[0]
        .parse()
        .map_err(|_| SetupError::InvalidLength(sections[0].to_string()))?;

    let roster = sections[1];
    if roster.is_empty() {
        return Err(SetupError::EmptyRoster);
    }

    Ok(GameSetup {
        track_length,
        roster: roster.to_string(),
        charge_squares: parse_squares(sections[2])?,
        cliff_squares: parse_squares(sections[3])?,
    })
}

/// Parses a setup string and starts the game it describes.
pub fn parse_game(s: &str) -> Result<GameSystem, SetupError> {
    Ok(parse_setup(s)?.build()?)
}

fn encode_squares(squares: &BTreeSet<u32>) -> String {
    if squares.is_empty() {
        return "-".to_string();
    }
    squares
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Encodes a setup into its canonical string; squares come out ascending.
pub fn encode_setup(setup: &GameSetup) -> String {
    format!(
        "{}/{}/{}/{}",
        setup.track_length,
        setup.roster,
        encode_squares(&setup.charge_squares),
        encode_squares(&setup.cliff_squares)
    )
}
