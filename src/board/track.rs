//! Track layout and special squares.
//!
//! The track is a straight run of squares numbered from 1 to its length.
//! Bird squares are implied by the length (every multiple of 9 strictly
//! inside the track); charge and cliff squares are listed explicitly.

use std::collections::BTreeSet;

use serde::Serialize;

/// Shortest playable track.
pub const MIN_TRACK_LENGTH: u32 = 10;

/// Longest playable track.
pub const MAX_TRACK_LENGTH: u32 = 150;

/// Distance between bird squares, and the size of a bird's jump.
pub const BIRD_INTERVAL: u32 = 9;

/// Turns a player sits out after landing on a charge square.
pub const CHARGE_PENALTY: u32 = 2;

/// The effect a landing square has on the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareEffect {
    None,
    Bird,
    Cliff,
    Charge,
}

impl SquareEffect {
    /// Returns the lowercase name used by the console protocol.
    pub const fn name(self) -> &'static str {
        match self {
            SquareEffect::None => "none",
            SquareEffect::Bird => "bird",
            SquareEffect::Cliff => "cliff",
            SquareEffect::Charge => "charge",
        }
    }
}

/// Board metadata fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub length: u32,
    pub charge_squares: BTreeSet<u32>,
    pub cliff_squares: BTreeSet<u32>,
}

impl Track {
    /// Builds a track. Length bounds are checked by the caller.
    pub fn new<C, K>(length: u32, charge_squares: C, cliff_squares: K) -> Self
    where
        C: IntoIterator<Item = u32>,
        K: IntoIterator<Item = u32>,
    {
        Track {
            length,
            charge_squares: charge_squares.into_iter().collect(),
            cliff_squares: cliff_squares.into_iter().collect(),
        }
    }

    /// Returns true if `length` is within the playable range.
    pub const fn is_valid_length(length: u32) -> bool {
        length >= MIN_TRACK_LENGTH && length <= MAX_TRACK_LENGTH
    }

    pub fn is_bird_square(&self, square: u32) -> bool {
        square % BIRD_INTERVAL == 0 && square > 1 && square < self.length
    }

    pub fn is_cliff_square(&self, square: u32) -> bool {
        self.cliff_squares.contains(&square)
    }

    pub fn is_charge_square(&self, square: u32) -> bool {
        self.charge_squares.contains(&square)
    }

    /// Classifies a landing square. Bird beats cliff, cliff beats charge.
    pub fn effect_at(&self, square: u32) -> SquareEffect {
        if self.is_bird_square(square) {
            SquareEffect::Bird
        } else if self.is_cliff_square(square) {
            SquareEffect::Cliff
        } else if self.is_charge_square(square) {
            SquareEffect::Charge
        } else {
            SquareEffect::None
        }
    }
}
