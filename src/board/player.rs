//! Player tokens.
//!
//! A player is identified by a single character and tracks the square its
//! token stands on plus the number of turns it still has to sit out.

use serde::Serialize;

/// Square every token starts the game on.
pub const START_SQUARE: u32 = 1;

/// A token on the track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: char,
    square: u32,
    charges: u32,
}

impl Player {
    /// Creates a player standing on the start square with no charges.
    pub fn new(name: char) -> Self {
        Player {
            name,
            square: START_SQUARE,
            charges: 0,
        }
    }

    /// Single-character identifier.
    pub fn name(&self) -> char {
        self.name
    }

    /// Exact name match.
    pub fn has_name(&self, candidate: char) -> bool {
        self.name == candidate
    }

    /// Square the token stands on.
    pub fn square(&self) -> u32 {
        self.square
    }

    /// Moves the token. The caller guarantees the square is on the track.
    pub fn set_square(&mut self, square: u32) {
        self.square = square;
    }

    /// Number of future turns this player must skip.
    pub fn charges(&self) -> u32 {
        self.charges
    }

    /// True while the player still has turns to sit out.
    pub fn has_charges(&self) -> bool {
        self.charges > 0
    }

    /// Overwrites the pending charges. Charges never accumulate.
    pub fn set_charges(&mut self, charges: u32) {
        self.charges = charges;
    }

    /// Consumes one skipped turn.
    pub fn pay_charge(&mut self) {
        self.charges = self.charges.saturating_sub(1);
    }
}
