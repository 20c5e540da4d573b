//! Game progress state.
//!
//! Whether a game is still running is a single tagged value rather than a
//! flag plus an optional winner, so a finished game cannot have an active
//! mover.

use serde::Serialize;

/// Progress of a game, holding indices into the player roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameState {
    /// The player at `active` rolls next.
    InProgress { active: usize },
    /// The player at `winner` reached the last square.
    Over { winner: usize },
}

impl GameState {
    pub const fn is_over(self) -> bool {
        matches!(self, GameState::Over { .. })
    }

    /// Roster index whose turn it is. A finished game stays frozen on the winner.
    pub const fn current_index(self) -> usize {
        match self {
            GameState::InProgress { active } => active,
            GameState::Over { winner } => winner,
        }
    }

    pub const fn winner_index(self) -> Option<usize> {
        match self {
            GameState::InProgress { .. } => None,
            GameState::Over { winner } => Some(winner),
        }
    }
}
