//! Board representation and game-state types.
//!
//! Contains the player tokens, the track with its special squares, and the
//! tagged progress state of a game.

pub mod player;
pub mod state;
pub mod track;

pub use player::{Player, START_SQUARE};
pub use state::GameState;
pub use track::{
    SquareEffect, Track, BIRD_INTERVAL, CHARGE_PENALTY, MAX_TRACK_LENGTH, MIN_TRACK_LENGTH,
};
