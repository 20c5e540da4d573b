//! Cliffrace rule engine library.
//!
//! Exposes the board representation, roll resolution, the game system, and
//! the console/config/self-play layers for use by integration tests and the
//! binary entry points.

pub mod board;
pub mod config;
pub mod game;
pub mod protocol;
pub mod resolve;
pub mod selfplay;
pub mod session;

pub use game::{is_dice_valid, GameError, GameSystem, RollOutcome, TurnResult};
