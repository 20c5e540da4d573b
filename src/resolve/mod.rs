//! Roll resolution.
//!
//! Applies special-square effects to a landing square and advances the
//! turn order past players who are paying charges.

pub mod effect;
pub mod turn;

pub use effect::{apply_square_effect, Landing};
pub use turn::{advance_turn, next_index};
