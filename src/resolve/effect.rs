//! Landing-square resolution.
//!
//! Turns a raw candidate square (start square plus dice total) into the
//! square the mover actually ends on, applying at most one special-square
//! effect.

use crate::board::{Player, SquareEffect, Track, BIRD_INTERVAL, CHARGE_PENALTY, START_SQUARE};

/// The candidate square after its special-square effect was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub square: u32,
    pub effect: SquareEffect,
}

/// Applies the effect of the square `mover` would land on after moving `total`.
///
/// The mover is only mutated by a charge square, which sets its charges.
/// The returned square may lie beyond the end of the track; the caller
/// checks for the win afterwards.
pub fn apply_square_effect(track: &Track, mover: &mut Player, total: u32) -> Landing {
    let candidate = mover.square() + total;
    let effect = track.effect_at(candidate);
    let square = match effect {
        SquareEffect::Bird => candidate + BIRD_INTERVAL,
        SquareEffect::Cliff => mover.square().saturating_sub(total).max(START_SQUARE),
        SquareEffect::Charge => {
            mover.set_charges(CHARGE_PENALTY);
            candidate
        }
        SquareEffect::None => candidate,
    };
    Landing { square, effect }
}
