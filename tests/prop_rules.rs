//! Property-based tests for roll resolution.
//!
//! Drives random games with random dice and checks the turn-order and
//! board invariants after every roll.

use proptest::prelude::*;

use cliffrace::board::{GameState, SquareEffect, CHARGE_PENALTY};
use cliffrace::{is_dice_valid, GameError, GameSystem, TurnResult};

/// A random board: roster, length, and special squares inside the track.
fn board() -> impl Strategy<Value = (String, u32, Vec<u32>, Vec<u32>)> {
    (1usize..=6, 10u32..=150).prop_flat_map(|(players, length)| {
        (
            Just("ABCDEF"[..players].to_string()),
            Just(length),
            prop::collection::vec(2..length, 0..6),
            prop::collection::vec(2..length, 0..6),
        )
    })
}

fn rolls() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((1u8..=6, 1u8..=6), 1..300)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Dice validity is exactly "both faces in 1..=6".
    #[test]
    fn prop_dice_validity(d1 in any::<u8>(), d2 in any::<u8>()) {
        let expected = (1..=6).contains(&d1) && (1..=6).contains(&d2);
        prop_assert_eq!(is_dice_valid(d1, d2), expected);
    }

    /// Every roll keeps squares on the track, never hands the turn to a
    /// charged player, and charges each skipped player exactly one turn.
    #[test]
    fn prop_roll_invariants((roster, length, charges, cliffs) in board(), dice in rolls()) {
        let mut game = GameSystem::new(&roster, length, charges, cliffs).unwrap();

        for (d1, d2) in dice {
            if game.is_game_over() {
                let before = game.clone();
                prop_assert_eq!(game.roll_dice(d1, d2), Err(GameError::GameOver));
                prop_assert_eq!(&game, &before);
                break;
            }

            let before = game.clone();
            let mover = before.next_player_name();
            prop_assert_eq!(before.can_roll_dice(mover), Ok(true));

            let outcome = game.roll_dice(d1, d2).unwrap();
            prop_assert_eq!(outcome.player, mover);
            prop_assert_eq!(outcome.from, before.player_square(mover).unwrap());

            for p in game.players() {
                prop_assert!(p.square() >= 1 && p.square() <= length);
                prop_assert!(p.charges() <= CHARGE_PENALTY);
            }

            match outcome.result {
                TurnResult::Winner(w) => {
                    prop_assert_eq!(w, mover);
                    prop_assert_eq!(game.player_square(w), Ok(length));
                    prop_assert_eq!(game.state(), GameState::Over {
                        winner: roster.find(w).unwrap(),
                    });
                    prop_assert!(outcome.skipped.is_empty());
                }
                TurnResult::Next(next) => {
                    prop_assert_eq!(game.next_player_name(), next);
                    prop_assert_eq!(game.can_roll_dice(next), Ok(true));
                    prop_assert!(outcome.to < length);

                    for p in before.players() {
                        let skips =
                            outcome.skipped.iter().filter(|&&s| s == p.name()).count() as u32;
                        let after = game.player(p.name()).unwrap().charges();
                        if p.name() == mover && outcome.effect == SquareEffect::Charge {
                            prop_assert_eq!(after + skips, CHARGE_PENALTY);
                        } else {
                            prop_assert_eq!(after + skips, p.charges());
                        }
                    }
                }
            }

            if outcome.effect == SquareEffect::None && matches!(outcome.result, TurnResult::Next(_)) {
                prop_assert_eq!(outcome.to, outcome.from + u32::from(d1) + u32::from(d2));
            }
        }
    }
}
