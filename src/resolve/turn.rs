//! Turn order.
//!
//! Passes the turn around the roster, consuming the turns of players who
//! are sitting out a charge penalty.

use crate::board::Player;

/// Returns the roster index after `index`, wrapping to the front.
pub fn next_index(index: usize, player_count: usize) -> usize {
    if index + 1 >= player_count {
        0
    } else {
        index + 1
    }
}

/// Advances from `active` to the next player able to roll.
///
/// Every player met on the way with pending charges pays one charge and is
/// passed over. Returns the new active index together with the indices of
/// the skipped players, in the order they were skipped.
///
/// Terminates because charges are bounded and strictly decrease on each visit.
pub fn advance_turn(players: &mut [Player], active: usize) -> (usize, Vec<usize>) {
    let mut skipped = Vec::new();
    let mut idx = next_index(active, players.len());
    while players[idx].has_charges() {
        players[idx].pay_charge();
        skipped.push(idx);
        idx = next_index(idx, players.len());
    }
    (idx, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &str) -> Vec<Player> {
        names.chars().map(Player::new).collect()
    }

    #[test]
    fn next_index_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn advance_without_charges() {
        let mut players = roster("ABC");
        assert_eq!(advance_turn(&mut players, 0), (1, vec![]));
        assert_eq!(advance_turn(&mut players, 2), (0, vec![]));
    }

    #[test]
    fn advance_skips_charged_player_once() {
        let mut players = roster("ABC");
        players[1].set_charges(2);
        let (next, skipped) = advance_turn(&mut players, 0);
        assert_eq!(next, 2);
        assert_eq!(skipped, vec![1]);
        assert_eq!(players[1].charges(), 1);
    }

    #[test]
    fn advance_skips_several_players_in_order() {
        let mut players = roster("ABCD");
        players[2].set_charges(1);
        players[3].set_charges(2);
        let (next, skipped) = advance_turn(&mut players, 1);
        assert_eq!(next, 0);
        assert_eq!(skipped, vec![2, 3]);
        assert!(!players[2].has_charges());
        assert_eq!(players[3].charges(), 1);
    }

    #[test]
    fn lone_player_pays_off_own_charges() {
        let mut players = roster("A");
        players[0].set_charges(2);
        let (next, skipped) = advance_turn(&mut players, 0);
        assert_eq!(next, 0);
        assert_eq!(skipped, vec![0, 0]);
        assert!(!players[0].has_charges());
    }

    #[test]
    fn every_other_player_charged_returns_to_mover() {
        let mut players = roster("AB");
        players[1].set_charges(2);
        let (next, skipped) = advance_turn(&mut players, 0);
        assert_eq!(next, 0);
        assert_eq!(skipped, vec![1]);
        assert_eq!(players[1].charges(), 1);
    }
}
