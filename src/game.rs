//! The game system.
//!
//! Owns the player roster, the track and the progress state, and turns each
//! dice roll into a state transition. All caller errors surface as
//! [`GameError`] values; a rejected call never mutates the game.

use serde::Serialize;
use tracing::{debug, info};

use crate::board::{GameState, Player, SquareEffect, Track};
use crate::protocol::setup::GameSetup;
use crate::resolve::{advance_turn, apply_square_effect};

/// Lowest value a die can show.
pub const MIN_DIE: u8 = 1;

/// Highest value a die can show.
pub const MAX_DIE: u8 = 6;

/// Errors returned when a caller breaks a precondition of the game API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("track length {0} is outside 10..=150")]
    InvalidTrackLength(u32),

    #[error("roster is empty")]
    EmptyRoster,

    #[error("player name {0:?} cannot be written in setup notation")]
    InvalidPlayerName(char),

    #[error("player '{0}' appears more than once in the roster")]
    DuplicatePlayer(char),

    #[error("no player named '{0}'")]
    PlayerNotFound(char),

    #[error("invalid dice {0} {1}")]
    InvalidDice(u8, u8),

    #[error("game is over")]
    GameOver,

    #[error("game is not over")]
    GameNotOver,
}

/// Returns true if both dice show a value between 1 and 6.
pub fn is_dice_valid(die1: u8, die2: u8) -> bool {
    is_die_valid(die1) && is_die_valid(die2)
}

fn is_die_valid(die: u8) -> bool {
    (MIN_DIE..=MAX_DIE).contains(&die)
}

/// Names must survive a trip through the setup notation and the console,
/// which split on '/' and whitespace.
fn is_name_valid(name: char) -> bool {
    name != '/' && !name.is_whitespace() && !name.is_control()
}

/// Who plays after a resolved roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnResult {
    /// The named player rolls next.
    Next(char),
    /// The mover won and the game is frozen.
    Winner(char),
}

/// Everything that happened during one call to [`GameSystem::roll_dice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    pub player: char,
    pub dice: [u8; 2],
    pub from: u32,
    pub to: u32,
    pub effect: SquareEffect,
    /// Players whose turn was consumed paying a charge, in skip order.
    pub skipped: Vec<char>,
    pub result: TurnResult,
}

/// A single game on a single track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSystem {
    track: Track,
    players: Vec<Player>,
    state: GameState,
}

impl GameSystem {
    /// Creates a game with one player per character of `roster`, in turn order.
    pub fn new<C, K>(
        roster: &str,
        track_length: u32,
        charge_squares: C,
        cliff_squares: K,
    ) -> Result<Self, GameError>
    where
        C: IntoIterator<Item = u32>,
        K: IntoIterator<Item = u32>,
    {
        if !Track::is_valid_length(track_length) {
            return Err(GameError::InvalidTrackLength(track_length));
        }
        let mut players: Vec<Player> = Vec::with_capacity(roster.len());
        for name in roster.chars() {
            if !is_name_valid(name) {
                return Err(GameError::InvalidPlayerName(name));
            }
            if players.iter().any(|p| p.has_name(name)) {
                return Err(GameError::DuplicatePlayer(name));
            }
            players.push(Player::new(name));
        }
        if players.is_empty() {
            return Err(GameError::EmptyRoster);
        }

        let game = GameSystem {
            track: Track::new(track_length, charge_squares, cliff_squares),
            players,
            state: GameState::InProgress { active: 0 },
        };
        info!(
            roster,
            track_length,
            charges = ?game.track.charge_squares,
            cliffs = ?game.track.cliff_squares,
            "new game"
        );
        Ok(game)
    }

    /// Validates a pair of dice. Does not depend on game state.
    pub fn is_dice_valid(die1: u8, die2: u8) -> bool {
        is_dice_valid(die1, die2)
    }

    /// Board layout the game is played on.
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Current progress state.
    pub fn state(&self) -> GameState {
        self.state
    }

    fn find_player(&self, name: char) -> Option<usize> {
        self.players.iter().position(|p| p.has_name(name))
    }

    /// Looks up a player by name.
    pub fn player(&self, name: char) -> Result<&Player, GameError> {
        self.find_player(name)
            .map(|i| &self.players[i])
            .ok_or(GameError::PlayerNotFound(name))
    }

    /// Name of the player whose turn it is; the winner once the game is over.
    pub fn next_player_name(&self) -> char {
        self.players[self.state.current_index()].name()
    }

    /// Square of the named player.
    pub fn player_square(&self, name: char) -> Result<u32, GameError> {
        self.player(name).map(Player::square)
    }

    /// True if a player with this name is in the roster.
    pub fn is_valid_player(&self, name: char) -> bool {
        self.find_player(name).is_some()
    }

    /// True once a player has reached the last square.
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// True if the player owes no charges.
    pub fn can_roll_dice(&self, name: char) -> Result<bool, GameError> {
        self.player(name).map(|p| !p.has_charges())
    }

    /// The winning player, if the game is over.
    pub fn winner(&self) -> Option<&Player> {
        self.state.winner_index().map(|i| &self.players[i])
    }

    /// Name of the winner; fails with `GameNotOver` while the game runs.
    pub fn winner_name(&self) -> Result<char, GameError> {
        self.winner().map(Player::name).ok_or(GameError::GameNotOver)
    }

    /// Moves the active player by the sum of the dice and passes the turn.
    ///
    /// Fails without touching the game if the dice are invalid or the game
    /// is already over.
    pub fn roll_dice(&mut self, die1: u8, die2: u8) -> Result<RollOutcome, GameError> {
        if !is_dice_valid(die1, die2) {
            return Err(GameError::InvalidDice(die1, die2));
        }
        let active = match self.state {
            GameState::InProgress { active } => active,
            GameState::Over { .. } => return Err(GameError::GameOver),
        };

        let total = u32::from(die1) + u32::from(die2);
        let mover = &mut self.players[active];
        let from = mover.square();
        let landing = apply_square_effect(&self.track, mover, total);
        let name = mover.name();

        if landing.square >= self.track.length {
            mover.set_square(self.track.length);
            self.state = GameState::Over { winner: active };
            info!(player = %name, from, effect = landing.effect.name(), "game won");
            return Ok(RollOutcome {
                player: name,
                dice: [die1, die2],
                from,
                to: self.track.length,
                effect: landing.effect,
                skipped: Vec::new(),
                result: TurnResult::Winner(name),
            });
        }

        mover.set_square(landing.square);
        let (next, skipped) = advance_turn(&mut self.players, active);
        self.state = GameState::InProgress { active: next };

        let skipped: Vec<char> = skipped.into_iter().map(|i| self.players[i].name()).collect();
        let next_name = self.players[next].name();
        debug!(
            player = %name,
            die1,
            die2,
            from,
            to = landing.square,
            effect = landing.effect.name(),
            ?skipped,
            next = %next_name,
            "roll resolved"
        );
        Ok(RollOutcome {
            player: name,
            dice: [die1, die2],
            from,
            to: landing.square,
            effect: landing.effect,
            skipped,
            result: TurnResult::Next(next_name),
        })
    }

    /// Returns the setup this game was created from.
    pub fn setup(&self) -> GameSetup {
        GameSetup {
            track_length: self.track.length,
            roster: self.players.iter().map(Player::name).collect(),
            charge_squares: self.track.charge_squares.clone(),
            cliff_squares: self.track.cliff_squares.clone(),
        }
    }
}
