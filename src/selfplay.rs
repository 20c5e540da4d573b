//! Self-play game generation.
//!
//! Plays complete games with uniformly random dice and records every roll,
//! so rule changes and board layouts can be checked against many games at
//! once. Games are independent and can run in parallel on a rayon pool.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::game::{GameSystem, RollOutcome, MAX_DIE, MIN_DIE};
use crate::protocol::setup::encode_setup;

/// Errors that stop a self-play run before any game is played.
#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Number of parallel threads; 1 plays sequentially.
    pub threads: usize,
    /// Random seed (0 = use entropy). Game `i` is seeded with `seed + i`.
    pub seed: u64,
    /// Rolls after which an unfinished game is abandoned.
    pub max_turns: usize,
    /// Board to play on.
    pub game: GameConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            threads: 1,
            seed: 0,
            max_turns: 1000,
            game: GameConfig::default(),
        }
    }
}

/// Final square of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub name: char,
    pub square: u32,
}

/// A complete self-play game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    /// Setup notation of the board played on.
    pub setup: String,
    /// Every roll in order.
    pub turns: Vec<RollOutcome>,
    /// None if the game hit the turn limit.
    pub winner: Option<char>,
    pub final_squares: Vec<PlayerRecord>,
}

/// Aggregate statistics over a batch of games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub games: usize,
    pub unfinished: usize,
    pub mean_turns: f64,
    /// Win count per player, in roster order.
    pub wins: Vec<(char, usize)>,
}

fn game_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays one game from `start` to completion or the turn limit.
pub fn play_game<R: Rng>(
    start: &GameSystem,
    game_id: usize,
    max_turns: usize,
    rng: &mut R,
) -> GameRecord {
    let mut game = start.clone();
    let mut turns = Vec::new();

    while !game.is_game_over() && turns.len() < max_turns {
        let die1 = rng.gen_range(MIN_DIE..=MAX_DIE);
        let die2 = rng.gen_range(MIN_DIE..=MAX_DIE);
        match game.roll_dice(die1, die2) {
            Ok(outcome) => turns.push(outcome),
            Err(e) => {
                debug!(game_id, "stopping game: {}", e);
                break;
            }
        }
    }

    GameRecord {
        game_id,
        setup: encode_setup(&game.setup()),
        turns,
        winner: game.winner().map(|p| p.name()),
        final_squares: game
            .players()
            .iter()
            .map(|p| PlayerRecord {
                name: p.name(),
                square: p.square(),
            })
            .collect(),
    }
}

/// Runs self-play generation, producing one record per game in game-id order.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
/// With a non-zero seed the records do not depend on the thread count.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    let start = config.game.build()?;
    info!(
        games = config.num_games,
        threads = config.threads,
        setup = %encode_setup(&start.setup()),
        "starting self-play"
    );

    let play = |i: usize| {
        let mut rng = game_rng(config.seed, i);
        let record = play_game(&start, i, config.max_turns, &mut rng);
        debug!(
            game_id = i,
            turns = record.turns.len(),
            winner = ?record.winner,
            "game finished"
        );
        record
    };

    if config.threads > 1 {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        Ok(pool.install(|| (0..config.num_games).into_par_iter().map(play).collect()))
    } else {
        Ok((0..config.num_games).map(play).collect())
    }
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Aggregates win counts and game lengths.
pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut wins: Vec<(char, usize)> = games
        .first()
        .map(|g| g.final_squares.iter().map(|p| (p.name, 0)).collect())
        .unwrap_or_default();
    let mut unfinished = 0;
    let mut total_turns = 0;

    for game in games {
        total_turns += game.turns.len();
        match game.winner {
            Some(w) => match wins.iter_mut().find(|(name, _)| *name == w) {
                Some(entry) => entry.1 += 1,
                None => wins.push((w, 1)),
            },
            None => unfinished += 1,
        }
    }

    Summary {
        games: games.len(),
        unfinished,
        mean_turns: total_turns as f64 / games.len().max(1) as f64,
        wins,
    }
}
