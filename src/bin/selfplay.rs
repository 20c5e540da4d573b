//! Self-play game generation CLI.
//!
//! Plays games with random dice and outputs one JSON record per game.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cliffrace::config::{ConfigError, GameConfig};
use cliffrace::protocol::setup::parse_setup;
use cliffrace::selfplay::{self, SelfPlayConfig};

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "Plays random games and writes JSONL records")]
struct Args {
    /// Number of games to play.
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Number of parallel threads.
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Random seed, 0 for entropy.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Rolls after which a game is abandoned.
    #[arg(long, default_value_t = 1000)]
    max_turns: usize,

    /// JSON board config; the built-in board is used otherwise.
    #[arg(long, conflicts_with = "setup")]
    config: Option<PathBuf>,

    /// Board as a setup string (e.g. 30/AB/6/10).
    #[arg(long)]
    setup: Option<String>,

    /// Output file path (default: stdout).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Suppress the summary.
    #[arg(long)]
    quiet: bool,
}

/// Picks the board from `--config`, `--setup`, or the built-in default.
fn board(args: &Args) -> Result<GameConfig, ConfigError> {
    if let Some(path) = &args.config {
        return GameConfig::load(path);
    }
    if let Some(setup) = &args.setup {
        return Ok(GameConfig::from(&parse_setup(setup)?));
    }
    Ok(GameConfig::default())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cliffrace=info,selfplay=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let game = match board(&args) {
        Ok(g) => g,
        Err(e) => {
            error!(config = ?args.config, setup = ?args.setup, "failed to load board: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = SelfPlayConfig {
        num_games: args.games,
        threads: args.threads,
        seed: args.seed,
        max_turns: args.max_turns,
        game,
    };

    let start = Instant::now();
    let games = match selfplay::run_self_play(&config) {
        Ok(g) => g,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    if !args.quiet {
        let summary = selfplay::summarize(&games);
        let mean_turns = format!("{:.1}", summary.mean_turns);
        let elapsed_s = format!("{:.2}", elapsed.as_secs_f64());
        info!(
            games = summary.games,
            unfinished = summary.unfinished,
            mean_turns = %mean_turns,
            elapsed_s = %elapsed_s,
            "self-play complete"
        );
        for (name, wins) in &summary.wins {
            let pct = 100.0 * *wins as f64 / summary.games.max(1) as f64;
            info!("  {}: {} ({:.1}%)", name, wins, pct);
        }
    }

    let written = match &args.output {
        Some(path) => File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer)
        }),
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer)
        }
    };
    if let Err(e) = written {
        error!("failed to write output: {}", e);
        return ExitCode::FAILURE;
    }
    if let Some(path) = &args.output {
        info!("wrote {} games to {}", games.len(), path.display());
    }
    ExitCode::SUCCESS
}
