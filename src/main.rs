//! Cliffrace -- a dice-driven track race played over a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr through `tracing`, filtered by `RUST_LOG`.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cliffrace::config::{ConfigError, GameConfig};
use cliffrace::protocol::parser::{parse_command, Command};
use cliffrace::protocol::setup::parse_game;
use cliffrace::session::Session;

/// Command-line options for the console session.
#[derive(Debug, Parser)]
#[command(name = "cliffrace", version, about)]
struct Args {
    /// Start with the game described by this JSON config file.
    #[arg(long, conflicts_with = "setup")]
    config: Option<PathBuf>,

    /// Start with the game described by this setup string (e.g. 30/AB/6/10).
    #[arg(long)]
    setup: Option<String>,
}

/// Builds the session requested on the command line.
fn initial_session(args: &Args) -> Result<Session, ConfigError> {
    if let Some(path) = &args.config {
        let game = GameConfig::load(path)?.build()?;
        return Ok(Session::with_game(game));
    }
    if let Some(setup) = &args.setup {
        let game = parse_game(setup)?;
        return Ok(Session::with_game(game));
    }
    Ok(Session::new())
}

/// Runs the console protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cliffrace=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut session = match initial_session(&args) {
        Ok(s) => s,
        Err(e) => {
            error!(config = ?args.config, setup = ?args.setup, "failed to start game: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        if cmd == Command::Quit {
            break;
        }
        if let Err(e) = session.handle_command(cmd, &mut out) {
            error!("failed to write response: {}", e);
            return ExitCode::FAILURE;
        }
    }

    info!("session closed");
    ExitCode::SUCCESS
}
