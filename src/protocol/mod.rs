//! Console protocol handling.
//!
//! This module implements the setup notation that describes a fresh game
//! and the command parser for the console session loop.

pub mod parser;
pub mod setup;

pub use parser::{parse_command, Command};
pub use setup::{encode_setup, parse_game, parse_setup, GameSetup, SetupError};
