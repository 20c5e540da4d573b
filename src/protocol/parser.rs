//! Console command parser.
//!
//! Parses incoming console commands from raw text into structured
//! `Command` variants that the session loop can dispatch on.

use tracing::warn;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; the session replies `readyok`.
    IsReady,

    /// Start a new game from a setup string.
    NewGame { setup: String },

    /// Roll the given dice for the active player.
    Roll { die1: u8, die2: u8 },

    /// Ask whose turn it is.
    Next,

    /// Ask for the square of a player.
    Square { player: char },

    /// Ask whether a player may roll (owes no charges).
    CanRoll { player: char },

    /// Dump every player plus the turn or winner.
    Status,

    /// Print the setup string of the running game.
    Setup,

    /// Terminate the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, args) = tokens.split_first()?;

    match head {
        "isready" => Some(Command::IsReady),
        "next" => Some(Command::Next),
        "status" => Some(Command::Status),
        "setup" => Some(Command::Setup),
        "quit" => Some(Command::Quit),

        "newgame" => parse_newgame(args),
        "roll" => parse_roll(args),
        "square" => parse_player(args, "square").map(|player| Command::Square { player }),
        "canroll" => parse_player(args, "canroll").map(|player| Command::CanRoll { player }),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `newgame <setup>`.
fn parse_newgame(args: &[&str]) -> Option<Command> {
    match args {
        [setup] => Some(Command::NewGame {
            setup: (*setup).to_string(),
        }),
        _ => {
            warn!("malformed newgame: expected 'newgame <setup>'");
            None
        }
    }
}

/// Parses `roll <d1> <d2>`. Range checking is left to the game.
fn parse_roll(args: &[&str]) -> Option<Command> {
    let [d1, d2] = args else {
        warn!("malformed roll: expected 'roll <d1> <d2>'");
        return None;
    };
    match (d1.parse::<u8>(), d2.parse::<u8>()) {
        (Ok(die1), Ok(die2)) => Some(Command::Roll { die1, die2 }),
        _ => {
            warn!("invalid dice values: '{}' '{}'", d1, d2);
            None
        }
    }
}

/// Parses a single-character player argument.
fn parse_player(args: &[&str], command: &str) -> Option<char> {
    let mut chars = match args {
        [name] => name.chars(),
        _ => {
            warn!("malformed {}: expected '{} <player>'", command, command);
            return None;
        }
    };
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => {
            warn!("player names are a single character: '{}'", args[0]);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("next"), Some(Command::Next));
        assert_eq!(parse_command("status"), Some(Command::Status));
        assert_eq!(parse_command("setup"), Some(Command::Setup));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_newgame_setup() {
        assert_eq!(
            parse_command("newgame 30/AB/6/10"),
            Some(Command::NewGame {
                setup: "30/AB/6/10".to_string(),
            })
        );
        assert_eq!(parse_command("newgame"), None);
        assert_eq!(parse_command("newgame 30/AB/-/- extra"), None);
    }

    #[test]
    fn parse_roll_values() {
        assert_eq!(parse_command("roll 2 3"), Some(Command::Roll { die1: 2, die2: 3 }));
        // Out-of-range dice still parse; the game rejects them.
        assert_eq!(parse_command("roll 0 9"), Some(Command::Roll { die1: 0, die2: 9 }));
        assert_eq!(parse_command("roll 2"), None);
        assert_eq!(parse_command("roll two 3"), None);
        assert_eq!(parse_command("roll -1 3"), None);
    }

    #[test]
    fn parse_player_queries() {
        assert_eq!(parse_command("square A"), Some(Command::Square { player: 'A' }));
        assert_eq!(parse_command("canroll B"), Some(Command::CanRoll { player: 'B' }));
        assert_eq!(parse_command("square"), None);
        assert_eq!(parse_command("square AB"), None);
        assert_eq!(parse_command("canroll A B"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  isready  "), Some(Command::IsReady));
        assert_eq!(parse_command("  roll 1  6 "), Some(Command::Roll { die1: 1, die2: 6 }));
    }
}
