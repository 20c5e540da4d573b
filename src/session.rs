//! Console session state.
//!
//! Holds the game currently being played over the console protocol and
//! answers each parsed command with protocol lines.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::game::{GameSystem, TurnResult};
use crate::protocol::parser::Command;
use crate::protocol::setup::{encode_setup, parse_game};

/// Mutable state kept between console commands.
#[derive(Debug, Default)]
pub struct Session {
    pub game: Option<GameSystem>,
}

impl Session {
    /// Creates a session with no game in progress.
    pub fn new() -> Self {
        Session { game: None }
    }

    /// Creates a session already playing `game`.
    pub fn with_game(game: GameSystem) -> Self {
        Session { game: Some(game) }
    }

    /// Answers a single command. `Quit` is handled by the caller's loop.
    pub fn handle_command<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewGame { setup } => self.handle_newgame(&setup, out)?,
            Command::Roll { die1, die2 } => self.handle_roll(die1, die2, out)?,
            Command::Next => self.handle_next(out)?,
            Command::Square { player } => self.handle_square(player, out)?,
            Command::CanRoll { player } => self.handle_canroll(player, out)?,
            Command::Status => self.handle_status(out)?,
            Command::Setup => self.handle_setup(out)?,
            Command::Quit => {}
        }
        out.flush()
    }

    /// Returns the running game, or reports that there is none.
    fn game_or_error<W: Write>(&self, out: &mut W) -> io::Result<Option<&GameSystem>> {
        if self.game.is_none() {
            writeln!(out, "error no game in progress")?;
        }
        Ok(self.game.as_ref())
    }

    fn handle_newgame<W: Write>(&mut self, setup: &str, out: &mut W) -> io::Result<()> {
        match parse_game(setup) {
            Ok(game) => {
                self.game = Some(game);
                writeln!(out, "ok")
            }
            Err(e) => {
                warn!("newgame rejected: {}", e);
                writeln!(out, "error {}", e)
            }
        }
    }

    fn handle_roll<W: Write>(&mut self, die1: u8, die2: u8, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game.as_mut() else {
            return writeln!(out, "error no game in progress");
        };
        let outcome = match game.roll_dice(die1, die2) {
            Ok(o) => o,
            Err(e) => {
                warn!("roll rejected: {}", e);
                return writeln!(out, "error {}", e);
            }
        };

        writeln!(
            out,
            "moved {} {} {} {}",
            outcome.player,
            outcome.from,
            outcome.to,
            outcome.effect.name()
        )?;
        for name in &outcome.skipped {
            writeln!(out, "skipped {}", name)?;
        }
        match outcome.result {
            TurnResult::Next(name) => writeln!(out, "next {}", name),
            TurnResult::Winner(name) => {
                info!("player {} wins", name);
                writeln!(out, "winner {}", name)
            }
        }
    }

    fn handle_next<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(game) = self.game_or_error(out)? {
            writeln!(out, "next {}", game.next_player_name())?;
        }
        Ok(())
    }

    fn handle_square<W: Write>(&self, player: char, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game_or_error(out)? else {
            return Ok(());
        };
        match game.player_square(player) {
            Ok(square) => writeln!(out, "square {} {}", player, square),
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn handle_canroll<W: Write>(&self, player: char, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game_or_error(out)? else {
            return Ok(());
        };
        match game.can_roll_dice(player) {
            Ok(can) => writeln!(out, "canroll {} {}", player, can),
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn handle_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game_or_error(out)? else {
            return Ok(());
        };
        for p in game.players() {
            writeln!(out, "player {} {} {}", p.name(), p.square(), p.charges())?;
        }
        match game.winner_name() {
            Ok(name) => writeln!(out, "winner {}", name),
            Err(_) => writeln!(out, "next {}", game.next_player_name()),
        }
    }

    fn handle_setup<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(game) = self.game_or_error(out)? {
            writeln!(out, "setup {}", encode_setup(&game.setup()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::parser::parse_command;

    /// Feeds each line through the parser and session, returning all output.
    fn run(session: &mut Session, lines: &[&str]) -> Vec<String> {
        let mut output = Vec::new();
        for line in lines {
            if let Some(cmd) = parse_command(line) {
                session.handle_command(cmd, &mut output).unwrap();
            }
        }
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn new_session_has_no_game() {
        let session = Session::new();
        assert!(session.game.is_none());
    }

    #[test]
    fn isready_outputs_readyok() {
        let mut session = Session::new();
        assert_eq!(run(&mut session, &["isready"]), vec!["readyok"]);
    }

    #[test]
    fn commands_without_game_report_error() {
        let mut session = Session::new();
        let lines = run(
            &mut session,
            &["roll 1 2", "next", "square A", "canroll A", "status", "setup"],
        );
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l == "error no game in progress"));
    }

    #[test]
    fn newgame_then_roll() {
        let mut session = Session::new();
        let lines = run(&mut session, &["newgame 30/AB/6/10", "roll 2 3", "square A"]);
        assert_eq!(
            lines,
            vec!["ok", "moved A 1 6 charge", "next B", "square A 6"]
        );
    }

    #[test]
    fn skipped_players_are_listed() {
        let mut session = Session::new();
        let lines = run(
            &mut session,
            &["newgame 30/AB/6/-", "roll 2 3", "roll 1 1", "canroll A"],
        );
        assert_eq!(
            lines,
            vec![
                "ok",
                "moved A 1 6 charge",
                "next B",
                "moved B 1 3 none",
                "skipped A",
                "next B",
                "canroll A false",
            ]
        );
    }

    #[test]
    fn bad_newgame_keeps_previous_game() {
        let mut session = Session::new();
        let lines = run(&mut session, &["newgame 30/AB/-/-", "newgame 3/AB/-/-", "next"]);
        assert_eq!(lines[0], "ok");
        assert!(lines[1].starts_with("error "));
        assert_eq!(lines[2], "next A");
    }

    #[test]
    fn invalid_dice_are_reported() {
        let mut session = Session::new();
        let lines = run(&mut session, &["newgame 30/AB/-/-", "roll 0 7", "next"]);
        assert_eq!(lines, vec!["ok", "error invalid dice 0 7", "next A"]);
    }

    #[test]
    fn winning_roll_and_status() {
        let game = GameSystem::new("AB", 10, [], []).unwrap();
        let mut session = Session::with_game(game);
        let lines = run(&mut session, &["roll 6 6", "roll 1 1", "status"]);
        assert_eq!(
            lines,
            vec![
                "moved A 1 10 none",
                "winner A",
                "error game is over",
                "player A 10 0",
                "player B 1 0",
                "winner A",
            ]
        );
    }

    #[test]
    fn unknown_player_query() {
        let mut session = Session::new();
        let lines = run(&mut session, &["newgame 30/AB/-/-", "square Z"]);
        assert_eq!(lines, vec!["ok", "error no player named 'Z'"]);
    }

    #[test]
    fn setup_echoes_canonical_notation() {
        let mut session = Session::new();
        let lines = run(&mut session, &["newgame 30/AB/7,6/-", "setup"]);
        assert_eq!(lines, vec!["ok", "setup 30/AB/6,7/-"]);
    }
}
