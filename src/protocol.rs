//! Line-oriented text protocol.
//!
//! Lets another program (a GUI, a test harness, a shell script) drive the
//! engine over stdin/stdout. The framing follows the Go Text Protocol: an
//! optional numeric id, a command and arguments on one line; answers are
//! `=id message` on success or `?id message` on failure, each followed by an
//! empty line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize [size]` - report the board size, or check that `size` matches it
//! - `clear_board` - start a new game with a random first player
//! - `play <col> <row>` - place a stone for the active player (1-based)
//! - `genmove` - pick a random empty cell for the active player and play it
//! - `showboard` - draw the board
//! - `status` - `in_progress`, `draw` or `won <name>`
//! - `turn` - name and stone of the active player
//!
//! ## Example
//!
//! ```
//! use gomoku_rust::protocol::ProtocolEngine;
//!
//! let mut engine = ProtocolEngine::with_seed(1).unwrap();
//! let input = "1 play 8 8\n2 status\nquit\n".as_bytes();
//! let mut output = Vec::new();
//! engine.run(input, &mut output).unwrap();
//! assert!(String::from_utf8(output).unwrap().contains("=2 in_progress"));
//! ```

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::board::PlacementResult;
use crate::constants::{DEFAULT_COMPUTER_NAME, DEFAULT_HUMAN_NAME, N};
use crate::coords::{parse_args, str_point};
use crate::error::SetupError;
use crate::player::{Player, RandomMover};
use crate::session::{GameSession, GameStatus};
use crate::stone::Stone;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "status",
    "turn",
    "version",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    /// Current game
    session: GameSession,
    /// Players used whenever a new game is started
    players: [Player; 2],
    /// Source of random starting players
    rng: fastrand::Rng,
    /// Picks moves for `genmove`
    mover: RandomMover,
}

impl ProtocolEngine {
    /// Create an engine for the default human and computer players.
    pub fn new() -> Result<Self, SetupError> {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Create an engine whose random choices are reproducible.
    pub fn with_seed(seed: u64) -> Result<Self, SetupError> {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Result<Self, SetupError> {
        let players = [
            Player::human(DEFAULT_HUMAN_NAME, Stone::Blue)?,
            Player::automated(DEFAULT_COMPUTER_NAME, Stone::Red)?,
        ];
        Self::with_players(players, rng)
    }

    /// Create an engine for the given players.
    pub fn with_players(players: [Player; 2], mut rng: fastrand::Rng) -> Result<Self, SetupError> {
        let mover = RandomMover::with_seed(rng.u64(..));
        let [a, b] = players.clone();
        let session = GameSession::with_rng(a, b, &mut rng)?;
        Ok(Self {
            session,
            players,
            rng,
            mover,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "executing");
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "boardsize" => {
                let size = self.session.board().size();
                match args.first().map(|a| a.parse::<usize>()) {
                    None => (true, size.to_string()),
                    Some(Ok(n)) if n == size => (true, String::new()),
                    Some(Ok(n)) => (
                        false,
                        format!("unacceptable size, only {N} is supported (got {n})"),
                    ),
                    Some(Err(_)) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                let [a, b] = self.players.clone();
                match GameSession::with_rng(a, b, &mut self.rng) {
                    Ok(session) => {
                        self.session = session;
                        (true, self.session.headline())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "play" => {
                let [col, row] = args else {
                    return (false, "expected: play <col> <row>".to_string());
                };
                let Some(pt) = parse_args(col, row) else {
                    return (false, "invalid coordinates".to_string());
                };
                match self.session.play_active(pt) {
                    Ok(result) => (true, self.describe(result)),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                if self.session.is_over() {
                    return (false, "the game is already over".to_string());
                }
                let Some(pt) = self.mover.choose(self.session.board()) else {
                    return (false, "no empty cell left".to_string());
                };
                match self.session.play_active(pt) {
                    Ok(result) => {
                        let outcome = self.describe(result);
                        if outcome.is_empty() {
                            (true, str_point(pt))
                        } else {
                            (true, format!("{} {outcome}", str_point(pt)))
                        }
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.session.board()).trim_end().to_string()),

            "status" => (true, Self::status_str(self.session.status())),

            "turn" => {
                let p = self.session.active_player();
                (true, format!("{} {}", p.name(), p.stone()))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn describe(&self, result: PlacementResult) -> String {
        match result {
            PlacementResult::StonePlaced => String::new(),
            PlacementResult::BoardFull | PlacementResult::PlayerWin => {
                Self::status_str(self.session.status())
            }
        }
    }

    fn status_str(status: &GameStatus) -> String {
        match status {
            GameStatus::InProgress => "in_progress".to_string(),
            GameStatus::Draw => "draw".to_string(),
            GameStatus::Won { winner } => format!("won {}", winner.name()),
        }
    }
}
