//! Players and the sources their moves come from.
//!
//! A [`Player`] is pure identity: a name, a stone and whether moves come from
//! a person or from the engine. Producing a move is the job of a
//! [`MoveSource`]; the front-end pairs each player with one according to
//! [`PlayerKind`].

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::board::{Board, Point};
use crate::coords::parse_point;
use crate::error::SetupError;
use crate::stone::Stone;

/// Where a player's moves come from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves arrive from outside (keyboard, pointer, protocol).
    Human,
    /// Moves are picked by the engine.
    Automated,
}

/// A participant in a game. Immutable once built.
///
/// Two players are equal iff their names and stones match.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    stone: Stone,
    kind: PlayerKind,
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.stone == other.stone
    }
}

impl Eq for Player {}

impl Player {
    pub fn new(name: impl Into<String>, stone: Stone, kind: PlayerKind) -> Result<Self, SetupError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SetupError::EmptyName);
        }
        Ok(Self { name, stone, kind })
    }

    pub fn human(name: impl Into<String>, stone: Stone) -> Result<Self, SetupError> {
        Self::new(name, stone, PlayerKind::Human)
    }

    pub fn automated(name: impl Into<String>, stone: Stone) -> Result<Self, SetupError> {
        Self::new(name, stone, PlayerKind::Automated)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_automated(&self) -> bool {
        self.kind == PlayerKind::Automated
    }
}

/// Something that can be asked for the next move.
///
/// Implementations do not check legality; the session rejects bad moves and
/// the caller asks again.
pub trait MoveSource {
    fn request_move(&mut self, board: &Board, player: &Player) -> Result<Point>;
}

/// Uniform random choice among the empty cells.
pub struct RandomMover {
    rng: fastrand::Rng,
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomMover {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A mover whose choices are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Pick an empty cell, or `None` if the board is full.
    pub fn choose(&mut self, board: &Board) -> Option<Point> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        Some(empty[self.rng.usize(..empty.len())])
    }
}

impl MoveSource for RandomMover {
    fn request_move(&mut self, board: &Board, player: &Player) -> Result<Point> {
        let Some(pt) = self.choose(board) else {
            bail!("no empty cell left for {}", player.name());
        };
        debug!(player = player.name(), col = pt.0, row = pt.1, "random move chosen");
        Ok(pt)
    }
}

/// Reads 1-based `col row` lines from a text stream, prompting on `output`.
///
/// Lines that do not parse are answered with a hint and a fresh prompt.
/// Running out of input is an error.
pub struct HumanInput<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanInput<R, W> {
    fn request_move(&mut self, _board: &Board, player: &Player) -> Result<Point> {
        loop {
            write!(
                self.output,
                "{} ({}) move [col row]: ",
                player.name(),
                player.stone()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read move")?;
            if read == 0 {
                bail!("input closed while waiting for {}", player.name());
            }
            match parse_point(&line) {
                Some(pt) => return Ok(pt),
                None => writeln!(
                    self.output,
                    "Could not read '{}': enter column and row, e.g. 8 8",
                    line.trim()
                )?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn alice() -> Player {
        Player::human("Alice", Stone::Blue).unwrap()
    }

    #[test]
    fn test_player_equality_ignores_kind() {
        let a = Player::human("Alice", Stone::Blue).unwrap();
        let b = Player::automated("Alice", Stone::Blue).unwrap();
        let c = Player::human("Alice", Stone::Red).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Player::human("", Stone::Red), Err(SetupError::EmptyName));
        assert_eq!(Player::automated("   ", Stone::Red), Err(SetupError::EmptyName));
    }

    #[test]
    fn test_random_mover_single_empty_cell() {
        let mut board = Board::new(3);
        for pt in board.empty_cells() {
            if pt != (1, 2) {
                board.place(Stone::Red, pt).unwrap();
            }
        }
        let mut mover = RandomMover::with_seed(7);
        for _ in 0..20 {
            assert_eq!(mover.request_move(&board, &alice()).unwrap(), (1, 2));
        }
    }

    #[test]
    fn test_random_mover_full_board_errors() {
        let mut board = Board::new(1);
        board.place(Stone::Red, (0, 0)).unwrap();
        let mut mover = RandomMover::with_seed(1);
        assert_eq!(mover.choose(&board), None);
        assert!(mover.request_move(&board, &alice()).is_err());
    }

    #[test]
    fn test_random_mover_is_reproducible() {
        let board = Board::default();
        let mut a = RandomMover::with_seed(42);
        let mut b = RandomMover::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.choose(&board), b.choose(&board));
        }
    }

    #[test]
    fn test_human_input_reprompts_on_garbage() {
        let input = Cursor::new("hello\n0 3\n4 5\n");
        let mut output = Vec::new();
        let pt = HumanInput::new(input, &mut output)
            .request_move(&Board::default(), &alice())
            .unwrap();
        assert_eq!(pt, (3, 4));
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Alice (blue) move [col row]: ").count(), 3);
        assert!(text.contains("Could not read 'hello'"));
    }

    #[test]
    fn test_human_input_eof_is_error() {
        let mut source = HumanInput::new(Cursor::new(""), Vec::new());
        assert!(source.request_move(&Board::default(), &alice()).is_err());
    }
}
