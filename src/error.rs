//! Error types for move submission and game setup.

use derive_more::{Display, Error};

use crate::stone::Stone;

/// Why a move was rejected. The board and session are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates fall outside `[0, N)`. Reported 0-based.
    #[display("cell ({col}, {row}) is outside the board")]
    OutOfBounds { col: usize, row: usize },
    /// The target cell already holds a stone.
    #[display("cell ({col}, {row}) is already occupied")]
    CellOccupied { col: usize, row: usize },
    /// The game has already been won or drawn.
    #[display("the game is already over")]
    GameAlreadyOver,
    /// The submitting player is not the active one.
    #[display("it is not {player}'s turn")]
    NotYourTurn { player: String },
}

/// Invalid player or session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    #[display("player name must not be empty")]
    EmptyName,
    #[display("both players use the {stone} stone")]
    SharedStone { stone: Stone },
    #[display("unknown stone color: {name}")]
    UnknownStone { name: String },
}
