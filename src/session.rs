//! The turn-taking state machine.
//!
//! A session owns the board and both players. Every move, human or automated,
//! goes through [`GameSession::submit_move`], which checks status and turn
//! before handing the placement to the board.

use tracing::{debug, info};

use crate::board::{Board, PlacementResult, Point};
use crate::constants::N;
use crate::error::{MoveError, SetupError};
use crate::player::{Player, RandomMover};

/// Where a game stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The board filled up without anyone completing a line.
    Draw,
    /// `winner` completed a line with their last move.
    Won { winner: Player },
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

pub struct GameSession {
    board: Board,
    players: [Player; 2],
    active: usize,
    status: GameStatus,
    moves: usize,
}

impl GameSession {
    /// Start a game on a standard board with a random first player.
    pub fn new(a: Player, b: Player) -> Result<Self, SetupError> {
        Self::with_rng(a, b, &mut fastrand::Rng::new())
    }

    /// Start a game whose first player is drawn from `rng`.
    pub fn with_rng(a: Player, b: Player, rng: &mut fastrand::Rng) -> Result<Self, SetupError> {
        let (first, second) = if rng.bool() { (a, b) } else { (b, a) };
        Self::with_size(N, first, second)
    }

    /// Start a game on a `size` x `size` board where `first` moves first.
    pub fn with_size(size: usize, first: Player, second: Player) -> Result<Self, SetupError> {
        if first.stone() == second.stone() {
            return Err(SetupError::SharedStone {
                stone: first.stone(),
            });
        }
        info!(first = first.name(), second = second.name(), size, "new session");
        Ok(Self {
            board: Board::new(size),
            players: [first, second],
            active: 0,
            status: GameStatus::InProgress,
            moves: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, the one who moved first at index 0.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose turn it is. Frozen once the game is over.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn winner(&self) -> Option<&Player> {
        match &self.status {
            GameStatus::Won { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of accepted placements so far.
    pub fn moves_played(&self) -> usize {
        self.moves
    }

    /// Submit `player`'s move at `pt`.
    ///
    /// Rejections leave the session exactly as it was.
    pub fn submit_move(&mut self, player: &Player, pt: Point) -> Result<PlacementResult, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if player != self.active_player() {
            return Err(MoveError::NotYourTurn {
                player: player.name().to_string(),
            });
        }

        let result = self.board.place(player.stone(), pt)?;
        self.moves += 1;
        match result {
            PlacementResult::StonePlaced => {
                self.active = 1 - self.active;
                debug!(next = self.active_player().name(), "turn passes");
            }
            PlacementResult::BoardFull => {
                self.status = GameStatus::Draw;
                info!(moves = self.moves, "board full, game drawn");
            }
            PlacementResult::PlayerWin => {
                self.status = GameStatus::Won {
                    winner: player.clone(),
                };
                info!(winner = player.name(), moves = self.moves, "game won");
            }
        }
        Ok(result)
    }

    /// Submit a move on behalf of whoever is active.
    pub fn play_active(&mut self, pt: Point) -> Result<PlacementResult, MoveError> {
        let player = self.active_player().clone();
        self.submit_move(&player, pt)
    }

    /// Let `mover` pick and play for the active player if that player is
    /// automated. Returns the point played, or `None` when a human is to move.
    pub fn automated_move(&mut self, mover: &mut RandomMover) -> Result<Option<Point>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if !self.active_player().is_automated() {
            return Ok(None);
        }
        let pt = mover.choose(&self.board).ok_or(MoveError::GameAlreadyOver)?;
        self.play_active(pt)?;
        Ok(Some(pt))
    }

    /// One-line summary of the game for a status bar.
    pub fn headline(&self) -> String {
        match &self.status {
            GameStatus::InProgress if self.moves == 0 => {
                format!("{} goes first!", self.active_player().name())
            }
            GameStatus::InProgress => format!("It's {}'s turn", self.active_player().name()),
            GameStatus::Draw => "Game Over: Board is full".to_string(),
            GameStatus::Won { winner } => format!("Game Over: {} wins!", winner.name()),
        }
    }
}
