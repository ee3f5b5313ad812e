//! gomoku-rust: a five-in-a-row game engine.
//!
//! Two players take turns placing stones on a 15x15 grid; the first to line
//! up five (or more) horizontally, vertically or diagonally wins, and a full
//! board with no such line is a draw. The engine is a synchronous state
//! machine with no display of its own; the text front-ends in [`autoplay`]
//! and [`protocol`] sit on top of the same public API a GUI would use.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, win length and presentation defaults
//! - [`stone`] - Stone colors
//! - [`board`] - The grid, placement and win detection
//! - [`player`] - Player identity and move sources (human input, random)
//! - [`session`] - The turn-taking state machine
//! - [`error`] - Move rejections and setup errors
//! - [`coords`] - 1-based user coordinates to 0-based board points
//! - [`autoplay`] - Running a game to the end
//! - [`protocol`] - Text command protocol over stdin/stdout
//!
//! ## Example
//!
//! ```
//! use gomoku_rust::board::PlacementResult;
//! use gomoku_rust::player::Player;
//! use gomoku_rust::session::GameSession;
//! use gomoku_rust::stone::Stone;
//!
//! let ann = Player::human("Ann", Stone::Blue).unwrap();
//! let bob = Player::human("Bob", Stone::Red).unwrap();
//! let mut game = GameSession::with_size(15, ann.clone(), bob.clone()).unwrap();
//!
//! for col in 0..4 {
//!     game.submit_move(&ann, (col, 0)).unwrap();
//!     game.submit_move(&bob, (col, 1)).unwrap();
//! }
//! assert_eq!(game.submit_move(&ann, (4, 0)), Ok(PlacementResult::PlayerWin));
//! assert_eq!(game.winner(), Some(&ann));
//! ```

pub mod autoplay;
pub mod board;
pub mod constants;
pub mod coords;
pub mod error;
pub mod player;
pub mod protocol;
pub mod session;
pub mod stone;
