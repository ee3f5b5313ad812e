//! Driving a session from start to finish.
//!
//! The loop asks for the active player's move, submits it and reports what
//! happened to a transcript writer. Human seats share one input source (the
//! prompt names whose turn it is); automated seats share the random mover.
//! Rejected moves are reported and the same player is asked again.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::warn;

use crate::coords::str_point;
use crate::error::SetupError;
use crate::player::{MoveSource, Player, PlayerKind, RandomMover};
use crate::session::{GameSession, GameStatus};
use crate::stone::Stone;

/// Play `session` until it ends.
///
/// `delay` is slept before each automated move so a watcher can follow along;
/// it never changes the result.
pub fn play_out<W: Write>(
    session: &mut GameSession,
    human: &mut dyn MoveSource,
    mover: &mut RandomMover,
    delay: Duration,
    out: &mut W,
) -> Result<GameStatus> {
    writeln!(out, "{}", session.headline())?;

    while !session.is_over() {
        let player = session.active_player().clone();
        let pt = match player.kind() {
            PlayerKind::Human => human.request_move(session.board(), &player)?,
            PlayerKind::Automated => {
                let pt = mover.request_move(session.board(), &player)?;
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                pt
            }
        };

        match session.submit_move(&player, pt) {
            Ok(_) => {
                writeln!(out, "{} plays {}", player.name(), str_point(pt))?;
                writeln!(out, "{}", session.board())?;
                writeln!(out, "{}", session.headline())?;
            }
            Err(e) => {
                warn!(player = player.name(), error = %e, "move rejected");
                writeln!(out, "Move rejected: {e}")?;
            }
        }
    }

    Ok(session.status().clone())
}

/// Play a complete game between two automated players on a `size` board.
///
/// Every random choice, including who starts, comes from `seed`.
pub fn random_game(seed: u64, size: usize) -> Result<GameSession, SetupError> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let a = Player::automated("Computer 1", Stone::Blue)?;
    let b = Player::automated("Computer 2", Stone::Red)?;
    let (first, second) = if rng.bool() { (a, b) } else { (b, a) };
    let mut session = GameSession::with_size(size, first, second)?;

    let mut mover = RandomMover::with_seed(rng.u64(..));
    while !session.is_over() {
        // Both seats are automated and the game is running, so a move is always made.
        if session.automated_move(&mut mover).is_err() {
            break;
        }
    }
    Ok(session)
}
