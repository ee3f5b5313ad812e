//! Integration tests for gomoku-rust
//!
//! These exercise the engine only through its public API, the same way a
//! rendering layer would: build a session, submit moves, read back the board
//! and status.

use gomoku_rust::autoplay::random_game;
use gomoku_rust::board::{Board, PlacementResult, Point};
use gomoku_rust::constants::{AXES, N};
use gomoku_rust::error::MoveError;
use gomoku_rust::player::{MoveSource, Player, RandomMover};
use gomoku_rust::session::{GameSession, GameStatus};
use gomoku_rust::stone::Stone;

// =============================================================================
// Helper functions for setting up sessions
// =============================================================================

fn alice() -> Player {
    Player::human("Alice", Stone::Blue).unwrap()
}

fn bob() -> Player {
    Player::human("Bob", Stone::Red).unwrap()
}

/// A standard session where Alice moves first.
fn new_session() -> GameSession {
    GameSession::with_size(N, alice(), bob()).unwrap()
}

/// Play Alice's `line` interleaved with Bob's `filler`, Alice first.
/// Returns the result of every Alice placement.
fn play_line(session: &mut GameSession, line: &[Point], filler: &[Point]) -> Vec<PlacementResult> {
    let mut results = Vec::new();
    for (i, &pt) in line.iter().enumerate() {
        results.push(session.submit_move(&alice(), pt).unwrap());
        if i + 1 < line.len() {
            session.submit_move(&bob(), filler[i]).unwrap();
        }
    }
    results
}

/// Bob's filler moves along the bottom row, out of the way of the tests.
fn bottom_filler() -> Vec<Point> {
    (0..N).map(|col| (col, N - 1)).collect()
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_placement_marks_only_target_cell() {
    let mut board = Board::default();
    board.place(Stone::Red, (3, 3)).unwrap();
    let before = board.clone();

    board.place(Stone::Blue, (9, 4)).unwrap();

    for row in 0..N {
        for col in 0..N {
            if (col, row) == (9, 4) {
                assert_eq!(board.get((col, row)), Some(Stone::Blue));
            } else {
                assert_eq!(board.get((col, row)), before.get((col, row)), "cell {col},{row} changed");
            }
        }
    }
}

#[test]
fn test_corner_then_occupied() {
    let mut session = new_session();
    assert_eq!(session.submit_move(&alice(), (0, 0)), Ok(PlacementResult::StonePlaced));
    assert!(session.board().is_occupied((0, 0)));

    let before = session.board().clone();
    assert_eq!(
        session.submit_move(&bob(), (0, 0)),
        Err(MoveError::CellOccupied { col: 0, row: 0 })
    );
    assert_eq!(session.board(), &before);
    assert_eq!(session.active_player(), &bob());
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut session = new_session();
    assert_eq!(
        session.submit_move(&alice(), (N, 0)),
        Err(MoveError::OutOfBounds { col: N, row: 0 })
    );
    assert_eq!(
        session.submit_move(&alice(), (2, N + 3)),
        Err(MoveError::OutOfBounds { col: 2, row: N + 3 })
    );
    assert_eq!(session.moves_played(), 0);
    assert_eq!(session.active_player(), &alice());
}

#[test]
fn test_wrong_player_rejected() {
    let mut session = new_session();
    assert!(matches!(
        session.submit_move(&bob(), (5, 5)),
        Err(MoveError::NotYourTurn { .. })
    ));
    // A stranger with a stone nobody uses is not a participant either.
    let carol = Player::human("Carol", Stone::Green).unwrap();
    assert!(matches!(
        session.submit_move(&carol, (5, 5)),
        Err(MoveError::NotYourTurn { .. })
    ));
    assert!(!session.board().is_occupied((5, 5)));
}

// =============================================================================
// Turn order
// =============================================================================

#[test]
fn test_active_player_alternates() {
    let mut session = new_session();
    let mut expected = [alice(), bob()].into_iter().cycle();
    for i in 0..20 {
        let mover = expected.next().unwrap();
        assert_eq!(session.active_player(), &mover, "move {i}");
        let pt = (i % N, (i / N) * 3 + 1);
        assert_eq!(session.submit_move(&mover, pt), Ok(PlacementResult::StonePlaced));
    }
    assert_eq!(session.moves_played(), 20);
}

#[test]
fn test_active_player_frozen_after_win() {
    let mut session = new_session();
    play_line(&mut session, &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], &bottom_filler());
    assert_eq!(session.active_player(), &alice());
}

// =============================================================================
// Win detection
// =============================================================================

#[test]
fn test_row_zero_wins_on_fifth_stone() {
    let mut session = new_session();
    let line: Vec<Point> = (0..5).map(|col| (col, 0)).collect();
    let results = play_line(&mut session, &line, &bottom_filler());

    assert_eq!(&results[..4], &[PlacementResult::StonePlaced; 4]);
    assert_eq!(results[4], PlacementResult::PlayerWin);
    assert_eq!(session.status(), &GameStatus::Won { winner: alice() });
    assert_eq!(session.winner(), Some(&alice()));
}

#[test]
fn test_down_right_diagonal_from_center() {
    let mut session = new_session();
    let line = [(7, 7), (8, 8), (9, 9), (10, 10), (11, 11)];
    let results = play_line(&mut session, &line, &bottom_filler());
    assert_eq!(results.last(), Some(&PlacementResult::PlayerWin));
}

#[test]
fn test_every_axis_wins() {
    for &(dc, dr) in &AXES {
        // Start far enough from the edge that five steps along any axis fit.
        let start = (5isize, 6isize);
        let line: Vec<Point> = (0..5)
            .map(|k| ((start.0 + k * dc) as usize, (start.1 + k * dr) as usize))
            .collect();
        let mut session = new_session();
        let results = play_line(&mut session, &line, &bottom_filler());
        assert_eq!(results[4], PlacementResult::PlayerWin, "axis ({dc}, {dr})");
        assert!(results[..4].iter().all(|r| *r == PlacementResult::StonePlaced));
    }
}

#[test]
fn test_middle_stone_completes_line() {
    let mut session = new_session();
    // The gap at (6, 2) is filled last; the run extends both ways.
    let line = [(4, 2), (5, 2), (7, 2), (8, 2), (6, 2)];
    let results = play_line(&mut session, &line, &bottom_filler());
    assert_eq!(results[3], PlacementResult::StonePlaced);
    assert_eq!(results[4], PlacementResult::PlayerWin);
}

#[test]
fn test_overline_wins() {
    let mut board = Board::default();
    for col in [0, 1, 2, 4, 5] {
        assert_eq!(board.place(Stone::White, (col, 3)), Ok(PlacementResult::StonePlaced));
    }
    assert_eq!(board.place(Stone::White, (3, 3)), Ok(PlacementResult::PlayerWin));
    assert_eq!(board.run_length((3, 3), (1, 0)), 6);
}

#[test]
fn test_opponent_stone_breaks_run() {
    let mut board = Board::default();
    for col in 0..4 {
        board.place(Stone::Blue, (col, 0)).unwrap();
    }
    board.place(Stone::Red, (4, 0)).unwrap();
    assert_eq!(board.place(Stone::Blue, (5, 0)), Ok(PlacementResult::StonePlaced));
    assert_eq!(board.run_length((0, 0), (1, 0)), 4);
}

#[test]
fn test_four_is_not_enough() {
    let mut board = Board::default();
    for row in 10..14 {
        assert_eq!(board.place(Stone::Green, (14, row)), Ok(PlacementResult::StonePlaced));
    }
    assert_eq!(board.run_length((14, 12), (0, 1)), 4);
}

// =============================================================================
// Draws and terminal states
// =============================================================================

/// Stone for a full board with no five in a row anywhere.
///
/// Columns are painted in pairs (AABBAABB...) and each row shifts the pattern
/// by one, which caps every horizontal, vertical and diagonal run at 2.
fn draw_pattern(col: usize, row: usize) -> Stone {
    if (col / 2 + row) % 2 == 0 {
        Stone::Blue
    } else {
        Stone::Red
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut board = Board::default();
    let mut cells: Vec<Point> = Vec::new();
    for row in 0..N {
        for col in 0..N {
            cells.push((col, row));
        }
    }
    let last = cells.pop().unwrap();
    for (col, row) in cells {
        assert_eq!(
            board.place(draw_pattern(col, row), (col, row)),
            Ok(PlacementResult::StonePlaced),
            "unexpected result at {col},{row}"
        );
    }
    assert_eq!(board.place(draw_pattern(last.0, last.1), last), Ok(PlacementResult::BoardFull));
    assert!(board.is_full());
}

#[test]
fn test_win_beats_full_board() {
    // 5x5: fill everything except (4, 0) so that the last stone completes row 0.
    let mut board = Board::new(5);
    for row in 0..5 {
        for col in 0..5 {
            if (col, row) == (4, 0) {
                continue;
            }
            let stone = if row == 0 { Stone::Blue } else { draw_pattern(col, row + 1) };
            board.place(stone, (col, row)).unwrap();
        }
    }
    assert_eq!(board.empty_count(), 1);
    assert_eq!(board.place(Stone::Blue, (4, 0)), Ok(PlacementResult::PlayerWin));
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut session = new_session();
    play_line(&mut session, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], &bottom_filler());
    assert!(session.is_over());

    let before = session.board().clone();
    assert_eq!(session.submit_move(&bob(), (9, 9)), Err(MoveError::GameAlreadyOver));
    assert_eq!(session.submit_move(&alice(), (9, 9)), Err(MoveError::GameAlreadyOver));
    assert_eq!(session.board(), &before);
    assert_eq!(session.headline(), "Game Over: Alice wins!");
}

#[test]
fn test_draw_session_rejects_further_moves() {
    let mut session = GameSession::with_size(2, alice(), bob()).unwrap();
    for pt in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        session.play_active(pt).unwrap();
    }
    assert_eq!(session.status(), &GameStatus::Draw);
    assert_eq!(session.play_active((0, 0)), Err(MoveError::GameAlreadyOver));
}

// =============================================================================
// Automated player
// =============================================================================

#[test]
fn test_random_mover_only_picks_empty_cells() {
    let mut board = Board::default();
    let mut mover = RandomMover::with_seed(2024);
    let me = Player::automated("Bot", Stone::White).unwrap();
    for _ in 0..(N * N) {
        let pt = mover.request_move(&board, &me).unwrap();
        assert!(!board.is_occupied(pt));
        // Color by the draw pattern so no line can end the fill early.
        let stone = draw_pattern(pt.0, pt.1);
        board.place(stone, pt).unwrap();
    }
    assert!(board.is_full());
    assert!(mover.request_move(&board, &me).is_err());
}

#[test]
fn test_random_mover_single_empty_cell() {
    let mut board = Board::default();
    for (col, row) in board.empty_cells() {
        if (col, row) != (13, 2) {
            board.place(draw_pattern(col, row), (col, row)).unwrap();
        }
    }
    let mut mover = RandomMover::with_seed(99);
    for _ in 0..50 {
        assert_eq!(mover.choose(&board), Some((13, 2)));
    }
}

#[test]
fn test_random_games_always_end() {
    for seed in 100..130 {
        let session = random_game(seed, N).unwrap();
        match session.status() {
            GameStatus::Won { winner } => {
                assert!(session.players().contains(winner));
            }
            GameStatus::Draw => assert!(session.board().is_full()),
            GameStatus::InProgress => panic!("seed {seed} left the game running"),
        }
        assert_eq!(session.board().empty_count(), N * N - session.moves_played());
    }
}

#[test]
fn test_small_random_games_draw() {
    // Five in a row never fits on a 4x4 board, so every game is a draw.
    for seed in 0..10 {
        let session = random_game(seed, 4).unwrap();
        assert_eq!(session.status(), &GameStatus::Draw);
        assert_eq!(session.moves_played(), 16);
    }
}
