//! Board geometry and game parameters.
//!
//! Everything here is fixed at compile time. Runtime knobs (seed, pacing delay,
//! player setup) live on the command line instead.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length (NxN).
pub const N: usize = 15;

/// Number of same-stone cells in a row needed to win. Longer runs also win.
pub const WIN_LENGTH: usize = 5;

/// The four line axes checked for a win, as (dcol, drow) steps.
/// Order: horizontal, vertical, diagonal down-right, diagonal up-right.
pub const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

// =============================================================================
// Presentation
// =============================================================================

/// Pause before an automated move is applied in the interactive front-end.
pub const DEFAULT_THINK_DELAY_MS: u64 = 1500;

/// Display name used for a human player when none is given.
pub const DEFAULT_HUMAN_NAME: &str = "HumanPlayer";

/// Display name used for an automated player when none is given.
pub const DEFAULT_COMPUTER_NAME: &str = "ComputerPlayer";
