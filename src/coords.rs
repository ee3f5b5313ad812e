//! Translation between user-facing 1-based coordinates and board points.
//!
//! Everything a person types or reads is 1-based (`"1 1"` is the top-left
//! corner). The board itself only ever sees 0-based points.

use crate::board::Point;

/// Parse `"col row"` (1-based, separated by whitespace or a comma) into a
/// 0-based point. Returns `None` for malformed input or a zero coordinate.
///
/// Coordinates past the board edge are accepted here; the board rejects them.
pub fn parse_point(s: &str) -> Option<Point> {
    let mut parts = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let col = parse_index(parts.next()?)?;
    let row = parse_index(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((col, row))
}

/// Parse a pair of already-split 1-based arguments.
pub fn parse_args(col: &str, row: &str) -> Option<Point> {
    Some((parse_index(col)?, parse_index(row)?))
}

fn parse_index(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// Format a 0-based point as 1-based `"col row"`.
pub fn str_point((col, row): Point) -> String {
    format!("{} {}", col + 1, row + 1)
}
