//! The playing grid and its placement rules.
//!
//! Cells are stored row-major in a flat `Vec`. A point is `(col, row)`, both
//! 0-based. Win detection only ever looks at lines through the stone that was
//! just placed, so each placement costs a bounded number of steps no matter
//! how full the board is.

use std::fmt;

use tracing::debug;

use crate::constants::{AXES, N, WIN_LENGTH};
use crate::error::MoveError;
use crate::stone::Stone;

/// A board coordinate as `(col, row)`, 0-based.
pub type Point = (usize, usize);

/// Outcome of a successful placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlacementResult {
    /// The stone was placed and the game goes on.
    StonePlaced,
    /// The stone filled the last empty cell without completing a line.
    BoardFull,
    /// The stone completed a line of `WIN_LENGTH` or more.
    PlayerWin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Stone>>,
    filled: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(N)
    }
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// # Panics
    /// If `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
            filled: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (col, row): Point) -> usize {
        row * self.size + col
    }

    pub fn in_bounds(&self, (col, row): Point) -> bool {
        col < self.size && row < self.size
    }

    /// The stone at `pt`, or `None` if the cell is empty or off the board.
    pub fn get(&self, pt: Point) -> Option<Stone> {
        if !self.in_bounds(pt) {
            return None;
        }
        self.cells[self.idx(pt)]
    }

    /// True if `pt` is on the board and holds a stone. Never panics, so it is
    /// safe to call with unchecked pointer positions.
    pub fn is_occupied(&self, pt: Point) -> bool {
        self.get(pt).is_some()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.filled
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.empty_count());
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[self.idx((col, row))].is_none() {
                    out.push((col, row));
                }
            }
        }
        out
    }

    /// Place `stone` at `pt`.
    ///
    /// On error nothing is changed. A move that both completes a line and fills
    /// the last cell reports `PlayerWin`.
    pub fn place(&mut self, stone: Stone, pt: Point) -> Result<PlacementResult, MoveError> {
        let (col, row) = pt;
        if !self.in_bounds(pt) {
            return Err(MoveError::OutOfBounds { col, row });
        }
        let idx = self.idx(pt);
        if self.cells[idx].is_some() {
            return Err(MoveError::CellOccupied { col, row });
        }
        self.cells[idx] = Some(stone);
        self.filled += 1;

        let result = if self.completes_line(pt) {
            PlacementResult::PlayerWin
        } else if self.is_full() {
            PlacementResult::BoardFull
        } else {
            PlacementResult::StonePlaced
        };
        debug!(%stone, col, row, ?result, "stone placed");
        Ok(result)
    }

    /// Length of the run of same-stone cells through `pt` along `axis`
    /// (one of [`AXES`]). Zero for an empty cell.
    pub fn run_length(&self, pt: Point, axis: (isize, isize)) -> usize {
        let Some(stone) = self.get(pt) else {
            return 0;
        };
        let (dc, dr) = axis;
        1 + self.count_direction(pt, stone, dc, dr) + self.count_direction(pt, stone, -dc, -dr)
    }

    fn completes_line(&self, pt: Point) -> bool {
        AXES.iter().any(|&axis| self.run_length(pt, axis) >= WIN_LENGTH)
    }

    /// Count contiguous `stone` cells walking from `pt` (exclusive) in one direction.
    fn count_direction(&self, pt: Point, stone: Stone, dc: isize, dr: isize) -> usize {
        let mut count = 0;
        let mut cur = pt;
        while let Some(next) = self.step(cur, dc, dr) {
            if self.get(next) != Some(stone) {
                break;
            }
            count += 1;
            cur = next;
        }
        count
    }

    fn step(&self, (col, row): Point, dc: isize, dr: isize) -> Option<Point> {
        let c = col.checked_add_signed(dc)?;
        let r = row.checked_add_signed(dr)?;
        self.in_bounds((c, r)).then_some((c, r))
    }
}

/// Text rendering with 1-based labels along the top and left edge.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 1..=self.size {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>3}", row + 1)?;
            for col in 0..self.size {
                let ch = self.get((col, row)).map_or('.', Stone::glyph);
                write!(f, "{ch:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
