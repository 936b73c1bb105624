#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Console rendering of a captured solution.
//!
//! Renders the `n x n` grid row by row, columns left to right, rows top to
//! bottom, marking the queen cells with `Q` and everything else with `.`.
//! Only the grid topology is load-bearing; styling stays out of the core.

use crate::queens::board::Solution;
use crate::queens::solver::Orientation;
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};

/// One cell of a rendered board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// A queen occupies this cell.
    Queen,
    /// The cell is empty.
    Empty,
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queen => write!(f, "Q"),
            Self::Empty => write!(f, "."),
        }
    }
}

/// A display adapter pairing a [`Solution`] with the [`Orientation`] it was
/// produced under, so the slot encoding maps to the right axis.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    solution: &'a Solution,
    orientation: Orientation,
}

impl<'a> Grid<'a> {
    /// Creates a grid view over `solution`.
    #[must_use]
    pub const fn new(solution: &'a Solution, orientation: Orientation) -> Self {
        Self {
            solution,
            orientation,
        }
    }

    /// The cell at (`row`, `col`), rows top to bottom, columns left to right.
    ///
    /// Row-wise, slot `row` names the queen's column; column-wise, slot `col`
    /// names the queen's row.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        let occupied = match self.orientation {
            Orientation::RowWise => self.solution[row] == col as i32,
            Orientation::ColumnWise => self.solution[col] == row as i32,
        };

        if occupied { Cell::Queen } else { Cell::Empty }
    }
}

impl Display for Grid<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = self.solution.len();
        for row in 0..n {
            let line = (0..n).map(|col| self.cell(row, col)).join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
