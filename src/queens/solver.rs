#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The backtracking search engines for the N-Queens problem.
//!
//! Two engines are provided behind the [`Solver`] trait:
//!
//! 1. [`Recursive`] — true recursion over the line index, with an explicit
//!    undo step after each recursive return.
//! 2. [`Iterative`] — an explicit stack of `(line, next-candidate)` frames,
//!    for a fully non-recursive variant.
//!
//! Both visit candidates in ascending order on every line, which fixes the
//! deterministic enumeration order of the returned [`SolutionSet`]. Neither
//! engine memoises or prunes beyond the three per-pair safety checks in
//! [`Board::is_safe`]; correctness relies solely on exhaustive backtracking.
//!
//! The search is total for every `n >= 0`: `n = 0` yields the single trivial
//! empty solution, `n = 1` yields one solution, and `n` of 2 or 3 yield none.
//! Callers are responsible for bounding `n`; there is no internal timeout.

use crate::queens::board::{Board, SolutionSet};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The axis along which the search assigns one queen per line.
///
/// The two orientations run the identical algorithm; the choice is a pure
/// relabeling of the board axes. Row-wise, slot `i` of a solution holds the
/// column of the queen in row `i`; column-wise it holds the row of the queen
/// in column `i`. The solution set of one orientation is the element-wise
/// transpose of the other's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Assign a column per row, descending over rows.
    #[default]
    RowWise,
    /// Assign a row per column, descending over columns.
    ColumnWise,
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowWise => write!(f, "row-wise"),
            Self::ColumnWise => write!(f, "column-wise"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row" | "rows" | "row-wise" => Ok(Self::RowWise),
            "col" | "column" | "columns" | "column-wise" => Ok(Self::ColumnWise),
            other => Err(format!("unknown orientation: {other}")),
        }
    }
}

/// Counters describing one solve call. Reset at the start of every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Candidate placements tested against the safety rule.
    pub candidates: usize,
    /// Placements that passed the safety rule and were descended into.
    pub placements: usize,
    /// Undo steps taken after a descent returned.
    pub backtracks: usize,
    /// Complete solutions captured.
    pub solutions: usize,
}

/// A backtracking engine that enumerates every solution for one board size.
///
/// A solver owns its working board exclusively; `solve` mutates it in place
/// during the search and restores every slot to the sentinel before
/// returning, so repeated calls yield element-wise equal solution sets.
pub trait Solver {
    /// Creates an engine for an `n x n` board in the given orientation.
    fn new(n: usize, orientation: Orientation) -> Self;

    /// Runs the exhaustive search and returns all solutions in depth-first,
    /// ascending-candidate order.
    fn solve(&mut self) -> SolutionSet;

    /// The orientation this engine labels its solutions with.
    fn orientation(&self) -> Orientation;

    /// The board size `n`.
    fn board_size(&self) -> usize;

    /// Counters from the most recent `solve` call.
    fn stats(&self) -> SearchStats;
}

/// Enumerates all N-Queens solutions for an `n x n` board.
///
/// Convenience entry point over the [`Recursive`] engine in the default
/// row-wise orientation.
#[must_use]
pub fn solve(n: usize) -> SolutionSet {
    Recursive::new(n, Orientation::RowWise).solve()
}

/// The recursive backtracking engine.
#[derive(Debug, Clone)]
pub struct Recursive {
    /// The working board, mutated in place during the search.
    pub board: Board,
    /// The axis labeling for captured solutions.
    pub orientation: Orientation,
    stats: SearchStats,
}

impl Recursive {
    /// Descends one line: tries every candidate in ascending order, placing
    /// the safe ones and recursing, and undoes each placement on return
    /// regardless of whether the subtree produced solutions. The undo keeps
    /// sibling candidates evaluated against a clean prefix.
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    fn descend(&mut self, line: usize, solutions: &mut SolutionSet) {
        if line == self.board.len() {
            solutions.push(self.board.snapshot());
            return;
        }

        for candidate in 0..self.board.len() as i32 {
            self.stats.candidates += 1;

            if self.board.is_safe(line, candidate) {
                self.board.place(line, candidate);
                self.stats.placements += 1;

                self.descend(line + 1, solutions);

                self.board.unplace(line);
                self.stats.backtracks += 1;
            }
        }
    }
}

impl Solver for Recursive {
    fn new(n: usize, orientation: Orientation) -> Self {
        Self {
            board: Board::new(n),
            orientation,
            stats: SearchStats::default(),
        }
    }

    fn solve(&mut self) -> SolutionSet {
        self.stats = SearchStats::default();

        let mut solutions = SolutionSet::new();
        self.descend(0, &mut solutions);

        self.stats.solutions = solutions.len();
        solutions
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn board_size(&self) -> usize {
        self.board.len()
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// The iterative backtracking engine.
///
/// Replaces the call stack with a vector of per-line frames; each frame holds
/// the next candidate to try on its line. Visits the exact same search tree
/// as [`Recursive`], in the same order.
#[derive(Debug, Clone)]
pub struct Iterative {
    /// The working board, mutated in place during the search.
    pub board: Board,
    /// The axis labeling for captured solutions.
    pub orientation: Orientation,
    stats: SearchStats,
}

impl Solver for Iterative {
    fn new(n: usize, orientation: Orientation) -> Self {
        Self {
            board: Board::new(n),
            orientation,
            stats: SearchStats::default(),
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn solve(&mut self) -> SolutionSet {
        self.stats = SearchStats::default();

        let n = self.board.len();
        let mut solutions = SolutionSet::new();

        if n == 0 {
            // The empty assignment is the one trivial solution.
            solutions.push(self.board.snapshot());
            self.stats.solutions = 1;
            return solutions;
        }

        // frames[line] is the next candidate to try on that line.
        let mut frames: Vec<i32> = Vec::with_capacity(n);
        frames.push(0);

        while let Some(&candidate) = frames.last() {
            let line = frames.len() - 1;

            // Clear whatever the previous attempt on this line recorded, so
            // every candidate is tested against a clean prefix.
            self.board.unplace(line);

            if candidate as usize >= n {
                // Candidates exhausted on this line; pop back to the parent.
                frames.pop();
                self.stats.backtracks += 1;
                continue;
            }

            frames[line] = candidate + 1;
            self.stats.candidates += 1;

            if self.board.is_safe(line, candidate) {
                self.board.place(line, candidate);
                self.stats.placements += 1;

                if line + 1 == n {
                    // Complete assignment; the slot is cleared again when this
                    // frame resumes with its next candidate.
                    solutions.push(self.board.snapshot());
                } else {
                    frames.push(0);
                }
            }
        }

        self.stats.solutions = solutions.len();
        solutions
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn board_size(&self) -> usize {
        self.board.len()
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queens::board::Solution;
    use itertools::Itertools;

    /// The closed sequence of N-Queens solution counts for n = 0..=8.
    const KNOWN_COUNTS: [usize; 9] = [1, 1, 0, 0, 2, 10, 4, 40, 92];

    #[test]
    fn test_solve_matches_known_counts() {
        for (n, &expected) in KNOWN_COUNTS.iter().enumerate() {
            assert_eq!(solve(n).len(), expected, "count mismatch for n={n}");
        }
    }

    #[test]
    fn test_iterative_matches_known_counts() {
        for (n, &expected) in KNOWN_COUNTS.iter().enumerate() {
            let mut solver = Iterative::new(n, Orientation::RowWise);
            assert_eq!(solver.solve().len(), expected, "count mismatch for n={n}");
        }
    }

    #[test]
    fn test_zero_board_has_one_empty_solution() {
        let solutions = solve(0);
        assert_eq!(solutions.len(), 1);
        assert!(solutions[0].is_empty());
    }

    #[test]
    fn test_four_queens_enumeration_order() {
        let solutions = solve(4);
        assert_eq!(solutions[0].slots(), &[1, 3, 0, 2]);
        assert_eq!(solutions[1].slots(), &[2, 0, 3, 1]);
    }

    #[test]
    fn test_every_solution_satisfies_the_non_attack_invariant() {
        for n in 0..=8 {
            for solution in &solve(n) {
                assert!(solution.is_valid(), "invalid solution for n={n}: {solution}");
            }
        }
    }

    #[test]
    fn test_board_is_restored_after_solve() {
        let mut solver = Recursive::new(6, Orientation::RowWise);
        solver.solve();
        assert!(solver.board.is_fully_unassigned());

        let mut solver = Iterative::new(6, Orientation::RowWise);
        solver.solve();
        assert!(solver.board.is_fully_unassigned());
    }

    #[test]
    fn test_solve_is_idempotent() {
        let mut solver = Recursive::new(6, Orientation::RowWise);
        let first = solver.solve();
        let second = solver.solve();
        assert_eq!(first, second);
        assert_eq!(solver.stats().solutions, 4);
    }

    #[test]
    fn test_engines_agree_exactly() {
        for n in 0..=7 {
            let recursive = Recursive::new(n, Orientation::RowWise).solve();
            let iterative = Iterative::new(n, Orientation::RowWise).solve();
            assert_eq!(recursive, iterative, "engine disagreement for n={n}");
        }
    }

    #[test]
    fn test_engines_count_the_same_search_tree() {
        let mut recursive = Recursive::new(6, Orientation::RowWise);
        let mut iterative = Iterative::new(6, Orientation::RowWise);
        recursive.solve();
        iterative.solve();
        assert_eq!(
            recursive.stats().candidates,
            iterative.stats().candidates
        );
        assert_eq!(
            recursive.stats().placements,
            iterative.stats().placements
        );
    }

    #[test]
    fn test_orientations_are_transposes_of_each_other() {
        // The same enumeration runs under either labeling, so the column-wise
        // set must equal the row-wise set transposed element-for-element,
        // as sets.
        let row_wise = Recursive::new(6, Orientation::RowWise).solve();
        let column_wise = Recursive::new(6, Orientation::ColumnWise).solve();

        let transposed: Vec<Solution> = row_wise
            .iter()
            .map(Solution::transposed)
            .sorted()
            .collect();
        let column_sorted: Vec<Solution> =
            column_wise.iter().cloned().sorted().collect();

        assert_eq!(transposed, column_sorted);
        for solution in &transposed {
            assert!(solution.is_valid());
        }
    }

    #[test]
    fn test_solutions_survive_further_searching() {
        // Snapshots must be defensive copies: the working board is reused and
        // mutated after each capture.
        let solutions = solve(5);
        let again = solve(5);
        assert_eq!(solutions, again);
        assert!(solutions.iter().all_unique());
    }

    #[test]
    fn test_orientation_parsing() {
        assert_eq!("row".parse::<Orientation>(), Ok(Orientation::RowWise));
        assert_eq!("Column".parse::<Orientation>(), Ok(Orientation::ColumnWise));
        assert_eq!("col".parse::<Orientation>(), Ok(Orientation::ColumnWise));
        assert!("diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_stats_for_one_queen() {
        let mut solver = Recursive::new(1, Orientation::RowWise);
        let solutions = solver.solve();
        assert_eq!(solutions.len(), 1);

        let stats = solver.stats();
        assert_eq!(stats.candidates, 1);
        assert_eq!(stats.placements, 1);
        assert_eq!(stats.backtracks, 1);
        assert_eq!(stats.solutions, 1);
    }
}
