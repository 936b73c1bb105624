#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Board state for the backtracking search, and the immutable solutions
//! captured from it.
//!
//! A board is a sequence of `n` slots, one per line (a row in the row-wise
//! orientation, a column in the column-wise one). Slot `i` holds the candidate
//! index of the queen placed on line `i`, or [`UNPLACED`] while the search has
//! not yet assigned that line. The invariant maintained by the search is that
//! all assigned slots denote mutually non-attacking positions.
//!
//! The board is created once per solve call, mutated in place on descent and
//! restored on backtrack; only [`Solution`] snapshots outlive the call.

use itertools::Itertools;
use smallvec::{smallvec, SmallVec};
use std::fmt::{self, Display, Formatter};
use std::ops::Index;

/// Sentinel slot value denoting "no queen assigned yet".
pub const UNPLACED: i32 = -1;

/// Inline storage for one slot per line. Boards up to 16x16 avoid a heap
/// allocation; larger boards spill transparently.
type Slots = SmallVec<[i32; 16]>;

/// The mutable working board owned by an in-flight solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: Slots,
}

impl Board {
    /// Creates a board of `n` lines with every slot sentinel-initialised.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            slots: smallvec![UNPLACED; n],
        }
    }

    /// The number of lines (and candidates per line) on this board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` for the degenerate 0x0 board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot value currently recorded for `line`.
    ///
    /// # Panics
    ///
    /// Panics if `line` is out of bounds.
    #[must_use]
    pub fn slot(&self, line: usize) -> i32 {
        self.slots[line]
    }

    /// Tests whether a queen at (`line`, `candidate`) attacks any queen already
    /// placed on lines `0..line`.
    ///
    /// A prior queen on line `i` with slot value `placed` conflicts when it
    /// shares the candidate axis or either diagonal:
    ///
    /// 1. `placed == candidate`
    /// 2. `placed - i == candidate - line`
    /// 3. `placed + i == candidate + line`
    ///
    /// No other pruning is performed; correctness of the search relies solely
    /// on exhaustive backtracking over these three checks.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn is_safe(&self, line: usize, candidate: i32) -> bool {
        self.slots[..line].iter().enumerate().all(|(i, &placed)| {
            let (i, line) = (i as i32, line as i32);
            placed != candidate
                && placed - i != candidate - line
                && placed + i != candidate + line
        })
    }

    /// Records the queen for `line` at `candidate`.
    ///
    /// # Panics
    ///
    /// Panics if `line` is out of bounds.
    pub fn place(&mut self, line: usize, candidate: i32) {
        self.slots[line] = candidate;
    }

    /// Restores `line` to the sentinel state (the backtrack step).
    ///
    /// # Panics
    ///
    /// Panics if `line` is out of bounds.
    pub fn unplace(&mut self, line: usize) {
        self.slots[line] = UNPLACED;
    }

    /// `true` once every slot has been restored to the sentinel. Holds after
    /// every completed solve call.
    #[must_use]
    pub fn is_fully_unassigned(&self) -> bool {
        self.slots.iter().all(|&slot| slot == UNPLACED)
    }

    /// `true` when every line carries an assignment.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|&slot| slot != UNPLACED)
    }

    /// Captures the current assignment as an independent [`Solution`].
    ///
    /// The copy is mandatory: the board is mutated again immediately after a
    /// solution is recognised, so an aliased snapshot would be corrupted by
    /// the ensuing backtracking.
    #[must_use]
    pub fn snapshot(&self) -> Solution {
        Solution {
            slots: self.slots.to_vec(),
        }
    }
}

/// An immutable, fully assigned board satisfying the non-attack invariant for
/// all pairs of queens. Slot `i` holds the candidate index of the queen on
/// line `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Solution {
    slots: Vec<i32>,
}

impl Solution {
    /// The per-line slot values.
    #[must_use]
    pub fn slots(&self) -> &[i32] {
        &self.slots
    }

    /// The board size this solution was captured from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` for the single trivial solution of the 0x0 board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Checks the non-attack invariant over every pair of slots: no shared
    /// candidate value and no shared diagonal.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn is_valid(&self) -> bool {
        let n = self.slots.len() as i32;
        let in_range = self.slots.iter().all(|&slot| (0..n).contains(&slot));

        in_range
            && self.slots.iter().enumerate().all(|(i, &a)| {
                self.slots.iter().enumerate().skip(i + 1).all(|(j, &b)| {
                    a != b && (a - b).abs() != (j - i) as i32
                })
            })
    }

    /// Relabels the solution into the opposite orientation.
    ///
    /// A valid solution is a permutation of `0..n`, so the transpose is its
    /// inverse: if line `i` holds candidate `c`, the transposed solution
    /// assigns candidate `i` to line `c`. Transposing a valid row-wise
    /// solution yields a valid column-wise one and vice versa.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn transposed(&self) -> Self {
        let mut slots = vec![UNPLACED; self.slots.len()];
        for (line, &candidate) in self.slots.iter().enumerate() {
            slots[candidate as usize] = line as i32;
        }
        Self { slots }
    }
}

impl From<Vec<i32>> for Solution {
    fn from(slots: Vec<i32>) -> Self {
        Self { slots }
    }
}

impl Index<usize> for Solution {
    type Output = i32;

    fn index(&self, line: usize) -> &Self::Output {
        &self.slots[line]
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.slots.iter().join(", "))
    }
}

/// The ordered sequence of solutions produced by one solve call.
///
/// Order reflects the search's depth-first, ascending-candidate traversal of
/// line choices; it is not sorted by any solution value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolutionSet {
    solutions: Vec<Solution>,
}

impl SolutionSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solutions: Vec::new(),
        }
    }

    /// Appends a captured solution, preserving enumeration order.
    pub fn push(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    /// The number of solutions found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// `true` when the search found no solution (n = 2 and n = 3 are the
    /// only such board sizes with a non-empty board).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Iterates the solutions in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    /// The solutions as a slice, in enumeration order.
    #[must_use]
    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }
}

impl Index<usize> for SolutionSet {
    type Output = Solution;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.solutions[idx]
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

impl FromIterator<Solution> for SolutionSet {
    fn from_iter<I: IntoIterator<Item = Solution>>(iter: I) -> Self {
        Self {
            solutions: iter.into_iter().collect(),
        }
    }
}

impl Display for SolutionSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.solutions.iter().join("\n"))
    }
}
