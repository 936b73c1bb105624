#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Independent validation of a returned solution set.
//!
//! The search is exhaustive by construction, so verification is a cross-check
//! rather than part of the contract: every captured solution must satisfy the
//! pairwise non-attack invariant for the requested board size, and no
//! solution may appear twice.

use crate::queens::board::{Solution, SolutionSet};
use rustc_hash::FxHashSet;

/// The ways a solution set can fail verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A solution was captured for a different board size than requested.
    WrongSize {
        /// Index of the offending solution in enumeration order.
        index: usize,
        /// The size it actually has.
        len: usize,
    },
    /// A solution contains a pair of mutually attacking queens or an
    /// out-of-range slot.
    Attacking {
        /// Index of the offending solution in enumeration order.
        index: usize,
    },
    /// The same placement appears more than once in the set.
    Duplicate {
        /// Index of the second occurrence.
        index: usize,
    },
}

/// Checks every solution in `set` against the non-attack invariant for an
/// `n x n` board and ensures the set is duplicate-free.
///
/// # Errors
///
/// Returns the first [`Violation`] found, in enumeration order.
pub fn verify(n: usize, set: &SolutionSet) -> Result<(), Violation> {
    let mut seen: FxHashSet<&Solution> = FxHashSet::default();

    for (index, solution) in set.iter().enumerate() {
        if solution.len() != n {
            return Err(Violation::WrongSize {
                index,
                len: solution.len(),
            });
        }

        if !solution.is_valid() {
            return Err(Violation::Attacking { index });
        }

        if !seen.insert(solution) {
            return Err(Violation::Duplicate { index });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queens::solver::solve;

    #[test]
    fn test_solver_output_verifies() {
        for n in [0, 1, 4, 5, 6, 8] {
            assert_eq!(verify(n, &solve(n)), Ok(()));
        }
    }

    #[test]
    fn test_wrong_size_is_reported() {
        let mut set = SolutionSet::new();
        set.push(Solution::from(vec![1, 3, 0, 2]));
        assert_eq!(
            verify(5, &set),
            Err(Violation::WrongSize { index: 0, len: 4 })
        );
    }

    #[test]
    fn test_attacking_pair_is_reported() {
        let mut set = SolutionSet::new();
        set.push(Solution::from(vec![1, 3, 0, 2]));
        set.push(Solution::from(vec![0, 1, 2, 3]));
        assert_eq!(verify(4, &set), Err(Violation::Attacking { index: 1 }));
    }

    #[test]
    fn test_duplicate_is_reported() {
        let mut set = SolutionSet::new();
        set.push(Solution::from(vec![1, 3, 0, 2]));
        set.push(Solution::from(vec![1, 3, 0, 2]));
        assert_eq!(verify(4, &set), Err(Violation::Duplicate { index: 1 }));
    }
}
