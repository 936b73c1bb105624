#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Backtracking search for the N-Queens problem.
//!
//! The solver enumerates every placement of `n` mutually non-attacking queens
//! on an `n x n` board. Solutions are produced in deterministic depth-first,
//! ascending-candidate order.

/// Mutable board state and immutable captured solutions.
pub mod board;

/// Console rendering of solutions as an `n x n` grid.
pub mod render;

/// The search engines (recursive and iterative backtracking).
pub mod solver;

/// Independent validation of a returned solution set.
pub mod verify;
