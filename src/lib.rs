#![deny(missing_docs)]
//! This crate provides backtracking search for the N-Queens constraint-satisfaction
//! problem, together with classic binary tree construction and traversal routines.

/// The `queens` module implements the N-Queens solver: board state, the backtracking
/// search engines, solution verification and console rendering.
pub mod queens;

/// The `tree` module implements binary tree construction from a flattened array with
/// sentinel "missing child" markers, and depth-first / breadth-first traversals.
pub mod tree;
