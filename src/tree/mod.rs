#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Binary tree construction and traversal demonstrations.

/// Tree construction from a flattened array with sentinel markers, plus
/// preorder (recursive and iterative) and breadth-first traversals.
pub mod binary;
