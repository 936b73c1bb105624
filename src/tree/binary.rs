#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A binary tree built from a flattened value array with sentinel "missing
//! child" markers, and the textbook traversals over it.
//!
//! Construction consumes the array depth-first: each entry is either a node
//! value or `None`, and a `None` terminates the current subtree. The example
//! array [`EXAMPLE`] describes the tree
//!
//! ```text
//!         1
//!        / \
//!       2   3
//!      / \ / \
//!     4  5 6  7
//! ```
//!
//! Traversals return the visit order rather than printing, leaving the
//! presentation to the caller.

use itertools::Itertools;
use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

/// The flattened form of the seven-node example tree used by the CLI demo.
pub const EXAMPLE: [Option<i32>; 15] = [
    Some(1),
    Some(2),
    Some(4),
    None,
    None,
    Some(5),
    None,
    None,
    Some(3),
    Some(6),
    None,
    None,
    Some(7),
    None,
    None,
];

/// A single tree node with owned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// The value stored at this node.
    pub value: T,
    /// Left child, if any.
    pub left: Option<Box<Node<T>>>,
    /// Right child, if any.
    pub right: Option<Box<Node<T>>>,
}

/// A binary tree. The tree may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

/// Errors arising from malformed flattened input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The flattened array ran out before every opened subtree was closed.
    Truncated {
        /// Index at which the next entry was expected.
        at: usize,
    },
    /// A token in the textual form was neither an integer nor a missing-child
    /// marker.
    InvalidToken {
        /// The offending token.
        token: String,
        /// Zero-based position of the token in the input.
        position: usize,
    },
}

impl Display for TreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { at } => {
                write!(f, "flattened input exhausted at index {at} before the tree was complete")
            }
            Self::InvalidToken { token, position } => {
                write!(f, "invalid token '{token}' at position {position}")
            }
        }
    }
}

impl std::error::Error for TreeError {}

impl<T: Clone> Tree<T> {
    /// Builds a tree from its flattened depth-first form, where `None` marks
    /// a missing child.
    ///
    /// Entries beyond the ones needed to close the root subtree are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Truncated`] if the array ends while a subtree is
    /// still open.
    pub fn from_flattened(values: &[Option<T>]) -> Result<Self, TreeError> {
        let mut cursor = 0;
        let root = build(values, &mut cursor)?;
        Ok(Self { root })
    }
}

fn build<T: Clone>(
    values: &[Option<T>],
    cursor: &mut usize,
) -> Result<Option<Box<Node<T>>>, TreeError> {
    let Some(entry) = values.get(*cursor) else {
        return Err(TreeError::Truncated { at: *cursor });
    };
    *cursor += 1;

    let Some(value) = entry.clone() else {
        return Ok(None);
    };

    let mut node = Box::new(Node {
        value,
        left: None,
        right: None,
    });
    node.left = build(values, cursor)?;
    node.right = build(values, cursor)?;

    Ok(Some(node))
}

impl<T> Tree<T> {
    /// The root node, if the tree is non-empty.
    #[must_use]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// `true` when the tree has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<T: Clone> Tree<T> {
    /// Recursive depth-first preorder traversal: root, left, right.
    #[must_use]
    pub fn preorder(&self) -> Vec<T> {
        fn visit<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
            let Some(node) = node else { return };
            out.push(node.value.clone());
            visit(node.left.as_deref(), out);
            visit(node.right.as_deref(), out);
        }

        let mut out = Vec::new();
        visit(self.root(), &mut out);
        out
    }

    /// Iterative preorder traversal over an explicit stack.
    ///
    /// The right child is pushed before the left so the left subtree pops
    /// first, matching the recursive visit order.
    #[must_use]
    pub fn preorder_iterative(&self) -> Vec<T> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            out.push(node.value.clone());
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }

        out
    }

    /// Breadth-first (level-order) traversal, left child before right.
    #[must_use]
    pub fn breadth_first(&self) -> Vec<T> {
        let mut out = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            out.push(node.value.clone());
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }

        out
    }
}

/// Parses the textual flattened form used at the CLI boundary.
///
/// Tokens are separated by commas and/or whitespace. The tokens `_`, `-`,
/// `x`, `none` and `null` (case-insensitive) mark a missing child; every
/// other token must parse as an integer. Empty tokens (for instance from a
/// trailing comma) are skipped.
///
/// # Errors
///
/// Returns [`TreeError::InvalidToken`] for a token that is neither a marker
/// nor an integer.
pub fn parse_flattened(input: &str) -> Result<Vec<Option<i32>>, TreeError> {
    input
        .split([',', ' ', '\t', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| match token.to_lowercase().as_str() {
            "_" | "-" | "x" | "none" | "null" => Ok(None),
            _ => token.parse::<i32>().map(Some).map_err(|_| TreeError::InvalidToken {
                token: token.to_string(),
                position,
            }),
        })
        .try_collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_tree() -> Tree<i32> {
        Tree::from_flattened(&EXAMPLE).expect("example tree is well-formed")
    }

    #[test]
    fn test_build_example_tree() {
        let tree = example_tree();
        let root = tree.root().unwrap();
        assert_eq!(root.value, 1);
        assert_eq!(root.left.as_ref().unwrap().value, 2);
        assert_eq!(root.right.as_ref().unwrap().value, 3);
    }

    #[test]
    fn test_preorder_traversal() {
        assert_eq!(example_tree().preorder(), vec![1, 2, 4, 5, 3, 6, 7]);
    }

    #[test]
    fn test_iterative_preorder_matches_recursive() {
        let tree = example_tree();
        assert_eq!(tree.preorder_iterative(), tree.preorder());
    }

    #[test]
    fn test_breadth_first_traversal() {
        assert_eq!(example_tree().breadth_first(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = Tree::<i32>::from_flattened(&[None]).unwrap();
        assert!(tree.is_empty());
        assert!(tree.preorder().is_empty());
        assert!(tree.preorder_iterative().is_empty());
        assert!(tree.breadth_first().is_empty());
    }

    #[test]
    fn test_truncated_input_is_rejected() {
        let result = Tree::from_flattened(&[Some(1)]);
        assert_eq!(result, Err(TreeError::Truncated { at: 1 }));

        let result = Tree::from_flattened(&[Some(1), None]);
        assert_eq!(result, Err(TreeError::Truncated { at: 2 }));

        let result = Tree::<i32>::from_flattened(&[]);
        assert_eq!(result, Err(TreeError::Truncated { at: 0 }));
    }

    #[test]
    fn test_trailing_entries_are_ignored() {
        let tree = Tree::from_flattened(&[Some(1), None, None, Some(9)]).unwrap();
        assert_eq!(tree.preorder(), vec![1]);
    }

    #[test]
    fn test_left_skewed_tree() {
        // 3 -> 2 -> 1 down the left spine.
        let values = [Some(3), Some(2), Some(1), None, None, None, None];
        let tree = Tree::from_flattened(&values).unwrap();
        assert_eq!(tree.preorder(), vec![3, 2, 1]);
        assert_eq!(tree.breadth_first(), vec![3, 2, 1]);
    }

    #[test]
    fn test_parse_flattened() {
        let parsed = parse_flattened("1,2,4,_,_,5,_,_,3,6,_,_,7,_,_").unwrap();
        assert_eq!(parsed, EXAMPLE.to_vec());
    }

    #[test]
    fn test_parse_flattened_mixed_separators_and_markers() {
        let parsed = parse_flattened("1 none,2,\tx -5, null").unwrap();
        assert_eq!(
            parsed,
            vec![Some(1), None, Some(2), None, Some(-5), None]
        );
    }

    #[test]
    fn test_parse_flattened_rejects_garbage() {
        let err = parse_flattened("1,2,queen").unwrap_err();
        assert_eq!(
            err,
            TreeError::InvalidToken {
                token: "queen".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn test_parse_then_build_round_trip() {
        let values = parse_flattened("1,2,4,_,_,5,_,_,3,6,_,_,7,_,_").unwrap();
        let tree = Tree::from_flattened(&values).unwrap();
        assert_eq!(tree.breadth_first(), vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
