//! Everything related to traversing binary trees in general.
//!
//! The module is home to the following items:
//! - [`BinaryNode`] - the *trait for handles to nodes of binary trees*, which is all the depth algorithms need to know about a tree
//! - Implementations of ubiquitous algorithms for binary trees (see the [`algorithms`] module for more)
//!
//! # Implementing `BinaryNode` for your own trees
//! A `BinaryNode` is a cheap handle, typically a reference, which can produce handles to its children. Any node type which can hand out references to its children can be measured:
//! ```rust
//! use cinder::{BinaryNode, minimum_depth};
//!
//! struct Heap(Vec<u32>);
//! #[derive(Copy, Clone)]
//! struct Slot<'a>(&'a Heap, usize);
//!
//! impl BinaryNode for Slot<'_> {
//!     fn left_child(&self) -> Option<Self> {
//!         let index = 2 * self.1 + 1;
//!         (index < (self.0).0.len()).then(|| Slot(self.0, index))
//!     }
//!     fn right_child(&self) -> Option<Self> {
//!         let index = 2 * self.1 + 2;
//!         (index < (self.0).0.len()).then(|| Slot(self.0, index))
//!     }
//! }
//!
//! let heap = Heap((0..6).collect());
//! // Index 2 has a single child (index 5), index 3 and 4 are leaves.
//! assert_eq!(minimum_depth(Slot(&heap, 0)), 2);
//! ```
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`BinaryNode`]: trait.BinaryNode.html " "

pub mod algorithms;

use arrayvec::ArrayVec;

/// Handles to nodes of binary trees, which can be used to walk down the tree.
///
/// The structure reachable from any handle must be a finite tree. None of the algorithms detect cycles: a cyclic structure makes the unbounded ones loop or recurse forever. [`MinimumDepth`] with a limit stays bounded regardless.
///
/// [`MinimumDepth`]: algorithms/struct.MinimumDepth.html " "
pub trait BinaryNode: Sized {
    /// Returns a handle to the left child, or `None` if there is none.
    fn left_child(&self) -> Option<Self>;
    /// Returns a handle to the right child, or `None` if there is none.
    fn right_child(&self) -> Option<Self>;

    /// Returns `true` if the node is a *leaf*, i.e. has neither a left nor a right child; `false` otherwise.
    ///
    /// A node with only one child is **not** a leaf.
    #[inline]
    fn is_leaf(&self) -> bool {
        self.left_child().is_none() && self.right_child().is_none()
    }
    /// Returns handles to the children which are present, left one first.
    #[inline]
    fn children(&self) -> ArrayVec<[Self; 2]> {
        let mut children = ArrayVec::new();
        if let Some(left_child) = self.left_child() {
            children.push(left_child);
        }
        if let Some(right_child) = self.right_child() {
            children.push(right_child);
        }
        children
    }
}
