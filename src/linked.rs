//! Binary trees whose nodes own their children directly.
//!
//! This is the textbook shape of a binary tree: each node holds a payload and up to two boxed children. The nodes are built by the caller, bottom-up, and are only ever read by the depth algorithms.
//!
//! # Example
//! ```rust
//! use cinder::linked::Node;
//!
//! let tree = Node::from_children(
//!     "root",
//!     Some(Node::new("left")),
//!     Some(Node::new("right").with_right(Node::new("far right"))),
//! );
//! assert!(!tree.is_leaf());
//! assert_eq!(tree.children().len(), 2);
//! assert_eq!(tree.right().and_then(Node::right).map(Node::value), Some(&"far right"));
//! assert_eq!(tree.minimum_depth(), 1);
//! ```

use arrayvec::ArrayVec;
use crate::traversal::{BinaryNode, algorithms};

/// A node of a linked binary tree, owning its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}
impl<T> Node<T> {
    /// Creates a leaf node with the specified payload.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
    /// Creates a node with the specified payload and children, any of which can be absent.
    #[inline]
    pub fn from_children(value: T, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
    /// Sets the left child, replacing the previous one if there was any.
    #[inline]
    #[must_use]
    pub fn with_left(mut self, child: Self) -> Self {
        self.left = Some(Box::new(child));
        self
    }
    /// Sets the right child, replacing the previous one if there was any.
    #[inline]
    #[must_use]
    pub fn with_right(mut self, child: Self) -> Self {
        self.right = Some(Box::new(child));
        self
    }
    /// Returns a reference to the payload.
    #[inline(always)]
    pub const fn value(&self) -> &T {
        &self.value
    }
    /// Returns a *mutable* reference to the payload.
    #[inline(always)]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
    /// Returns `true` if the node has no children, `false` otherwise.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    /// Returns references to the children which are present, left one first.
    pub fn children(&self) -> ArrayVec<[&Self; 2]> {
        self.left().into_iter().chain(self.right()).collect()
    }
    /// Returns the number of edges on the shortest path from this node to a leaf.
    ///
    /// See [`minimum_depth`] for details.
    ///
    /// [`minimum_depth`]: ../traversal/algorithms/fn.minimum_depth.html " "
    #[inline]
    pub fn minimum_depth(&self) -> usize {
        algorithms::minimum_depth(self)
    }
    /// Returns the number of edges on the longest path from this node to a leaf.
    #[inline]
    pub fn maximum_depth(&self) -> usize {
        algorithms::maximum_depth(self)
    }
}
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Detach the descendants one by one so that dropping a tall chain
        // never recurses.
        let mut detached: Vec<Box<Self>> = self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = detached.pop() {
            detached.extend(node.left.take());
            detached.extend(node.right.take());
        }
    }
}

impl<'a, T> BinaryNode for &'a Node<T> {
    #[inline]
    fn left_child(&self) -> Option<Self> {
        let node: &'a Node<T> = *self;
        node.left.as_deref()
    }
    #[inline]
    fn right_child(&self) -> Option<Self> {
        let node: &'a Node<T> = *self;
        node.right.as_deref()
    }
}
