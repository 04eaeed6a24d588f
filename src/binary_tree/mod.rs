//! Arena-allocated binary trees, flattened from linked ones.
//!
//! A [`BinaryTree`] keeps all of its nodes in a single [`Storage`] and links them with indices instead of pointers. Nodes know their parent, so a [`NodeRef`] can walk up the tree as well as down. The tree is built once from a [`linked::Node`] and is read-only afterwards.
//!
//! Both full branches (two children) and partial ones (a single child on either side) are represented faithfully: a partial branch remembers whether its child is the left or the right one.
//!
//! # Example
//! ```rust
//! use cinder::{binary_tree::{BinaryTree, NodeRef}, linked, NodeValue};
//!
//! let linked = linked::Node::new("Welcome")
//!     .with_left(linked::Node::new("to"))
//!     .with_right(linked::Node::new("the").with_left(linked::Node::new("arena")));
//!
//! // The turbofish is needed to state that we are using the default storage method instead of
//! // asking the compiler to infer it, which would be impossible.
//! let tree = BinaryTree::<_>::from(&linked);
//! assert_eq!(tree.len(), 4);
//!
//! let root = tree.root();
//! assert_eq!(root.value(), NodeValue::Branch(&"Welcome"));
//! let (left_child, right_child) = root.children().unwrap();
//! assert!(left_child.is_leaf());
//! assert!(right_child.is_branch() && !right_child.is_full_branch());
//!
//! // Nodes remember their parents.
//! let arena: NodeRef<'_, _> = right_child.left_child().unwrap();
//! assert_eq!(arena.depth(), 2);
//! assert_eq!(arena.parent(), Some(right_child));
//!
//! assert_eq!(tree.minimum_depth(), 1);
//! assert_eq!(tree.maximum_depth(), 2);
//! ```
//!
//! [`BinaryTree`]: struct.BinaryTree.html " "
//! [`NodeRef`]: struct.NodeRef.html " "
//! [`Storage`]: ../storage/trait.Storage.html " "
//! [`linked::Node`]: ../linked/struct.Node.html " "

use std::collections::VecDeque;
use log::debug;
use crate::{
    storage::{Storage, DefaultStorage, CapacityError},
    linked,
};

mod impl_traversable;
mod node;
mod node_ref;
#[cfg(test)]
mod tests;

use node::NodeData;
pub use node::Node;
pub use node_ref::NodeRef;

/// An arena-allocated binary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryTree<T, S = DefaultStorage<Node<T>>>
where S: Storage<Element = Node<T>>,
{
    storage: S,
    root: usize,
}
impl<T, S> BinaryTree<T, S>
where S: Storage<Element = Node<T>>,
{
    /// Flattens a linked tree into a new arena tree, cloning the payloads.
    ///
    /// Nodes are stored in breadth-first order, the root coming first. The conversion is iterative, so trees of any height can be flattened.
    ///
    /// # Errors
    /// Fails if the storage has a fixed capacity which is too small to hold every node.
    pub fn try_from_node(root: &linked::Node<T>) -> Result<Self, CapacityError>
    where T: Clone,
    {
        let mut storage = S::new();
        let mut queue = VecDeque::new();
        queue.push_back((root, None));
        // Keys are handed out in the order in which nodes are enqueued, so a
        // child's key is known before its parent is stored.
        let mut next_key = 1;
        while let Some((node, parent)) = queue.pop_front() {
            let key = storage.len();
            let [left_child, right_child] = [node.left(), node.right()].map(|child| {
                child.map(|child| {
                    let child_key = next_key;
                    next_key += 1;
                    queue.push_back((child, Some(key)));
                    child_key
                })
            });
            let element = if node.is_leaf() {
                Node::leaf(node.value().clone(), parent)
            } else {
                Node::branch(node.value().clone(), left_child, right_child, parent)
            };
            storage.add(element)?;
        }
        debug!("flattened {} nodes into arena storage", storage.len());
        Ok(Self { storage, root: 0 })
    }
    /// Returns a reference to the root node of the tree.
    #[inline]
    pub fn root(&self) -> NodeRef<'_, T, S> {
        NodeRef::new_raw(self, self.root)
            .expect("the root node always exists")
    }
    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree holds no nodes. Trees always have a root node, so this is never the case.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
    /// Returns an iterator over all leaf nodes, in breadth-first order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeRef<'_, T, S>> + '_ {
        (0..self.len())
            .filter_map(move |key| NodeRef::new_raw(self, key))
            .filter(NodeRef::is_leaf)
    }
    /// Returns a reference to the backing storage.
    #[inline(always)]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
    /// Returns the number of edges on the shortest path from the root to a leaf.
    ///
    /// See [`minimum_depth`] for details.
    ///
    /// [`minimum_depth`]: ../traversal/algorithms/fn.minimum_depth.html " "
    #[inline]
    pub fn minimum_depth(&self) -> usize {
        self.root().minimum_depth()
    }
    /// Returns the number of edges on the longest path from the root to a leaf.
    #[inline]
    pub fn maximum_depth(&self) -> usize {
        self.root().maximum_depth()
    }
}
impl<T: Clone> From<&linked::Node<T>> for BinaryTree<T> {
    #[inline]
    fn from(root: &linked::Node<T>) -> Self {
        Self::try_from_node(root).expect("growable storage cannot run out of capacity")
    }
}

/// A binary tree which uses a `Vec` as backing storage.
///
/// The default `BinaryTree` type already uses this, so this is only provided for explicitness and consistency.
pub type VecBinaryTree<T> = BinaryTree<T, Vec<Node<T>>>;
/// A binary tree which uses an `ArrayVec` as backing storage, holding a fixed number of nodes without heap allocation.
///
/// `A` is the backing array type, for example `[Node<T>; 16]`.
pub type ArrayVecBinaryTree<T, A> = BinaryTree<T, arrayvec::ArrayVec<A>>;
