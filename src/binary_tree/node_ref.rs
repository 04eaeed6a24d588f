use crate::{
    storage::{Storage, DefaultStorage},
    traversal::algorithms,
    NodeValue,
};
use super::{BinaryTree, Node, NodeData};

/// A reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree in any direction, including upwards.
#[derive(Debug)]
pub struct NodeRef<'a, T, S = DefaultStorage<Node<T>>>
where S: Storage<Element = Node<T>>,
{
    tree: &'a BinaryTree<T, S>,
    key: usize,
}
impl<'a, T, S> NodeRef<'a, T, S>
where S: Storage<Element = Node<T>>,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a BinaryTree<T, S>, key: usize) -> Option<Self> {
        if tree.storage.contains_key(key) {
            Some(Self { tree, key })
        } else {
            None
        }
    }
    /// Returns the raw storage key for the node.
    #[inline(always)]
    pub const fn raw_key(&self) -> usize {
        self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_raw_key(self) -> usize {
        self.key
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|key| self.at(key))
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        match &self.node().value {
            NodeData::Branch {..} => false,
            NodeData::Leaf(..) => true,
        }
    }
    /// Returns `true` if the node is a *branch*, i.e. has one or two child nodes; `false` otherwise.
    #[inline]
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }
    /// Returns `true` if the node is a *full branch*, i.e. has exactly two child nodes; `false` otherwise.
    #[inline(always)]
    pub fn is_full_branch(&self) -> bool {
        self.children().is_some()
    }
    /// Returns a reference to the data stored in the node.
    #[inline(always)]
    pub fn value(&self) -> NodeValue<&'a T> {
        self.node().value.as_value()
    }
    /// Returns references to the children, or `None` if the node is a leaf node or only has one child. To retrieve a child even if the other one is not present, see `left_child` and `right_child`.
    pub fn children(&self) -> Option<(Self, Self)> {
        match self.node().value.children() {
            (Some(left_child), Some(right_child)) => {
                Some((self.at(left_child), self.at(right_child)))
            }
            _ => None,
        }
    }
    /// Returns a reference to the left child, or `None` if there is none.
    ///
    /// If you need both children, use [`children`] instead.
    ///
    /// [`children`]: #method.children " "
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.node().value.children().0.map(|key| self.at(key))
    }
    /// Returns a reference to the right child, or `None` if there is none.
    ///
    /// If you need both children, use [`children`] instead.
    ///
    /// [`children`]: #method.children " "
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.node().value.children().1.map(|key| self.at(key))
    }
    /// Returns the number of edges between the node and the root node.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = *self;
        while let Some(parent) = current.parent() {
            depth += 1;
            current = parent;
        }
        depth
    }
    /// Returns the number of edges on the shortest path from this node to a leaf within its subtree.
    ///
    /// See [`minimum_depth`] for details.
    ///
    /// [`minimum_depth`]: ../traversal/algorithms/fn.minimum_depth.html " "
    #[inline]
    pub fn minimum_depth(self) -> usize {
        algorithms::minimum_depth(self)
    }
    /// Returns the number of edges on the longest path from this node to a leaf within its subtree.
    #[inline]
    pub fn maximum_depth(self) -> usize {
        algorithms::maximum_depth(self)
    }

    #[inline(always)]
    fn at(&self, key: usize) -> Self {
        debug_assert!(
            self.tree.storage.contains_key(key),
            "\
debug key check failed: tried to reference key {} which is not present in the storage",
            key,
        );
        Self {
            tree: self.tree,
            key,
        }
    }
    #[inline(always)]
    fn node(&self) -> &'a Node<T> {
        self.tree
            .storage
            .get(self.key)
            .expect("node references can never dangle")
    }
}
impl<T, S> Copy for NodeRef<'_, T, S>
where S: Storage<Element = Node<T>>,
{}
impl<T, S> Clone for NodeRef<'_, T, S>
where S: Storage<Element = Node<T>>,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, S> PartialEq for NodeRef<'_, T, S>
where S: Storage<Element = Node<T>>,
{
    /// Two references are equal if they point to the same node of the same tree.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.key == other.key
    }
}
impl<T, S> Eq for NodeRef<'_, T, S>
where S: Storage<Element = Node<T>>,
{}
impl<'a, T, S> From<NodeRef<'a, T, S>> for NodeValue<&'a T>
where S: Storage<Element = Node<T>>,
{
    #[inline(always)]
    fn from(op: NodeRef<'a, T, S>) -> Self {
        op.value()
    }
}
