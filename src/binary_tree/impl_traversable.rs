use crate::{storage::Storage, traversal::BinaryNode};
use super::{Node, NodeRef};

impl<T, S> BinaryNode for NodeRef<'_, T, S>
where S: Storage<Element = Node<T>>,
{
    #[inline(always)]
    fn left_child(&self) -> Option<Self> {
        NodeRef::left_child(self)
    }
    #[inline(always)]
    fn right_child(&self) -> Option<Self> {
        NodeRef::right_child(self)
    }
    #[inline(always)]
    fn is_leaf(&self) -> bool {
        NodeRef::is_leaf(self)
    }
}
