use crate::NodeValue;

/// A node of an arena-allocated binary tree.
///
/// Created by the binary tree internally and only publicly exposed so that binary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub(super) value: NodeData<T>,
    pub(super) parent: Option<usize>,
}
impl<T> Node<T> {
    #[inline(always)]
    pub(super) const fn leaf(payload: T, parent: Option<usize>) -> Self {
        Self {
            value: NodeData::Leaf(payload),
            parent,
        }
    }
    /// Creates a branch node. At least one of the children must be present.
    #[inline]
    pub(super) fn branch(
        payload: T,
        left_child: Option<usize>,
        right_child: Option<usize>,
        parent: Option<usize>,
    ) -> Self {
        debug_assert!(
            left_child.is_some() || right_child.is_some(),
            "branch nodes must have at least one child",
        );
        Self {
            value: NodeData::Branch {
                payload,
                left_child,
                right_child,
            },
            parent,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(super) enum NodeData<T> {
    Branch {
        payload: T,
        left_child: Option<usize>,
        right_child: Option<usize>,
    },
    Leaf(T),
}
impl<T> NodeData<T> {
    #[inline]
    pub(super) const fn as_value(&self) -> NodeValue<&T> {
        match self {
            Self::Branch { payload, .. } => NodeValue::Branch(payload),
            Self::Leaf(payload) => NodeValue::Leaf(payload),
        }
    }
    #[inline]
    pub(super) const fn children(&self) -> (Option<usize>, Option<usize>) {
        match self {
            Self::Branch {
                left_child,
                right_child,
                ..
            } => (*left_child, *right_child),
            Self::Leaf(..) => (None, None),
        }
    }
}
