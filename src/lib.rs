//! Measures the minimum depth of binary trees: the number of edges on the shortest path from the root to any leaf.
//!
//! ------------------------
//!
//! # Overview
//! A node with exactly one child is *not* a leaf, which is the whole difference between the minimum depth and a naive "smaller of the two subtrees" recursion: a missing child never terminates a path, only a node without any children does.
//!
//! Cinder works with two shapes of trees:
//! - [`linked::Node`], the classic layout where every node owns its children through `Option<Box<Node<T>>>`;
//! - [`BinaryTree`], an ["arena-allocated tree"][arena tree blog post] flattened from a linked one, where children are indices into a backing [`Storage`] instead of pointers.
//!
//! Both implement [`BinaryNode`], the trait all of the algorithms in [`traversal::algorithms`] are generic over, so your own node types can be measured too.
//!
//! # Example
//! ```rust
//! use cinder::{linked::Node, traversal::algorithms::minimum_depth};
//!
//! // The root has a single child, so it is not a leaf and the answer is 1, not 0.
//! let tree = Node::new(1).with_left(Node::new(2));
//! assert_eq!(minimum_depth(&tree), 1);
//!
//! let tree = Node::new(1)
//!     .with_left(Node::new(2))
//!     .with_right(Node::new(3).with_left(Node::new(4)));
//! assert_eq!(tree.minimum_depth(), 1);
//! assert_eq!(tree.maximum_depth(), 2);
//! ```
//!
//! # Choosing an algorithm
//! [`minimum_depth`] is the plain recursive definition and needs stack proportional to the height of the tree. [`minimum_depth_breadth_first`] walks the tree level by level instead, stops at the first leaf it finds and needs memory proportional to the width of the tree. Both always produce the same answer. [`MinimumDepth`] picks between the two at runtime and can cap the depth it is willing to explore.
//!
//! # Feature flags
//! - `binary_tree` (**enabled by default**) - the arena-allocated [`BinaryTree`].
//! - `doc_cfg` - marks feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! [`BinaryTree`]: binary_tree/struct.BinaryTree.html " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`BinaryNode`]: traversal/trait.BinaryNode.html " "
//! [`minimum_depth`]: traversal/algorithms/fn.minimum_depth.html " "
//! [`minimum_depth_breadth_first`]: traversal/algorithms/fn.minimum_depth_breadth_first.html " "
//! [`MinimumDepth`]: traversal/algorithms/struct.MinimumDepth.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

pub mod linked;
pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage, CapacityError};

#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub mod binary_tree;
#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub use binary_tree::BinaryTree;

pub mod traversal;
pub use traversal::{
    BinaryNode,
    algorithms::{
        minimum_depth,
        minimum_depth_breadth_first,
        maximum_depth,
        try_minimum_depth,
        MinimumDepth,
        Strategy,
    },
};

/// A prelude for using Cinder, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::linked::Node as LinkedNode;
    #[cfg(feature = "binary_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
    };
    #[doc(no_inline)]
    pub use crate::traversal::{
        BinaryNode,
        algorithms::{
            MinimumDepth,
            Strategy as DepthStrategy,
            DepthError,
        },
    };
}

pub use traversal::algorithms::DepthError;

/// The payload of a node of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeValue<B, L = B> {
    /// The payload of a branch node, i.e. a node with one or two children. Those are also sometimes referred to as internal nodes or inodes.
    Branch(B),
    /// The payload of a leaf node, i.e. a node without any children.
    Leaf(L),
}
impl<B, L> NodeValue<B, L> {
    /// Converts from `&NodeValue<B, L>` to `NodeValue<&B, &L>`.
    #[inline]
    pub const fn as_ref(&self) -> NodeValue<&B, &L> {
        match self {
            Self::Branch(x) => NodeValue::Branch(x),
            Self::Leaf(x) => NodeValue::Leaf(x),
        }
    }
    /// Returns `true` if the payload belongs to a leaf node, `false` otherwise.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(..))
    }
}
impl<T> NodeValue<T, T> {
    /// Extracts the value, discarding information about whether the node was a leaf or branch. *Available only if the leaf and branch payloads are the same type.*
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_inner(self) -> T {
        match self {
              NodeValue::Branch(x)
            | NodeValue::Leaf(x)
            => x,
        }
    }
}
