//! Property tests relating the depth algorithms to each other and to the arena tree.

use cinder::{
    binary_tree::BinaryTree,
    linked::Node,
    maximum_depth,
    minimum_depth,
    minimum_depth_breadth_first,
    DepthError,
    MinimumDepth,
    Strategy as DepthStrategy,
};
use proptest::prelude::*;

fn tree() -> impl Strategy<Value = Node<u8>> {
    any::<u8>().prop_map(Node::new).prop_recursive(8, 64, 2, |inner| {
        (
            any::<u8>(),
            proptest::option::of(inner.clone()),
            proptest::option::of(inner),
        )
            .prop_map(|(value, left, right)| Node::from_children(value, left, right))
    })
}

fn strategy() -> impl Strategy<Value = DepthStrategy> {
    prop_oneof![
        Just(DepthStrategy::Recursive),
        Just(DepthStrategy::BreadthFirst),
    ]
}

proptest! {
    #[test]
    fn recursive_and_breadth_first_agree(tree in tree()) {
        prop_assert_eq!(minimum_depth(&tree), minimum_depth_breadth_first(&tree));
    }

    #[test]
    fn minimum_never_exceeds_maximum(tree in tree()) {
        prop_assert!(minimum_depth(&tree) <= maximum_depth(&tree));
    }

    #[test]
    fn idempotent(tree in tree()) {
        prop_assert_eq!(minimum_depth(&tree), minimum_depth(&tree));
    }

    #[test]
    fn arena_tree_agrees_with_linked_tree(tree in tree()) {
        let arena: BinaryTree<u8> = BinaryTree::from(&tree);
        prop_assert_eq!(arena.minimum_depth(), tree.minimum_depth());
        prop_assert_eq!(arena.maximum_depth(), tree.maximum_depth());
    }

    #[test]
    fn minimum_depth_is_the_shallowest_leaf(tree in tree()) {
        let arena: BinaryTree<u8> = BinaryTree::from(&tree);
        let shallowest = arena.leaves().map(|leaf| leaf.depth()).min();
        prop_assert_eq!(shallowest, Some(minimum_depth(&tree)));
        let deepest = arena.leaves().map(|leaf| leaf.depth()).max();
        prop_assert_eq!(deepest, Some(maximum_depth(&tree)));
    }

    #[test]
    fn limit_fails_exactly_below_the_minimum(
        tree in tree(),
        strategy in strategy(),
        limit in 0_usize..12,
    ) {
        let depth = minimum_depth(&tree);
        let measured = MinimumDepth::new()
            .with_strategy(strategy)
            .with_limit(limit)
            .measure(Some(&tree));
        if depth <= limit {
            prop_assert_eq!(measured, Ok(depth));
        } else {
            prop_assert_eq!(measured, Err(DepthError::LimitExceeded { limit }));
        }
    }
}
