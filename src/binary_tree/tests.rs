use super::*;
use crate::{
    traversal::algorithms::{minimum_depth, minimum_depth_breadth_first},
    NodeValue,
};
use arrayvec::ArrayVec;

fn sample() -> linked::Node<u64> {
    //      1987
    //     /    \
    //   83      87
    //    \     /  \
    //    11   13   17
    linked::Node::new(1987)
        .with_left(linked::Node::new(83).with_right(linked::Node::new(11)))
        .with_right(
            linked::Node::new(87)
                .with_left(linked::Node::new(13))
                .with_right(linked::Node::new(17)),
        )
}

#[test]
fn basic() {
    let tree: BinaryTree<u64> = BinaryTree::from(&sample());
    assert_eq!(tree.len(), 6);
    assert!(!tree.is_empty());

    let root = tree.root();
    assert!(root.is_root());
    assert_eq!(root.raw_key(), 0);
    assert_eq!(root.value(), NodeValue::Branch(&1987));

    let left_child_val = root.left_child().map(|x| x.value());
    let right_child_val = root.right_child().map(|x| x.value());
    assert_eq!(left_child_val, Some(NodeValue::Branch(&83)));
    assert_eq!(right_child_val, Some(NodeValue::Branch(&87)));
}

#[test]
fn partial_branches_keep_their_side() {
    let tree: BinaryTree<u64> = BinaryTree::from(&sample());
    let left = tree.root().left_child().expect("root has a left child");
    assert!(left.is_branch());
    assert!(!left.is_full_branch());
    assert!(left.children().is_none());
    assert!(left.left_child().is_none());
    let only_child = left.right_child().expect("83 has a right child");
    assert_eq!(only_child.value(), NodeValue::Leaf(&11));
    assert_eq!(only_child.parent(), Some(left));
}

#[test]
fn depths() {
    let linked = sample();
    let tree: BinaryTree<u64> = BinaryTree::from(&linked);
    assert_eq!(tree.minimum_depth(), 2);
    assert_eq!(tree.maximum_depth(), 2);
    assert_eq!(minimum_depth(tree.root()), linked.minimum_depth());
    assert_eq!(minimum_depth_breadth_first(tree.root()), 2);

    let leaf_depths: Vec<_> = tree
        .leaves()
        .map(|leaf| (leaf.value().into_inner(), leaf.depth()))
        .collect();
    assert_eq!(leaf_depths, [(&11, 2), (&13, 2), (&17, 2)]);
}

#[test]
fn subtree_depths() {
    let tree: BinaryTree<u64> = BinaryTree::from(&linked::Node::new(0).with_left(sample()));
    assert_eq!(tree.minimum_depth(), 3);
    let subtree = tree.root().left_child().expect("root has a left child");
    assert_eq!(subtree.depth(), 1);
    assert_eq!(subtree.minimum_depth(), 2);
}

#[test]
fn single_node() {
    let tree: BinaryTree<&str> = BinaryTree::from(&linked::Node::new("lonely"));
    let root = tree.root();
    assert!(root.is_leaf());
    assert_eq!(root.parent(), None);
    assert_eq!(root.depth(), 0);
    assert_eq!(tree.minimum_depth(), 0);
    assert_eq!(tree.leaves().count(), 1);
}

#[test]
fn tall_chain() {
    let mut linked = linked::Node::new(0_u32);
    for i in 1..50_000 {
        linked = linked::Node::new(i).with_right(linked);
    }
    let tree: BinaryTree<u32> = BinaryTree::from(&linked);
    assert_eq!(tree.len(), 50_000);
    assert_eq!(minimum_depth_breadth_first(tree.root()), 49_999);
    let leaf = tree.leaves().next().expect("a tree always has a leaf");
    assert_eq!(leaf.value(), NodeValue::Leaf(&0));
    assert_eq!(leaf.depth(), 49_999);
}

#[test]
fn fixed_capacity_storage() {
    let tree = ArrayVecBinaryTree::<u64, [Node<u64>; 6]>::try_from_node(&sample())
        .expect("six nodes fit");
    assert_eq!(tree.storage().len(), 6);
    assert_eq!(tree.minimum_depth(), 2);

    let overflow = BinaryTree::<u64, ArrayVec<[Node<u64>; 4]>>::try_from_node(&sample());
    assert_eq!(overflow, Err(CapacityError { capacity: 4 }));
}

#[test]
fn node_refs_compare_by_identity() {
    let linked = sample();
    let first: BinaryTree<u64> = BinaryTree::from(&linked);
    let second = first.clone();
    assert_eq!(first.root(), first.root());
    assert_ne!(first.root(), second.root());
    assert_eq!(NodeRef::new_raw(&first, 6), None);
}
