use crate::traversal::BinaryNode;

/// Returns the number of edges on the longest path from `root` to a leaf, also known as the height of the tree.
///
/// Walks the whole tree depth-first with an explicit stack, so it does not recurse. The minimum depth of a tree never exceeds its maximum depth, and the two are equal exactly when every leaf sits at the same depth.
///
/// # Example
/// ```rust
/// use cinder::{linked::Node, maximum_depth, minimum_depth};
///
/// let tree = Node::new('a')
///     .with_left(Node::new('b'))
///     .with_right(Node::new('c').with_right(Node::new('d')));
/// assert_eq!(maximum_depth(&tree), 2);
/// assert_eq!(minimum_depth(&tree), 1);
/// ```
pub fn maximum_depth<N: BinaryNode>(root: N) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(root, 0)];
    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(node.children().into_iter().map(|child| (child, depth + 1)));
    }
    deepest
}
