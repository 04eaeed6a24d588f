use std::collections::VecDeque;
use log::{debug, trace};
use super::DepthError;
use crate::traversal::BinaryNode;

/// Returns the number of edges on the shortest path from `root` to a leaf.
///
/// A leaf is a node with neither child. A node with a single child is not a leaf, so the path always continues into the child which exists; only when both children exist is the shallower of the two picked. A lone root node has a minimum depth of 0.
///
/// Every node is visited at most once. The recursion is as deep as the tree is tall, so use [`minimum_depth_breadth_first`] for trees which might be very tall.
///
/// # Example
/// ```rust
/// use cinder::{linked::Node, minimum_depth};
///
/// assert_eq!(minimum_depth(&Node::new(1)), 0);
/// assert_eq!(minimum_depth(&Node::new(1).with_left(Node::new(2))), 1);
/// ```
///
/// [`minimum_depth_breadth_first`]: fn.minimum_depth_breadth_first.html " "
pub fn minimum_depth<N: BinaryNode>(root: N) -> usize {
    match (root.left_child(), root.right_child()) {
        (None, None) => 0,
        (None, Some(right_child)) => minimum_depth(right_child) + 1,
        (Some(left_child), None) => minimum_depth(left_child) + 1,
        (Some(left_child), Some(right_child)) => {
            minimum_depth(left_child).min(minimum_depth(right_child)) + 1
        }
    }
}

/// Returns the number of edges on the shortest path from `root` to a leaf, walking the tree level by level.
///
/// Produces the same result as [`minimum_depth`], but stops at the first leaf it encounters and never recurses. The memory used is proportional to the width of the tree rather than its height.
///
/// [`minimum_depth`]: fn.minimum_depth.html " "
pub fn minimum_depth_breadth_first<N: BinaryNode>(root: N) -> usize {
    let mut queue = VecDeque::new();
    queue.push_back((root, 0));
    while let Some((node, depth)) = queue.pop_front() {
        let children = node.children();
        if children.is_empty() {
            trace!("first leaf reached at depth {}", depth);
            return depth;
        }
        queue.extend(children.into_iter().map(|child| (child, depth + 1)));
    }
    unreachable!("a finite tree always has a leaf")
}

/// Returns the minimum depth of the tree under `root`, or an error if there is no root.
///
/// # Errors
/// Returns [`DepthError::AbsentRoot`] if `root` is `None`.
///
/// [`DepthError::AbsentRoot`]: enum.DepthError.html#variant.AbsentRoot " "
#[inline]
pub fn try_minimum_depth<N: BinaryNode>(root: Option<N>) -> Result<usize, DepthError> {
    MinimumDepth::new().measure(root)
}

/// The algorithm used by [`MinimumDepth`] to walk the tree.
///
/// [`MinimumDepth`]: struct.MinimumDepth.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Depth-first recursion, as done by [`minimum_depth`].
    ///
    /// [`minimum_depth`]: fn.minimum_depth.html " "
    Recursive,
    /// Level-order walk, as done by [`minimum_depth_breadth_first`].
    ///
    /// [`minimum_depth_breadth_first`]: fn.minimum_depth_breadth_first.html " "
    BreadthFirst,
}
impl Default for Strategy {
    #[inline(always)]
    fn default() -> Self {
        Self::Recursive
    }
}

/// Runtime options for measuring the minimum depth.
///
/// # Example
/// ```rust
/// use cinder::{linked::Node, MinimumDepth, Strategy, DepthError};
///
/// let mut tree = Node::new(0);
/// for i in 1..100 {
///     tree = Node::new(i).with_right(tree);
/// }
///
/// let measurement = MinimumDepth::new().with_strategy(Strategy::BreadthFirst);
/// assert_eq!(measurement.measure(Some(&tree)), Ok(99));
/// assert_eq!(
///     measurement.with_limit(10).measure(Some(&tree)),
///     Err(DepthError::LimitExceeded { limit: 10 }),
/// );
/// assert_eq!(measurement.measure(None::<&Node<i32>>), Err(DepthError::AbsentRoot));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MinimumDepth {
    strategy: Strategy,
    limit: Option<usize>,
}
impl MinimumDepth {
    /// Creates the default options: recursive, without a depth limit.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }
    /// Sets the algorithm used to walk the tree.
    #[inline]
    #[must_use]
    pub const fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }
    /// Sets the deepest level which will be explored. If the minimum depth is greater than that, the measurement fails instead of walking further.
    ///
    /// With a limit, the recursive strategy never recurses deeper than `limit + 1` levels, which also makes it safe to use on trees of unknown height.
    #[inline]
    #[must_use]
    pub const fn with_limit(self, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }
    /// Returns the algorithm used to walk the tree.
    #[inline(always)]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }
    /// Returns the depth limit, or `None` if the whole tree may be explored.
    #[inline(always)]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Measures the minimum depth of the tree under `root`.
    ///
    /// # Errors
    /// Will fail in the following scenarios:
    /// - `root` is `None`.
    /// - A limit is set and the minimum depth is greater than it.
    pub fn measure<N: BinaryNode>(&self, root: Option<N>) -> Result<usize, DepthError> {
        let root = root.ok_or(DepthError::AbsentRoot)?;
        debug!(
            "measuring minimum depth (strategy: {:?}, limit: {:?})",
            self.strategy, self.limit,
        );
        let limit = match self.limit {
            Some(limit) => limit,
            None => {
                return Ok(match self.strategy {
                    Strategy::Recursive => minimum_depth(root),
                    Strategy::BreadthFirst => minimum_depth_breadth_first(root),
                })
            }
        };
        let depth = match self.strategy {
            Strategy::Recursive => bounded_recursive(root, 0, limit),
            Strategy::BreadthFirst => bounded_breadth_first(root, limit),
        };
        depth.ok_or_else(|| {
            debug!("no leaf within the depth limit of {}", limit);
            DepthError::LimitExceeded { limit }
        })
    }
}

/// The shallowest leaf depth under `node`, if it is at most `limit`.
fn bounded_recursive<N: BinaryNode>(node: N, depth: usize, limit: usize) -> Option<usize> {
    if depth > limit {
        return None;
    }
    match (node.left_child(), node.right_child()) {
        (None, None) => Some(depth),
        (None, Some(child)) | (Some(child), None) => bounded_recursive(child, depth + 1, limit),
        (Some(left_child), Some(right_child)) => {
            let left_depth = bounded_recursive(left_child, depth + 1, limit);
            let right_depth = bounded_recursive(right_child, depth + 1, limit);
            match (left_depth, right_depth) {
                (Some(left_depth), Some(right_depth)) => Some(left_depth.min(right_depth)),
                (left_depth, right_depth) => left_depth.or(right_depth),
            }
        }
    }
}

fn bounded_breadth_first<N: BinaryNode>(root: N, limit: usize) -> Option<usize> {
    let mut queue = VecDeque::new();
    queue.push_back((root, 0));
    while let Some((node, depth)) = queue.pop_front() {
        // Levels come out of the queue in order, nothing shallower is left.
        if depth > limit {
            return None;
        }
        let children = node.children();
        if children.is_empty() {
            trace!("first leaf reached at depth {}", depth);
            return Some(depth);
        }
        queue.extend(children.into_iter().map(|child| (child, depth + 1)));
    }
    None
}
