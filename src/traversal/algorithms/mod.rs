//! Ubiquitous algorithms for binary trees.
//!
//! This includes:
//! - Minimum depth, both [recursive][`minimum_depth`] and [breadth-first][`minimum_depth_breadth_first`]
//! - [Maximum depth][`maximum_depth`]
//! - [`MinimumDepth`], which picks the minimum depth algorithm at runtime and optionally bounds it
//!
//! [`minimum_depth`]: fn.minimum_depth.html " "
//! [`minimum_depth_breadth_first`]: fn.minimum_depth_breadth_first.html " "
//! [`maximum_depth`]: fn.maximum_depth.html " "
//! [`MinimumDepth`]: struct.MinimumDepth.html " "

mod max_depth;
mod min_depth;
pub use max_depth::*;
pub use min_depth::*;


use thiserror::Error;

/// The error type returned by the fallible depth measurements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum DepthError {
    /// There was no root node to measure.
    #[error("cannot measure the depth of an absent root node")]
    AbsentRoot,
    /// No leaf was found within the configured depth limit.
    #[error("no leaf node within the depth limit of {limit}")]
    LimitExceeded {
        /// The limit which was in effect.
        limit: usize,
    },
}
