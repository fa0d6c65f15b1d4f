use core::fmt::{self, Debug, Display, Formatter};

/// The contract shared by every tree shape in the crate.
///
/// A tree is a thin handle around exactly one root node living in an arena; all structural mutation goes through the node handles the concrete tree type hands out, so this trait only captures what every shape has in common: construction around a root value and the aggregate read-only queries computed from the root.
pub trait Tree {
    /// The data payload of the tree's nodes.
    type Value;
    /// The key used to address the tree's contents.
    ///
    /// Keys are only meaningful for the tree they were obtained from. A key stays valid until the node it names is removed from the tree; storage backends with non-generational keys (such as the default one) may later reuse it for a newly added node.
    type Key;

    /// Creates a tree whose root node carries the specified value.
    fn new(root: Self::Value) -> Self;
    /// Returns the total number of nodes in the tree, including the root.
    ///
    /// Recomputed by walking the tree on every call.
    fn node_count(&self) -> usize;
    /// Returns the length, in nodes, of the longest path from the root to any leaf. A tree with only a root node has height 1.
    ///
    /// Recomputed by walking the tree on every call.
    fn height(&self) -> usize;

    /// Merges another tree of the same type into this one.
    ///
    /// No tree shape currently supports merging; the operation is part of the contract so that callers get an explicit [`MergeError`] — with the second tree handed back untouched — rather than a silent no-op.
    ///
    /// # Errors
    /// Always fails with [`MergeError`] unless a tree type overrides the default.
    ///
    /// [`MergeError`]: struct.MergeError.html " "
    fn try_merge(&mut self, other: Self) -> Result<(), MergeError<Self>>
    where
        Self: Sized,
    {
        Err(MergeError { other })
    }
}

/// The error type returned by [`Tree::try_merge`], indicating that the tree type does not support merging.
///
/// [`Tree::try_merge`]: trait.Tree.html#method.try_merge " "
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct MergeError<T> {
    /// The tree which was going to be merged in, returned to the caller to avoid dropping it.
    pub other: T,
}
impl<T> Display for MergeError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("merging is not supported by this tree type")
    }
}
impl<T: Debug> std::error::Error for MergeError<T> {}

#[cfg(all(test, feature = "rose_tree"))]
mod tests {
    use super::*;
    use crate::rose_tree::RoseTree;

    #[test]
    fn merge_is_reported_unsupported() {
        let mut accumulator = RoseTree::<_>::new("left");
        let donor = RoseTree::<_>::new("right");

        let error = accumulator
            .try_merge(donor)
            .expect_err("merging should be unsupported");
        // The donor comes back untouched instead of being dropped.
        assert_eq!(*error.other.root().value(), "right");
        assert_eq!(accumulator.node_count(), 1);
    }

    #[test]
    fn aggregate_queries_delegate_to_the_root() {
        let mut tree = RoseTree::<_>::new(5);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(Tree::height(&tree), 1);

        tree.root_mut().add_child(6);
        assert_eq!(tree.node_count(), 2);
        assert_eq!(Tree::height(&tree), 2);
    }
}
