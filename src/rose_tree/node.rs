use core::fmt::Debug;
use smallvec::SmallVec;

/// A node of a rose tree.
///
/// Created by the tree internally and only publicly exposed so that tree storages' generic arguments could be specified.
#[derive(Clone, Debug)]
pub struct Node<T, K = usize>
where
    K: Clone + Debug + Eq,
{
    pub(super) value: T,
    /// Non-owning uplink; `None` for the root.
    pub(super) parent: Option<K>,
    /// Owned children, in insertion order.
    pub(super) children: SmallVec<[K; 4]>,
}
impl<T, K> Node<T, K>
where
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) fn leaf(value: T, parent: Option<K>) -> Self {
        Self {
            value,
            parent,
            children: SmallVec::new(),
        }
    }
    /// Creates a root node. There can only be one in a tree.
    #[inline(always)]
    pub(super) fn root(value: T) -> Self {
        Self::leaf(value, None)
    }
}
