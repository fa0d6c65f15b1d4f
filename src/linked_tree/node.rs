use core::fmt::Debug;
use smallvec::SmallVec;

/// A node of a sibling-linked tree.
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
    /// Non-owning link to the previous sibling; `None` for a first child and for the root.
    pub(super) prev: Option<K>,
    /// Non-owning link to the next sibling; `None` for a last child and for the root.
    pub(super) next: Option<K>,
}
impl<T, K> Node<T, K>
where
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) fn leaf(value: T, parent: Option<K>) -> Self {
        Self::linked(value, parent, None, None)
    }
    #[inline(always)]
    pub(super) fn linked(value: T, parent: Option<K>, prev: Option<K>, next: Option<K>) -> Self {
        Self {
            value,
            parent,
            children: SmallVec::new(),
            prev,
            next,
        }
    }
    /// Creates a root node. There can only be one in a tree.
    #[inline(always)]
    pub(super) fn root(value: T) -> Self {
        Self::leaf(value, None)
    }
}
