use core::fmt::Debug;
use arrayvec::ArrayVec;

/// A node of a binary tree.
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
    pub(super) left: Option<K>,
    pub(super) right: Option<K>,
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
            left: None,
            right: None,
        }
    }
    /// Creates a root node. There can only be one in a tree.
    #[inline(always)]
    pub(super) fn root(value: T) -> Self {
        Self::leaf(value, None)
    }
    /// Projects the occupied child slots, left before right.
    pub(super) fn child_keys(&self) -> ArrayVec<[K; 2]> {
        let mut keys = ArrayVec::new();
        if let Some(left) = &self.left {
            keys.push(left.clone());
        }
        if let Some(right) = &self.right {
            keys.push(right.clone());
        }
        keys
    }
}
