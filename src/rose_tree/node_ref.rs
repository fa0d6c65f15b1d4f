use core::{fmt::Debug, iter::FusedIterator, slice};
use crate::storage::{DefaultStorage, Storage};
use super::{Node, RoseTree, DANGLING_KEY_MSG};

/// A reference to a node in a rose tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
#[derive(Debug)]
pub struct NodeRef<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) tree: &'a RoseTree<T, K, S>,
    pub(super) key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if the key is not present.
    pub fn new_raw(tree: &'a RoseTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(Self { tree, key })
        } else {
            None
        }
    }
    /// Returns a reference to the raw storage key for the node.
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.as_ref().map(|key| Self {
            tree: self.tree,
            key: key.clone(),
        })
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        self.node().children.is_empty()
    }
    /// Returns a reference to the data stored in the node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns the number of *direct* children of the node.
    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }
    /// Returns an iterator over references to the children of the node, in order. Empty for leaves.
    pub fn children(&self) -> NodeChildrenIter<'a, T, K, S> {
        NodeChildrenIter {
            tree: self.tree,
            keys: self.node().children.iter(),
        }
    }
    /// Returns the total number of nodes in the subtree rooted at this node, including the node itself.
    ///
    /// Recomputed by walking the subtree on every call.
    pub fn count(&self) -> usize {
        1 + self.children().map(|child| child.count()).sum::<usize>()
    }
    /// Returns the length, in nodes, of the longest path from this node to any leaf of its subtree. A leaf has height 1.
    ///
    /// Recomputed by walking the subtree on every call.
    pub fn height(&self) -> usize {
        1 + self
            .children()
            .map(|child| child.height())
            .max()
            .unwrap_or(0)
    }

    pub(super) fn node(&self) -> &'a Node<T, K> {
        self.tree.storage.get(&self.key).expect(DANGLING_KEY_MSG)
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
}
impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}

/// An iterator over references to the children of a rose tree node.
#[derive(Debug)]
pub struct NodeChildrenIter<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a RoseTree<T, K, S>,
    keys: slice::Iter<'a, K>,
}
impl<'a, T, K, S> Iterator for NodeChildrenIter<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = NodeRef<'a, T, K, S>;
    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(|key| NodeRef {
            tree: self.tree,
            key: key.clone(),
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}
impl<T, K, S> ExactSizeIterator for NodeChildrenIter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
}
impl<T, K, S> FusedIterator for NodeChildrenIter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
}
impl<T, K, S> Clone for NodeChildrenIter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            keys: self.keys.clone(),
        }
    }
}
