use core::{fmt::Debug, mem};
use std::collections::HashSet;
use std::hash::Hash;
use smallvec::SmallVec;
use crate::{
    storage::{DefaultStorage, Storage},
    util::extract_matching,
};
use super::{Node, NodeChildrenIter, NodeRef, RoseTree, DANGLING_KEY_MSG};

/// A *mutable* reference to a node in a rose tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree and modify it as a whole.
#[derive(Debug)]
pub struct NodeRefMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) tree: &'a mut RoseTree<T, K, S>,
    pub(super) key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if the key is not present.
    pub fn new_raw(tree: &'a mut RoseTree<T, K, S>, key: K) -> Option<Self> {
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
    pub fn parent(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.as_immutable().parent()
    }
    /// Returns a *mutable* reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.node().parent.clone()?;
        Some(NodeRefMut {
            tree: self.tree,
            key,
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
    pub fn value(&self) -> &T {
        &self.node().value
    }
    /// Returns a *mutable* reference to the data stored in the node.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.node_mut().value
    }
    /// Returns the number of *direct* children of the node.
    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }
    /// Returns an iterator over references to the children of the node, in order. Empty for leaves.
    pub fn children(&self) -> NodeChildrenIter<'_, T, K, S> {
        self.as_immutable().children()
    }
    /// Returns the total number of nodes in the subtree rooted at this node, including the node itself. Recomputed on every call.
    pub fn count(&self) -> usize {
        self.as_immutable().count()
    }
    /// Returns the height of the subtree rooted at this node, in nodes; a leaf has height 1. Recomputed on every call.
    pub fn height(&self) -> usize {
        self.as_immutable().height()
    }

    /// Adds a new leaf child carrying the specified value after all existing children, returning its key so that callers can keep building from it.
    pub fn add_child(&mut self, value: T) -> K {
        let new_key = self
            .tree
            .storage
            .add(Node::leaf(value, Some(self.key.clone())));
        self.node_mut().children.push(new_key.clone());
        new_key
    }
    /// Moves every node of another tree into this one, attaching the other tree's root after all existing children of this node. Returns the key the adopted root ended up with.
    ///
    /// Adoption is the only way to attach an already existing node, and it consumes an *independently owned* tree — a node that currently has a parent first has to be split off with [`detach_child`], so a node can never end up in two child lists at once.
    ///
    /// [`detach_child`]: #method.detach_child " "
    pub fn adopt(&mut self, mut subtree: RoseTree<T, K, S>) -> K {
        let sub_root = subtree.root.clone();
        let new_key = transplant_subtree(
            &mut subtree.storage,
            &sub_root,
            &mut self.tree.storage,
            Some(self.key.clone()),
        );
        self.node_mut().children.push(new_key.clone());
        new_key
    }
    /// Splits the specified direct child off into an independently owned tree, with the child as its root. Returns `None` — and changes nothing — if the key does not name a direct child of this node.
    pub fn detach_child(&mut self, child: &K) -> Option<RoseTree<T, K, S>> {
        let position = self.node().children.iter().position(|key| key == child)?;
        self.node_mut().children.remove(position);
        let mut storage = S::new();
        let root = transplant_subtree(&mut self.tree.storage, child, &mut storage, None);
        Some(RoseTree { storage, root })
    }
    /// Removes the specified direct child and releases its whole subtree. Returns `false` — and changes nothing — if the key does not name a direct child of this node.
    pub fn remove_child(&mut self, child: &K) -> bool {
        let position = match self.node().children.iter().position(|key| key == child) {
            Some(position) => position,
            None => return false,
        };
        self.node_mut().children.remove(position);
        release_subtree(&mut self.tree.storage, child.clone());
        true
    }
    /// Removes every direct child whose value equals the specified one, releasing their subtrees. Returns whether any child was removed.
    ///
    /// Matches the same children as [`remove_children_by_value`]; the two differ only in their return contract.
    ///
    /// [`remove_children_by_value`]: #method.remove_children_by_value " "
    pub fn remove_child_by_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_children_by_value(value) > 0
    }
    /// Removes every direct child whose value equals the specified one, releasing their subtrees. Returns how many children were removed.
    pub fn remove_children_by_value(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_children_matching(|node| node.value == *value)
    }
    /// Removes every direct child whose value is a member of the specified set, releasing their subtrees. Returns how many children were removed.
    pub fn remove_children_by_values(&mut self, values: &HashSet<T>) -> usize
    where
        T: Eq + Hash,
    {
        self.remove_children_matching(|node| values.contains(&node.value))
    }
    /// Removes every direct child whose *key* is a member of the specified set, releasing their subtrees. Returns how many children were removed.
    ///
    /// Matching is by key identity, not value equality.
    pub fn remove_children_by_keys(&mut self, keys: &HashSet<K>) -> usize
    where
        K: Hash,
    {
        let mut children = mem::take(&mut self.node_mut().children);
        let doomed = extract_matching(&mut children, |key| keys.contains(key));
        self.node_mut().children = children;
        let removed = doomed.len();
        for key in doomed {
            release_subtree(&mut self.tree.storage, key);
        }
        removed
    }

    fn remove_children_matching(&mut self, mut pred: impl FnMut(&Node<T, K>) -> bool) -> usize {
        let mut children = mem::take(&mut self.node_mut().children);
        let storage = &self.tree.storage;
        let doomed = extract_matching(&mut children, |key| {
            storage.get(key).map_or(false, |node| pred(node))
        });
        self.node_mut().children = children;
        let removed = doomed.len();
        for key in doomed {
            release_subtree(&mut self.tree.storage, key);
        }
        removed
    }

    fn as_immutable(&self) -> NodeRef<'_, T, K, S> {
        NodeRef {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
    pub(super) fn node(&self) -> &Node<T, K> {
        self.tree.storage.get(&self.key).expect(DANGLING_KEY_MSG)
    }
    pub(super) fn node_mut(&mut self) -> &mut Node<T, K> {
        self.tree
            .storage
            .get_mut(&self.key)
            .expect(DANGLING_KEY_MSG)
    }
}
impl<'a, T, K, S> From<NodeRefMut<'a, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn from(other: NodeRefMut<'a, T, K, S>) -> Self {
        Self {
            tree: other.tree,
            key: other.key,
        }
    }
}

/// Releases a whole subtree back to the arena, without touching the former parent's child list.
fn release_subtree<T, K, S>(storage: &mut S, key: K)
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    let mut stack: SmallVec<[K; 16]> = SmallVec::new();
    stack.push(key);
    while let Some(current) = stack.pop() {
        if let Some(node) = storage.remove(&current) {
            stack.extend(node.children);
        }
    }
}

/// Moves a subtree from one arena into another, re-keying every node. Children keep their relative order; the moved root gets the specified parent.
fn transplant_subtree<T, K, S>(source: &mut S, key: &K, target: &mut S, parent: Option<K>) -> K
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    let node = source.remove(key).expect(DANGLING_KEY_MSG);
    let new_key = target.add(Node::leaf(node.value, parent));
    for child in node.children {
        let new_child = transplant_subtree(source, &child, target, Some(new_key.clone()));
        target
            .get_mut(&new_key)
            .expect(DANGLING_KEY_MSG)
            .children
            .push(new_child);
    }
    new_key
}
