use core::fmt::Debug;
use std::collections::HashSet;
use std::hash::Hash;
use arrayvec::ArrayVec;
use smallvec::SmallVec;
use crate::storage::{DefaultStorage, Storage};
use super::{
    BinaryTree, ExcessChildrenError, Node, NodeChildrenIter, NodeRef, SlotsFullError,
    DANGLING_KEY_MSG,
};

/// The two child slots of a binary tree node, in projection order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ChildSlot {
    Left,
    Right,
}

/// A *mutable* reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree and modify it as a whole.
#[derive(Debug)]
pub struct NodeRefMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) tree: &'a mut BinaryTree<T, K, S>,
    pub(super) key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if the key is not present.
    pub fn new_raw(tree: &'a mut BinaryTree<T, K, S>, key: K) -> Option<Self> {
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
    /// Returns `true` if the node is a *leaf*, i.e. has both child slots empty; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }
    /// Returns a reference to the data stored in the node.
    pub fn value(&self) -> &T {
        &self.node().value
    }
    /// Returns a *mutable* reference to the data stored in the node.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.node_mut().value
    }
    /// Returns a reference to the node in the left child slot, or `None` if the slot is empty.
    pub fn left_child(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.as_immutable().left_child()
    }
    /// Returns a *mutable* reference to the node in the left child slot, or `None` if the slot is empty.
    pub fn left_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.node().left.clone()?;
        Some(NodeRefMut {
            tree: self.tree,
            key,
        })
    }
    /// Returns a reference to the node in the right child slot, or `None` if the slot is empty.
    pub fn right_child(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.as_immutable().right_child()
    }
    /// Returns a *mutable* reference to the node in the right child slot, or `None` if the slot is empty.
    pub fn right_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.node().right.clone()?;
        Some(NodeRefMut {
            tree: self.tree,
            key,
        })
    }
    /// Returns the number of occupied child slots of the node.
    pub fn child_count(&self) -> usize {
        self.node().child_keys().len()
    }
    /// Returns an iterator over references to the children of the node, left slot before right. Empty for leaves.
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

    /// Adds a new leaf child carrying the specified value into the first empty slot, left before right, returning its key so that callers can keep building from it.
    ///
    /// # Errors
    /// Fails with [`SlotsFullError`] if both slots are already occupied, handing the value back.
    ///
    /// [`SlotsFullError`]: struct.SlotsFullError.html " "
    pub fn try_add_child(&mut self, value: T) -> Result<K, SlotsFullError<T>> {
        let slot = match self.first_empty_slot() {
            Some(slot) => slot,
            None => return Err(SlotsFullError { rejected: value }),
        };
        let new_key = self
            .tree
            .storage
            .add(Node::leaf(value, Some(self.key.clone())));
        self.fill_slot(slot, new_key.clone());
        Ok(new_key)
    }
    /// Moves every node of another tree into this one, attaching the other tree's root into the first empty slot, left before right. Returns the key the adopted root ended up with.
    ///
    /// Adoption is the only way to attach an already existing node, and it consumes an *independently owned* tree — a node that currently has a parent first has to be split off with [`detach_child`], so a node can never end up in two child slots at once.
    ///
    /// # Errors
    /// Fails with [`SlotsFullError`] if both slots are already occupied, handing the whole tree back.
    ///
    /// [`detach_child`]: #method.detach_child " "
    /// [`SlotsFullError`]: struct.SlotsFullError.html " "
    pub fn try_adopt(
        &mut self,
        mut subtree: BinaryTree<T, K, S>,
    ) -> Result<K, SlotsFullError<BinaryTree<T, K, S>>> {
        let slot = match self.first_empty_slot() {
            Some(slot) => slot,
            None => return Err(SlotsFullError { rejected: subtree }),
        };
        let sub_root = subtree.root.clone();
        let new_key = transplant_subtree(
            &mut subtree.storage,
            &sub_root,
            &mut self.tree.storage,
            Some(self.key.clone()),
        );
        self.fill_slot(slot, new_key.clone());
        Ok(new_key)
    }
    /// Replaces the children of the node: any previous children are released, then the provided values are placed into the slots positionally, the first into the left one. An empty input clears both slots.
    ///
    /// # Errors
    /// Fails with [`ExcessChildrenError`] — and changes nothing — if more than two values are provided, handing every one of them back.
    ///
    /// [`ExcessChildrenError`]: struct.ExcessChildrenError.html " "
    pub fn set_children(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<(), ExcessChildrenError<T>> {
        let mut values = values.into_iter();
        let mut accepted = ArrayVec::<[T; 2]>::new();
        for value in &mut values {
            if let Err(overflow) = accepted.try_push(value) {
                let mut returned: SmallVec<[T; 4]> = accepted.into_iter().collect();
                returned.push(overflow.element());
                returned.extend(values);
                return Err(ExcessChildrenError { values: returned });
            }
        }
        if let Some(old_left) = self.node_mut().left.take() {
            release_subtree(&mut self.tree.storage, old_left);
        }
        if let Some(old_right) = self.node_mut().right.take() {
            release_subtree(&mut self.tree.storage, old_right);
        }
        let mut accepted = accepted.into_iter();
        if let Some(left) = accepted.next() {
            let key = self
                .tree
                .storage
                .add(Node::leaf(left, Some(self.key.clone())));
            self.node_mut().left = Some(key);
        }
        if let Some(right) = accepted.next() {
            let key = self
                .tree
                .storage
                .add(Node::leaf(right, Some(self.key.clone())));
            self.node_mut().right = Some(key);
        }
        Ok(())
    }
    /// Splits the specified direct child off into an independently owned tree, with the child as its root, leaving its former slot empty. Returns `None` — and changes nothing — if the key does not name a direct child of this node.
    pub fn detach_child(&mut self, child: &K) -> Option<BinaryTree<T, K, S>> {
        let slot = self.slot_of(child)?;
        self.clear_slot(slot);
        let mut storage = S::new();
        let root = transplant_subtree(&mut self.tree.storage, child, &mut storage, None);
        Some(BinaryTree { storage, root })
    }
    /// Removes the specified direct child and releases its whole subtree, leaving its former slot empty. Returns `false` — and changes nothing — if the key does not name a direct child of this node.
    ///
    /// The slots are positional: removing the left child does not shift the right child over.
    pub fn remove_child(&mut self, child: &K) -> bool {
        let slot = match self.slot_of(child) {
            Some(slot) => slot,
            None => return false,
        };
        self.clear_slot(slot);
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
    /// Removes every direct child whose value equals the specified one, releasing their subtrees. Returns how many children were removed, at most two.
    pub fn remove_children_by_value(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_slots_matching(|_, node| node.value == *value)
    }
    /// Removes every direct child whose value is a member of the specified set, releasing their subtrees. Returns how many children were removed, at most two.
    pub fn remove_children_by_values(&mut self, values: &HashSet<T>) -> usize
    where
        T: Eq + Hash,
    {
        self.remove_slots_matching(|_, node| values.contains(&node.value))
    }
    /// Removes every direct child whose *key* is a member of the specified set, releasing their subtrees. Returns how many children were removed, at most two.
    ///
    /// Matching is by key identity, not value equality.
    pub fn remove_children_by_keys(&mut self, keys: &HashSet<K>) -> usize
    where
        K: Hash,
    {
        self.remove_slots_matching(|key, _| keys.contains(key))
    }

    /// Checks both slots against the predicate, clearing and releasing the matching ones.
    fn remove_slots_matching(
        &mut self,
        mut matches: impl FnMut(&K, &Node<T, K>) -> bool,
    ) -> usize {
        let mut removed = 0;
        for slot in [ChildSlot::Left, ChildSlot::Right].iter().copied() {
            let key = match self.slot_key(slot) {
                Some(key) => key,
                None => continue,
            };
            let matched = self
                .tree
                .storage
                .get(&key)
                .map_or(false, |node| matches(&key, node));
            if matched {
                self.clear_slot(slot);
                release_subtree(&mut self.tree.storage, key);
                removed += 1;
            }
        }
        removed
    }
    fn slot_key(&self, slot: ChildSlot) -> Option<K> {
        match slot {
            ChildSlot::Left => self.node().left.clone(),
            ChildSlot::Right => self.node().right.clone(),
        }
    }
    fn slot_of(&self, child: &K) -> Option<ChildSlot> {
        let node = self.node();
        if node.left.as_ref() == Some(child) {
            Some(ChildSlot::Left)
        } else if node.right.as_ref() == Some(child) {
            Some(ChildSlot::Right)
        } else {
            None
        }
    }
    fn first_empty_slot(&self) -> Option<ChildSlot> {
        let node = self.node();
        if node.left.is_none() {
            Some(ChildSlot::Left)
        } else if node.right.is_none() {
            Some(ChildSlot::Right)
        } else {
            None
        }
    }
    fn fill_slot(&mut self, slot: ChildSlot, key: K) {
        match slot {
            ChildSlot::Left => self.node_mut().left = Some(key),
            ChildSlot::Right => self.node_mut().right = Some(key),
        }
    }
    fn clear_slot(&mut self, slot: ChildSlot) {
        match slot {
            ChildSlot::Left => self.node_mut().left = None,
            ChildSlot::Right => self.node_mut().right = None,
        }
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

/// Releases a whole subtree back to the arena, without touching the former parent's child slot.
fn release_subtree<T, K, S>(storage: &mut S, key: K)
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    let mut stack: SmallVec<[K; 16]> = SmallVec::new();
    stack.push(key);
    while let Some(current) = stack.pop() {
        if let Some(node) = storage.remove(&current) {
            stack.extend(node.child_keys());
        }
    }
}

/// Moves a subtree from one arena into another, re-keying every node. Children keep their slots; the moved root gets the specified parent.
fn transplant_subtree<T, K, S>(source: &mut S, key: &K, target: &mut S, parent: Option<K>) -> K
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    let node = source.remove(key).expect(DANGLING_KEY_MSG);
    let new_key = target.add(Node::leaf(node.value, parent));
    if let Some(left) = node.left {
        let new_left = transplant_subtree(source, &left, target, Some(new_key.clone()));
        target.get_mut(&new_key).expect(DANGLING_KEY_MSG).left = Some(new_left);
    }
    if let Some(right) = node.right {
        let new_right = transplant_subtree(source, &right, target, Some(new_key.clone()));
        target.get_mut(&new_key).expect(DANGLING_KEY_MSG).right = Some(new_right);
    }
    new_key
}
