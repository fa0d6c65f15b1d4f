//! Sibling-linked trees, freeform ones which additionally thread a doubly-linked list through every node's direct children.
//!
//! Each node knows its previous and next sibling directly, so walking along a generation never has to index into the parent's child list. The links are plain keys like the parent link, so they add no ownership of their own; every mutation keeps them consistent with the child order, in both directions.
//!
//! The positional [`insert_child`] operation is the reason this shape exists: it splices a new node *between* two siblings, rewiring exactly the adjacent links.
//!
//! # Example
//! ```rust
//! use coppice::linked_tree::LinkedTree;
//!
//! let mut tree = LinkedTree::<_>::new("root");
//! let mut root = tree.root_mut();
//! let first = root.add_child("first");
//! root.add_child("last");
//!
//! // Splice a node in between the two:
//! root.insert_child(1, "middle");
//!
//! // Walking the sibling chain visits the children in order:
//! let first = tree.get(first).expect("the node was just added");
//! let middle = first.next_sibling().expect("a later sibling exists");
//! assert_eq!(*middle.value(), "middle");
//! assert_eq!(*middle.next_sibling().expect("a later sibling exists").value(), "last");
//! assert_eq!(*middle.prev_sibling().expect("an earlier sibling exists").value(), "first");
//! ```
//!
//! [`insert_child`]: struct.NodeRefMut.html#method.insert_child " "

use core::fmt::{self, Debug, Display, Formatter};
use crate::storage::{DefaultStorage, SlotVec, Storage};

mod node;
mod node_ref;
mod node_ref_mut;
#[cfg(test)]
mod tests;

pub use node::Node;
pub use node_ref::{NodeChildrenIter, NodeRef};
pub use node_ref_mut::NodeRefMut;

const DANGLING_KEY_MSG: &str = "\
a node link pointed at a key which is not present in the storage";

/// A sibling-linked tree: arbitrary arity, with a doubly-linked list threaded through every node's direct children.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct LinkedTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: K,
}
impl<T, K, S> LinkedTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a sibling-linked tree with the specified value for the root node.
    #[inline(always)]
    pub fn new(root: T) -> Self {
        let mut storage = S::new();
        let root = storage.add(Node::root(root));
        Self { storage, root }
    }
    /// Creates a sibling-linked tree with the specified capacity for the storage.
    #[inline(always)]
    pub fn with_capacity(capacity: usize, root: T) -> Self {
        let mut storage = S::with_capacity(capacity);
        let root = storage.add(Node::root(root));
        Self { storage, root }
    }

    /// Returns a reference to the root node of the tree.
    #[inline(always)]
    pub fn root(&self) -> NodeRef<'_, T, K, S> {
        // A tree cannot be created without a root, and the root cannot be removed.
        NodeRef {
            tree: self,
            key: self.root.clone(),
        }
    }
    /// Returns a *mutable* reference to the root node of the tree, allowing modifications to the entire tree.
    #[inline(always)]
    pub fn root_mut(&mut self) -> NodeRefMut<'_, T, K, S> {
        let key = self.root.clone();
        NodeRefMut { tree: self, key }
    }
    /// Returns a reference to the node at the specified key, or `None` if the key does not name a node of this tree.
    #[inline(always)]
    pub fn get(&self, key: K) -> Option<NodeRef<'_, T, K, S>> {
        NodeRef::new_raw(self, key)
    }
    /// Returns a *mutable* reference to the node at the specified key, or `None` if the key does not name a node of this tree.
    #[inline(always)]
    pub fn get_mut(&mut self, key: K) -> Option<NodeRefMut<'_, T, K, S>> {
        NodeRefMut::new_raw(self, key)
    }
}
impl<T, K, S> crate::Tree for LinkedTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Key = K;

    #[inline(always)]
    fn new(root: T) -> Self {
        Self::new(root)
    }
    #[inline(always)]
    fn node_count(&self) -> usize {
        self.root().count()
    }
    #[inline(always)]
    fn height(&self) -> usize {
        self.root().height()
    }
}
impl<T, K, S> Display for LinkedTree<T, K, S>
where
    T: Display,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let root = self.root();
        write!(
            f,
            "Root: {}, Height: {}, Count: {}",
            root.value(),
            root.height(),
            root.count(),
        )
    }
}

/// A sibling-linked tree which uses a [`SlotVec`] as backing storage.
///
/// The default `LinkedTree` type already uses this, so this is only provided for explicitness and consistency.
///
/// [`SlotVec`]: ../storage/struct.SlotVec.html " "
pub type SlotVecLinkedTree<T> = LinkedTree<T, usize, SlotVec<Node<T, usize>>>;

/// A sibling-linked tree which uses a `SlotMap` as backing storage, trading a bigger key type for generational keys.
#[cfg(feature = "slotmap")]
pub type SlotMapLinkedTree<T> = LinkedTree<
    T,
    slotmap::DefaultKey,
    slotmap::SlotMap<slotmap::DefaultKey, Node<T, slotmap::DefaultKey>>,
>;
