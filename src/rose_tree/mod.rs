//! Rose trees, ones which don't impose any restrictions on the number of child nodes that a node can have.
//!
//! This is the freeform member of the family: every node carries a value and an ordered list of children, and the insertion order of children is significant. The other tree shapes in the crate layer extra invariants on top of this model.
//!
//! # Example
//! ```rust
//! use coppice::rose_tree::RoseTree;
//!
//! // Create the tree. The only thing we need for that is the data payload for the root node. The
//! // turbofish there is needed to state that we are using the default storage method instead of
//! // asking the compiler to infer it, which would be impossible.
//! let mut tree = RoseTree::<_>::new("root");
//!
//! // We have never added any nodes to the tree, so the root does not have any children, hence:
//! assert!(tree.root().is_leaf());
//!
//! // Let's add some. Mutation goes through a mutable node handle:
//! let mut root = tree.root_mut();
//! let intermediate = root.add_child("intermediate");
//! root.add_child("leaf");
//!
//! // The key returned by add_child can be used to keep building deeper:
//! tree.get_mut(intermediate)
//!     .expect("the node was just added")
//!     .add_child("deep leaf");
//!
//! // Metrics are recomputed from the current shape on every read:
//! let root = tree.root();
//! assert_eq!(root.count(), 4);
//! assert_eq!(root.height(), 3);
//! ```

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

/// A rose tree: arbitrary arity, child order significant.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct RoseTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: K,
}
impl<T, K, S> RoseTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a rose tree with the specified value for the root node.
    #[inline(always)]
    pub fn new(root: T) -> Self {
        let mut storage = S::new();
        let root = storage.add(Node::root(root));
        Self { storage, root }
    }
    /// Creates a rose tree with the specified capacity for the storage.
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
impl<T, K, S> crate::Tree for RoseTree<T, K, S>
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
impl<T, K, S> Display for RoseTree<T, K, S>
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

/// A rose tree which uses a [`SlotVec`] as backing storage.
///
/// The default `RoseTree` type already uses this, so this is only provided for explicitness and consistency.
///
/// [`SlotVec`]: ../storage/struct.SlotVec.html " "
pub type SlotVecRoseTree<T> = RoseTree<T, usize, SlotVec<Node<T, usize>>>;

/// A rose tree which uses a `SlotMap` as backing storage, trading a bigger key type for generational keys.
#[cfg(feature = "slotmap")]
pub type SlotMapRoseTree<T> =
    RoseTree<T, slotmap::DefaultKey, slotmap::SlotMap<slotmap::DefaultKey, Node<T, slotmap::DefaultKey>>>;
