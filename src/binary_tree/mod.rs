//! Binary trees, ones which allow at most two children for their nodes.
//!
//! Each node owns exactly two child slots, addressed as *left* and *right*. The slots are positional: removing the left child leaves the right child where it is. The generic children view projects the occupied slots in left-then-right order.
//!
//! Running out of slots is a capacity condition, not a lookup failure, so the adding operations return dedicated errors which hand the rejected payload back instead of dropping it.
//!
//! # Example
//! ```rust
//! use coppice::binary_tree::BinaryTree;
//!
//! // Create the tree. The only thing we need for that is the data payload for the root node. The
//! // turbofish there is needed to state that we are using the default storage method instead of
//! // asking the compiler to infer it, which would be impossible.
//! let mut tree = BinaryTree::<_>::new("root");
//!
//! let mut root = tree.root_mut();
//! let left = root.try_add_child("left").expect("the root is a leaf");
//! root.try_add_child("right").expect("one slot is still free");
//!
//! // Both slots are now taken, so a third child is rejected and handed back:
//! let error = root.try_add_child("extra").expect_err("both slots are occupied");
//! assert_eq!(error.rejected, "extra");
//!
//! // The key returned on success can be used to keep building deeper:
//! tree.get_mut(left)
//!     .expect("the node was just added")
//!     .try_add_child("deep")
//!     .expect("the node was just added as a leaf");
//!
//! let root = tree.root();
//! assert_eq!(root.count(), 4);
//! assert_eq!(root.height(), 3);
//! ```

use core::fmt::{self, Debug, Display, Formatter};
use smallvec::SmallVec;
use crate::storage::{DefaultStorage, SlotVec, Storage};

mod node;
mod node_ref;
mod node_ref_mut;

pub use node::Node;
pub use node_ref::{NodeChildrenIter, NodeRef};
pub use node_ref_mut::NodeRefMut;

const DANGLING_KEY_MSG: &str = "\
a node link pointed at a key which is not present in the storage";

/// A binary tree: at most two children per node, addressed as the left and right slot.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct BinaryTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: K,
}
impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a binary tree with the specified value for the root node.
    #[inline(always)]
    pub fn new(root: T) -> Self {
        let mut storage = S::new();
        let root = storage.add(Node::root(root));
        Self { storage, root }
    }
    /// Creates a binary tree with the specified capacity for the storage.
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
impl<T, K, S> crate::Tree for BinaryTree<T, K, S>
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
impl<T, K, S> Display for BinaryTree<T, K, S>
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

/// The error type returned by [`NodeRefMut::try_add_child`] and [`NodeRefMut::try_adopt`].
///
/// [`NodeRefMut::try_add_child`]: struct.NodeRefMut.html#method.try_add_child " "
/// [`NodeRefMut::try_adopt`]: struct.NodeRefMut.html#method.try_adopt " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotsFullError<P> {
    /// The provided payload, which was deemed useless when the operation failed and is returned to the caller to avoid dropping it.
    pub rejected: P,
}
impl<P> Display for SlotsFullError<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("both child slots of the node are already occupied")
    }
}
impl<P: Debug> std::error::Error for SlotsFullError<P> {}

/// The error type returned by [`NodeRefMut::set_children`].
///
/// [`NodeRefMut::set_children`]: struct.NodeRefMut.html#method.set_children " "
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExcessChildrenError<T> {
    /// Every value which was provided to the failed operation, in the original order, returned to the caller to avoid dropping them. Always contains at least three elements.
    pub values: SmallVec<[T; 4]>,
}
impl<T> Display for ExcessChildrenError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("more than two children were provided for a binary tree node")
    }
}
impl<T: Debug> std::error::Error for ExcessChildrenError<T> {}

/// A binary tree which uses a [`SlotVec`] as backing storage.
///
/// The default `BinaryTree` type already uses this, so this is only provided for explicitness and consistency.
///
/// [`SlotVec`]: ../storage/struct.SlotVec.html " "
pub type SlotVecBinaryTree<T> = BinaryTree<T, usize, SlotVec<Node<T, usize>>>;

/// A binary tree which uses a `SlotMap` as backing storage, trading a bigger key type for generational keys.
#[cfg(feature = "slotmap")]
pub type SlotMapBinaryTree<T> = BinaryTree<
    T,
    slotmap::DefaultKey,
    slotmap::SlotMap<slotmap::DefaultKey, Node<T, slotmap::DefaultKey>>,
>;
