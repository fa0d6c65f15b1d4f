//! Arena-allocated tree containers with interchangeable node shapes.
//!
//! # Overview
//! Coppice implements a small family of generically-typed trees using arena allocation: nodes live in a flat backing storage and link to each other through opaque keys instead of pointers. Because the parent link is just a key — never an owning reference — the parent/child back-and-forth that would otherwise form a reference cycle is expressed without any shared ownership at all, and removing a subtree is a matter of returning its slots to the arena.
//!
//! Three tree shapes are provided, all satisfying the same [`Tree`] contract so that code can be written against "any tree":
//! - [`RoseTree`] — the freeform shape: any node may have any number of children, in insertion order.
//! - [`BinaryTree`] — at most two children per node, addressed as the left and right slot.
//! - [`LinkedTree`] — freeform, with an additional doubly-linked list threaded through every node's direct children, so sibling traversal never has to index into the parent's child list.
//!
//! Every tree hands out `NodeRef`/`NodeRefMut` handles which pair a borrow of the tree with a node key; all reading and mutation happens through those handles. Subtree metrics (`count`, `height`) are recomputed by walking the subtree on every call — there is no cache to invalidate, so they are correct immediately after any mutation.
//!
//! # Example
//! ```rust
//! use coppice::rose_tree::RoseTree;
//!
//! let mut tree = RoseTree::<_>::new("root");
//! let mut root = tree.root_mut();
//! root.add_child("leaf");
//! root.add_child("leaf2");
//!
//! let root = tree.root();
//! assert_eq!(root.count(), 3);
//! assert_eq!(root.height(), 2);
//! ```
//!
//! # Storage
//! The arena type is abstracted by the [`Storage`] trait. The default backend is [`SlotVec`], a growable vector of slots with a free list, which keeps keys stable across removals. With the `slotmap` feature flag enabled, [`SlotMap`] and [`DenseSlotMap`] can be used as backends instead, providing generational keys.
//!
//! # Feature flags
//! - `rose_tree` (**enabled by default**) — the freeform tree.
//! - `binary_tree` (**enabled by default**) — the two-slot tree.
//! - `linked_tree` (**enabled by default**) — the sibling-linked tree.
//! - `slotmap` — `Storage` implementations for the [`SlotMap`] and [`DenseSlotMap`] types from the `slotmap` crate.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `smallvec` (**required**) — `^1.4`
//! - `slotmap` (*optional*) — `^1.0`
//!
//! [`Tree`]: trait.Tree.html " "
//! [`RoseTree`]: rose_tree/struct.RoseTree.html " "
//! [`BinaryTree`]: binary_tree/struct.BinaryTree.html " "
//! [`LinkedTree`]: linked_tree/struct.LinkedTree.html " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`SlotVec`]: storage/struct.SlotVec.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.DenseSlotMap.html " "

#![warn(
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::string_add_assign,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage, SlotVec};

mod tree;
pub use tree::{Tree, MergeError};

#[cfg(feature = "rose_tree")]
pub mod rose_tree;
#[cfg(feature = "rose_tree")]
pub use rose_tree::RoseTree;

#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "binary_tree")]
pub use binary_tree::BinaryTree;

#[cfg(feature = "linked_tree")]
pub mod linked_tree;
#[cfg(feature = "linked_tree")]
pub use linked_tree::LinkedTree;

/// A prelude for using Coppice, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        storage::{Storage as TreeStorage, DefaultStorage as DefaultTreeStorage},
        tree::Tree as TreeContract,
    };
    #[cfg(feature = "rose_tree")]
    #[doc(no_inline)]
    pub use crate::rose_tree::{
        RoseTree,
        NodeRef as RoseTreeNodeRef,
        NodeRefMut as RoseTreeNodeRefMut,
    };
    #[cfg(feature = "binary_tree")]
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
        NodeRefMut as BinaryTreeNodeRefMut,
    };
    #[cfg(feature = "linked_tree")]
    #[doc(no_inline)]
    pub use crate::linked_tree::{
        LinkedTree,
        NodeRef as LinkedTreeNodeRef,
        NodeRefMut as LinkedTreeNodeRefMut,
    };
}

pub(crate) mod util;
