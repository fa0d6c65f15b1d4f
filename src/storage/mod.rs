//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the trait abstracting the arena that trees keep their nodes in
//! - [`SlotVec`], the default backing storage: a growable vector of slots with a free list, which keeps keys stable across removals
//! - [`DefaultStorage`], a type definition for the backing storage used by trees unless a different one is specified
//!
//! With the `slotmap` feature flag enabled, `Storage` is additionally implemented for the `SlotMap` and `DenseSlotMap` types from the `slotmap` crate, which provide generational keys at the cost of a slightly bigger key type.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`SlotVec`]: struct.SlotVec.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod slot_vec;
pub use slot_vec::SlotVec;

#[cfg(feature = "slotmap")]
mod slotmap_impl;

use core::fmt::Debug;

/// Trait for various kinds of containers which can be the backing storage for trees.
///
/// An implementation hands out a key for every element added and must keep that key pointing at exactly that element — unchanged — until the element is removed through it. Whether keys of removed elements get reused later is implementation specific; trees never hold on to keys of nodes they have removed, so reuse is harmless for them.
pub trait Storage: Sized {
    /// The type used for element naming.
    type Key: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified key, returning that key.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Removes and returns the element identified by `key`, or `None` if no element is stored under it.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Element>;
    /// Returns a reference to the specified element, or `None` if the key is not present in the storage.
    fn get(&self, key: &Self::Key) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element, or `None` if the key is not present in the storage.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element>;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity preallocated.
    fn with_capacity(capacity: usize) -> Self;

    /// Returns `true` if the specified key is present in the storage, `false` otherwise.
    #[inline]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// The default implementation reports the current length, which is the correct answer for storages that do not preallocate.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least `additional` more elements. The storage may reserve more space to avoid frequent reallocations. Does nothing for storages which do not preallocate.
    #[inline(always)]
    fn reserve(&mut self, _additional: usize) {}
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// Points at [`SlotVec`]; the definition exists so that switching the crate-wide default stays a one-line change.
///
/// [`SlotVec`]: struct.SlotVec.html " "
pub type DefaultStorage<T> = SlotVec<T>;
