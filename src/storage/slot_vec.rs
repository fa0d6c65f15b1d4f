use core::mem;
use super::Storage;

const FREE_LIST_BROKEN_MSG: &str = "the free list pointed at an occupied slot";

/// A vector-backed arena with a free list.
///
/// Elements are stored in a `Vec` of slots addressed by plain `usize` keys. Removing an element does not shift anything: the slot is marked vacant and threaded onto a free list, so every other key in the storage stays valid. Subsequent additions reuse vacant slots before growing the vector, which also makes insertion after heavy removal cheap.
///
/// Keys are *not* generational: a key whose element was removed becomes dangling and may later name an unrelated element added into the reused slot. The tree types never keep keys of removed nodes around, so this is only a concern for keys held outside the tree; enable the `slotmap` feature and use a `SlotMap` backend if that matters for your use case.
#[derive(Clone, Debug, Default)]
pub struct SlotVec<T> {
    slots: Vec<Slot<T>>,
    first_free: Option<usize>,
    len: usize,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(T),
    /// A vacant slot, with the index of the next one on the free list.
    Vacant(Option<usize>),
}
impl<T> Slot<T> {
    #[inline(always)]
    fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(..))
    }
}

impl<T> SlotVec<T> {
    /// Returns the number of vacant slots waiting to be reused.
    pub fn num_vacant(&self) -> usize {
        self.slots.len() - self.len
    }
    /// Returns `true` if every slot in the backing vector holds an element, `false` otherwise.
    pub fn is_dense(&self) -> bool {
        self.num_vacant() == 0
    }
}

impl<T> Storage for SlotVec<T> {
    type Key = usize;
    type Element = T;

    fn add(&mut self, element: T) -> usize {
        if let Some(index) = self.first_free {
            let slot = &mut self.slots[index];
            let next_free = match *slot {
                Slot::Vacant(next) => next,
                Slot::Occupied(..) => unreachable!("{}", FREE_LIST_BROKEN_MSG),
            };
            *slot = Slot::Occupied(element);
            self.first_free = next_free;
            self.len += 1;
            index
        } else {
            self.slots.push(Slot::Occupied(element));
            self.len += 1;
            self.slots.len() - 1
        }
    }
    fn remove(&mut self, key: &usize) -> Option<T> {
        let next_free = self.first_free;
        let slot = self.slots.get_mut(*key)?;
        if !slot.is_occupied() {
            return None;
        }
        let old = mem::replace(slot, Slot::Vacant(next_free));
        self.first_free = Some(*key);
        self.len -= 1;
        match old {
            Slot::Occupied(element) => Some(element),
            Slot::Vacant(..) => None, // checked above
        }
    }
    #[inline]
    fn get(&self, key: &usize) -> Option<&T> {
        match self.slots.get(*key) {
            Some(Slot::Occupied(element)) => Some(element),
            Some(Slot::Vacant(..)) | None => None,
        }
    }
    #[inline]
    fn get_mut(&mut self, key: &usize) -> Option<&mut T> {
        match self.slots.get_mut(*key) {
            Some(Slot::Occupied(element)) => Some(element),
            Some(Slot::Vacant(..)) | None => None,
        }
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            first_free: None,
            len: 0,
        }
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.slots.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_elements_are_retrievable_by_key() {
        let mut storage = SlotVec::new();
        let first = storage.add("first");
        let second = storage.add("second");
        assert_eq!(storage.get(&first), Some(&"first"));
        assert_eq!(storage.get(&second), Some(&"second"));
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn removal_leaves_other_keys_untouched() {
        let mut storage = SlotVec::new();
        let first = storage.add(1);
        let second = storage.add(2);
        let third = storage.add(3);

        assert_eq!(storage.remove(&second), Some(2));
        assert_eq!(storage.get(&first), Some(&1));
        assert_eq!(storage.get(&third), Some(&3));
        assert_eq!(storage.get(&second), None);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.num_vacant(), 1);
    }

    #[test]
    fn vacant_slots_are_reused_before_growing() {
        let mut storage = SlotVec::new();
        let first = storage.add(1);
        let _second = storage.add(2);
        assert_eq!(storage.remove(&first), Some(1));
        assert!(!storage.is_dense());

        let reused = storage.add(3);
        assert_eq!(reused, first);
        assert!(storage.is_dense());
        assert_eq!(storage.get(&reused), Some(&3));
    }

    #[test]
    fn double_removal_reports_absence() {
        let mut storage = SlotVec::new();
        let key = storage.add("only");
        assert_eq!(storage.remove(&key), Some("only"));
        assert_eq!(storage.remove(&key), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn free_list_chains_through_multiple_vacancies() {
        let mut storage = SlotVec::new();
        let keys: Vec<_> = (0..5).map(|x| storage.add(x)).collect();
        for key in &keys[1..4] {
            storage.remove(key);
        }
        assert_eq!(storage.num_vacant(), 3);

        // All three vacant slots get reused before the vector grows again.
        for x in 10..13 {
            let key = storage.add(x);
            assert!(keys[1..4].contains(&key));
        }
        assert!(storage.is_dense());
        assert_eq!(storage.len(), 5);
    }
}
