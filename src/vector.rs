use std::fmt;
use std::ops::Index;

/// Error produced by fallible vector accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// `pop` on a vector with no live elements.
    #[error("pop from an empty vector")]
    Empty,
    /// Index at or past the live element count.
    #[error("index {index} out of bounds for vector of {count} element(s)")]
    OutOfBounds { index: usize, count: usize },
}

/// Contiguous growable array with doubling growth.
///
/// Storage stays unallocated until the first push, which allocates a
/// single slot. After that every growth step doubles the capacity, and
/// capacity never shrinks unless [`GrowVec::free`] is called.
pub struct GrowVec<T> {
    count: usize,
    storage: Option<Box<[Option<T>]>>,
}

impl<T> GrowVec<T> {
    /// Creates an empty vector with no storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            storage: None,
        }
    }

    /// Number of live elements.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots backing the storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().map_or(0, |slots| slots.len())
    }

    /// Byte width of one logical element, `size_of::<T>()`.
    ///
    /// Slots are stored as `Option<T>`, so the backing storage may use
    /// more than `capacity() * element_size()` bytes.
    #[must_use]
    pub const fn element_size(&self) -> usize {
        size_of::<T>()
    }

    #[must_use]
    pub const fn is_allocated(&self) -> bool {
        self.storage.is_some()
    }

    /// Appends `item`, growing the storage when it is full.
    pub fn push(&mut self, item: T) {
        if self.storage.is_none() {
            self.allocate_first();
        }
        while self.capacity() <= self.count {
            self.grow();
        }
        let index = self.count;
        self.slots_mut()[index] = Some(item);
        self.count += 1;
    }

    /// Borrows the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`GrowVec::count`].
    #[must_use]
    pub fn elem(&self, index: usize) -> &T {
        self.get(index).map_or_else(
            || {
                panic!(
                    "index {index} out of bounds for vector of {} element(s)",
                    self.count
                )
            },
            |item| item,
        )
    }

    /// Borrows the element at `index`, or `None` past the live region.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        self.storage
            .as_ref()
            .and_then(|slots| slots.get(index))
            .and_then(Option::as_ref)
    }

    /// Removes the last live element. Capacity is left untouched.
    pub fn pop(&mut self) -> Result<T, VectorError> {
        if self.count == 0 {
            return Err(VectorError::Empty);
        }
        self.count -= 1;
        let index = self.count;
        self.slots_mut()[index].take().ok_or(VectorError::Empty)
    }

    /// Releases the storage and forgets every element. Safe to call twice.
    pub fn free(&mut self) {
        self.storage = None;
        self.count = 0;
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.live_slots(),
        }
    }

    fn live_slots(&self) -> &[Option<T>] {
        match self.storage.as_deref() {
            Some(slots) => &slots[..self.count],
            None => &[],
        }
    }

    fn slots_mut(&mut self) -> &mut [Option<T>] {
        self.storage.as_deref_mut().unwrap_or_default()
    }

    /// Single-slot allocation for a vector that has never held storage.
    fn allocate_first(&mut self) {
        assert!(
            self.storage.is_none(),
            "GrowVec bootstrap allocation on a vector that already owns storage \
             (count={}, capacity={})",
            self.count,
            self.capacity()
        );
        let slot: Box<[Option<T>]> = Box::new([None]);
        self.storage = Some(slot);
    }

    fn grow(&mut self) {
        let old = self.storage.take().unwrap_or_default();
        let new_capacity = old.len() * 2;
        let mut slots = Vec::with_capacity(new_capacity);
        slots.extend(old.into_vec());
        slots.resize_with(new_capacity, || None);
        self.storage = Some(slots.into_boxed_slice());
    }

    /// Grows until at least `needed` slots exist.
    fn reserve_for(&mut self, needed: usize) {
        if needed == 0 {
            return;
        }
        if self.storage.is_none() {
            self.allocate_first();
        }
        while self.capacity() < needed {
            self.grow();
        }
    }
}

impl<T: Clone> GrowVec<T> {
    /// Returns an owned copy of the element at `index`.
    pub fn elem_cloned(&self, index: usize) -> Result<T, VectorError> {
        self.get(index)
            .cloned()
            .ok_or(VectorError::OutOfBounds {
                index,
                count: self.count,
            })
    }

    /// Appends copies of every element of `other`, in order.
    pub fn extend(&mut self, other: &Self) {
        self.reserve_for(self.count + other.count);
        let start = self.count;
        let slots = self.slots_mut();
        for (offset, item) in other.iter().enumerate() {
            slots[start + offset] = Some(item.clone());
        }
        self.count += other.count;
    }

    /// Copies the live elements out into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.extend(self);
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.elem(index)
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        for item in iter {
            vector.push(item);
        }
        vector
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: serde::Serialize> serde::Serialize for GrowVec<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Borrowing iterator over the live elements of a [`GrowVec`].
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (first, rest) = self.slots.split_first()?;
        self.slots = rest;
        first.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unallocated() {
        let v: GrowVec<u64> = GrowVec::new();
        assert_eq!(v.count(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(!v.is_allocated());
        assert_eq!(v.element_size(), 8);
    }

    #[test]
    fn first_push_allocates_one_slot() {
        let mut v = GrowVec::new();
        v.push(7_i32);
        assert_eq!(v.capacity(), 1);
        assert_eq!(v.count(), 1);
        assert_eq!(v[0], 7);
    }

    #[test]
    fn growth_doubles() {
        let mut v = GrowVec::new();
        let mut seen = Vec::new();
        for i in 0..9 {
            v.push(i);
            seen.push(v.capacity());
        }
        assert_eq!(seen, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn pop_keeps_capacity() {
        let mut v: GrowVec<i32> = (0..5).collect();
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.pop(), Ok(4));
        assert_eq!(v.pop(), Ok(3));
        assert_eq!(v.count(), 3);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn pop_empty_is_error() {
        let mut v: GrowVec<i32> = GrowVec::new();
        assert_eq!(v.pop(), Err(VectorError::Empty));
    }

    #[test]
    fn push_after_pop_reuses_slot() {
        let mut v: GrowVec<i32> = (0..4).collect();
        v.pop().expect("pop");
        v.push(40);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.to_vec(), [0, 1, 2, 40]);
    }

    #[test]
    fn get_past_count_is_none() {
        let mut v: GrowVec<i32> = (0..3).collect();
        v.pop().expect("pop");
        assert_eq!(v.get(1), Some(&1));
        assert_eq!(v.get(2), None);
        assert_eq!(
            v.elem_cloned(2),
            Err(VectorError::OutOfBounds { index: 2, count: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn elem_panics_out_of_range() {
        let v: GrowVec<i32> = GrowVec::new();
        let _ = v.elem(0);
    }

    #[test]
    #[should_panic(expected = "bootstrap allocation")]
    fn bootstrap_on_allocated_storage_panics() {
        let mut v = GrowVec::new();
        v.push(1_u8);
        v.allocate_first();
    }

    #[test]
    fn free_is_idempotent() {
        let mut v: GrowVec<String> = ["a", "b"].iter().map(ToString::to_string).collect();
        v.free();
        assert!(!v.is_allocated());
        assert_eq!(v.count(), 0);
        assert_eq!(v.capacity(), 0);
        v.free();
        assert!(!v.is_allocated());
        v.push("c".to_string());
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn extend_into_empty_allocates_by_doubling() {
        let mut a: GrowVec<i32> = GrowVec::new();
        let b: GrowVec<i32> = (0..5).collect();
        a.extend(&b);
        assert_eq!(a.count(), 5);
        assert_eq!(a.capacity(), 8);
        assert_eq!(a.to_vec(), b.to_vec());
    }

    #[test]
    fn extend_with_empty_is_noop() {
        let mut a: GrowVec<i32> = GrowVec::new();
        a.extend(&GrowVec::new());
        assert!(!a.is_allocated());
        assert!(a.is_empty());
    }
}
