use crate::hash_table::{self, DEFAULT_TABLE_SIZE};
use std::hash::Hash;
use std::mem;
use std::slice;

/// The table grows once more than half of its slots are occupied.
pub const MAX_LOAD: f64 = 0.5;

struct HashEntry<T> {
    item: T,
    is_active: bool,
}

/// A hash set that uses open addressing with a quadratic probe sequence.
///
/// Removed elements are left behind as inactive entries so that later probe sequences still
/// pass over them. Both active and inactive entries count towards the occupancy that triggers
/// a rehash, which keeps at least half of the prime-sized table empty and guarantees that a
/// probe sequence always reaches either the element or an empty slot.
///
/// # Examples
/// ```
/// use classic_collections::hash_table::QuadraticProbingHashSet;
///
/// let mut set = QuadraticProbingHashSet::new();
/// assert!(set.insert(1));
/// assert!(set.insert(2));
///
/// assert!(set.remove(&1));
/// assert!(!set.contains(&1));
/// assert!(set.contains(&2));
/// ```
pub struct QuadraticProbingHashSet<T> {
    entries: Vec<Option<HashEntry<T>>>,
    occupied: usize,
    len: usize,
}

impl<T> QuadraticProbingHashSet<T>
where
    T: Hash + Eq,
{
    /// Constructs a new, empty `QuadraticProbingHashSet<T>` with `DEFAULT_TABLE_SIZE` slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_SIZE)
    }

    /// Constructs a new, empty `QuadraticProbingHashSet<T>` with at least `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        QuadraticProbingHashSet {
            entries: Self::allocate(capacity),
            occupied: 0,
            len: 0,
        }
    }

    fn allocate(capacity: usize) -> Vec<Option<HashEntry<T>>> {
        (0..hash_table::next_prime(capacity)).map(|_| None).collect()
    }

    // Probes h, h + 1, h + 4, h + 9, ... until it finds an empty slot or an entry holding an
    // equal element.
    fn find_pos(&self, item: &T) -> usize {
        let len = self.entries.len();
        let mut offset = 1;
        let mut pos = hash_table::slot(item, len);

        while let Some(ref entry) = self.entries[pos] {
            if entry.item == *item {
                break;
            }
            pos += offset;
            offset += 2;
            if pos >= len {
                pos -= len;
            }
        }

        pos
    }

    fn is_active(&self, pos: usize) -> bool {
        match self.entries[pos] {
            Some(ref entry) => entry.is_active,
            None => false,
        }
    }

    /// Inserts an element into the set. Returns `false` if an equal element is already present.
    ///
    /// If an equal element was previously removed, its slot is reused.
    pub fn insert(&mut self, item: T) -> bool {
        let pos = self.find_pos(&item);
        if self.is_active(pos) {
            return false;
        }

        if self.entries[pos].is_none() {
            self.occupied += 1;
        }
        self.entries[pos] = Some(HashEntry { item, is_active: true });
        self.len += 1;

        if self.occupied > self.entries.len() / 2 {
            let new_capacity = 2 * self.entries.len();
            self.rehash(new_capacity);
        }
        true
    }

    fn rehash(&mut self, new_capacity: usize) {
        let old_entries = mem::replace(&mut self.entries, Self::allocate(new_capacity));
        debug!(
            "quadratic probing rehash: {} -> {} slots, {} elements",
            old_entries.len(),
            self.entries.len(),
            self.len,
        );
        self.occupied = 0;
        self.len = 0;

        for entry in old_entries.into_iter().filter_map(|entry| entry) {
            if entry.is_active {
                self.insert(entry.item);
            }
        }
    }

    /// Removes an element from the set. Returns `false` if the element was not present.
    pub fn remove(&mut self, item: &T) -> bool {
        let pos = self.find_pos(item);
        match self.entries[pos] {
            Some(ref mut entry) if entry.is_active => {
                entry.is_active = false;
                self.len -= 1;
                true
            },
            _ => false,
        }
    }

    /// Checks if an element exists in the set.
    pub fn contains(&self, item: &T) -> bool {
        self.is_active(self.find_pos(item))
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Clears the set, removing all elements and inactive entries. The number of slots is
    /// unchanged.
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            *entry = None;
        }
        self.occupied = 0;
        self.len = 0;
    }

    /// Returns an iterator over the set. The iterator yields elements in table order.
    pub fn iter(&self) -> QuadraticProbingHashSetIter<'_, T> {
        QuadraticProbingHashSetIter {
            entries: self.entries.iter(),
        }
    }
}

impl<T> Default for QuadraticProbingHashSet<T>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator for `QuadraticProbingHashSet<T>`.
pub struct QuadraticProbingHashSetIter<'a, T>
where
    T: 'a,
{
    entries: slice::Iter<'a, Option<HashEntry<T>>>,
}

impl<'a, T> Iterator for QuadraticProbingHashSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.entries.next() {
            match *entry {
                Some(ref entry) if entry.is_active => return Some(&entry.item),
                _ => {},
            }
        }
        None
    }
}
