use crate::hash_table::{self, DEFAULT_TABLE_SIZE};
use std::hash::Hash;
use std::mem;
use std::slice;

/// The table grows once it holds more elements than it has chains.
pub const MAX_LOAD: f64 = 1.0;

/// A hash set that stores colliding elements in per-slot chains.
///
/// The number of chains is always prime. When the number of elements exceeds the number of
/// chains, the table is rebuilt with the next prime at least twice as large.
///
/// # Examples
/// ```
/// use classic_collections::hash_table::SeparateChainingHashSet;
///
/// let mut set = SeparateChainingHashSet::new();
/// assert!(set.insert("foo"));
/// assert!(!set.insert("foo"));
///
/// assert!(set.contains(&"foo"));
/// assert_eq!(set.len(), 1);
///
/// assert!(set.remove(&"foo"));
/// assert!(!set.remove(&"foo"));
/// ```
pub struct SeparateChainingHashSet<T> {
    chains: Vec<Vec<T>>,
    len: usize,
}

impl<T> SeparateChainingHashSet<T>
where
    T: Hash + Eq,
{
    /// Constructs a new, empty `SeparateChainingHashSet<T>` with `DEFAULT_TABLE_SIZE` chains.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_SIZE)
    }

    /// Constructs a new, empty `SeparateChainingHashSet<T>` with at least `capacity` chains.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::hash_table::SeparateChainingHashSet;
    ///
    /// let set: SeparateChainingHashSet<u32> = SeparateChainingHashSet::with_capacity(10);
    /// assert_eq!(set.capacity(), 11);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        SeparateChainingHashSet {
            chains: Self::allocate(hash_table::next_prime(capacity)),
            len: 0,
        }
    }

    fn allocate(len: usize) -> Vec<Vec<T>> {
        (0..len).map(|_| Vec::new()).collect()
    }

    /// Inserts an element into the set. Returns `false` if an equal element is already present.
    pub fn insert(&mut self, item: T) -> bool {
        let index = hash_table::slot(&item, self.chains.len());
        let chain = &mut self.chains[index];
        if chain.contains(&item) {
            return false;
        }

        chain.push(item);
        self.len += 1;
        if self.len > self.chains.len() {
            let new_capacity = hash_table::next_prime(2 * self.chains.len());
            self.rehash(new_capacity);
        }
        true
    }

    fn rehash(&mut self, new_capacity: usize) {
        debug!(
            "separate chaining rehash: {} -> {} chains, {} elements",
            self.chains.len(),
            new_capacity,
            self.len,
        );
        let old_chains = mem::replace(&mut self.chains, Self::allocate(new_capacity));
        for item in old_chains.into_iter().flat_map(|chain| chain.into_iter()) {
            let index = hash_table::slot(&item, new_capacity);
            self.chains[index].push(item);
        }
    }

    /// Removes an element from the set. Returns `false` if the element was not present.
    pub fn remove(&mut self, item: &T) -> bool {
        let index = hash_table::slot(item, self.chains.len());
        let chain = &mut self.chains[index];
        match chain.iter().position(|curr| curr == item) {
            Some(position) => {
                chain.swap_remove(position);
                self.len -= 1;
                true
            },
            None => false,
        }
    }

    /// Checks if an element exists in the set.
    pub fn contains(&self, item: &T) -> bool {
        let index = hash_table::slot(item, self.chains.len());
        self.chains[index].contains(item)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of chains in the table.
    pub fn capacity(&self) -> usize {
        self.chains.len()
    }

    /// Clears the set, removing all elements. The number of chains is unchanged.
    pub fn clear(&mut self) {
        for chain in &mut self.chains {
            chain.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over the set. The iterator yields elements in table order.
    pub fn iter(&self) -> SeparateChainingHashSetIter<'_, T> {
        SeparateChainingHashSetIter {
            chains: self.chains.iter(),
            curr: [].iter(),
        }
    }
}

impl<T> Default for SeparateChainingHashSet<T>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator for `SeparateChainingHashSet<T>`.
pub struct SeparateChainingHashSetIter<'a, T>
where
    T: 'a,
{
    chains: slice::Iter<'a, Vec<T>>,
    curr: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SeparateChainingHashSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.curr.next() {
                return Some(item);
            }
            self.curr = self.chains.next()?.iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SeparateChainingHashSet;

    #[test]
    fn test_len_empty() {
        let set: SeparateChainingHashSet<u32> = SeparateChainingHashSet::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 101);
    }

    #[test]
    fn test_insert() {
        let mut set = SeparateChainingHashSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = SeparateChainingHashSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = SeparateChainingHashSet::new();
        set.insert(1);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut set: SeparateChainingHashSet<u32> = SeparateChainingHashSet::new();
        assert!(!set.remove(&1));
    }

    #[test]
    fn test_rehash() {
        let mut set = SeparateChainingHashSet::with_capacity(3);
        assert_eq!(set.capacity(), 3);
        for i in 0..4 {
            set.insert(i);
        }
        assert_eq!(set.capacity(), 7);
        for i in 0..4 {
            assert!(set.contains(&i));
        }
        assert!(set.len() <= set.capacity());
    }

    #[test]
    fn test_clear() {
        let mut set = SeparateChainingHashSet::new();
        set.insert(1);
        set.insert(2);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&1));
    }

    #[test]
    fn test_iter() {
        let mut set = SeparateChainingHashSet::with_capacity(3);
        for i in 0..10 {
            set.insert(i);
        }
        let mut items: Vec<u32> = set.iter().cloned().collect();
        items.sort();
        assert_eq!(items, (0..10).collect::<Vec<u32>>());
    }
}
