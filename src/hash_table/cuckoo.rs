use crate::hash_table::{self, HashFamily, SipHashFamily, DEFAULT_FUNCTION_COUNT, DEFAULT_TABLE_SIZE};
use rand::{self, Rng, XorShiftRng};
use std::hash::Hash;
use std::mem;
use std::slice;

/// The table expands before an insertion would push its load factor above this value.
pub const MAX_LOAD: f64 = 0.40;
/// The number of displacements an insertion attempts before giving up on the current functions.
pub const MAX_DISPLACEMENTS: usize = 100;
/// The number of times the hash family is regenerated before the table expands instead.
pub const ALLOWED_REHASHES: usize = 1;

// attempts at picking a displacement slot different from the previous one
const MAX_SLOT_RETRIES: usize = 5;

/// A hash set that stores every element at one of the positions given by a family of hash
/// functions.
///
/// Lookups and removals inspect at most one slot per hash function. An insertion that finds
/// every candidate slot occupied evicts a randomly chosen occupant and relocates it in turn.
/// If the chain of evictions does not end within `MAX_DISPLACEMENTS` steps, the hash family is
/// regenerated and every element reinserted, and if that has already happened
/// `ALLOWED_REHASHES` times, the table expands instead.
///
/// The generator that picks eviction victims is injectable through `from_parameters` so that
/// insertions can be reproduced exactly.
///
/// # Examples
/// ```
/// use classic_collections::hash_table::CuckooHashSet;
///
/// let mut set = CuckooHashSet::new();
/// assert!(set.insert(1));
/// assert!(!set.insert(1));
/// assert!(set.contains(&1));
///
/// assert!(set.remove(&1));
/// assert!(set.is_empty());
/// ```
pub struct CuckooHashSet<T, H = SipHashFamily> {
    slots: Vec<Option<T>>,
    len: usize,
    rehashes: usize,
    hash_family: H,
    rng: XorShiftRng,
}

impl<T> CuckooHashSet<T>
where
    T: Hash + Eq,
{
    /// Constructs a new, empty `CuckooHashSet<T>` with `DEFAULT_TABLE_SIZE` slots and
    /// `DEFAULT_FUNCTION_COUNT` randomly keyed SipHash functions.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_SIZE)
    }

    /// Constructs a new, empty `CuckooHashSet<T>` with at least `capacity` slots and
    /// `DEFAULT_FUNCTION_COUNT` randomly keyed SipHash functions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parameters(
            capacity,
            SipHashFamily::new(DEFAULT_FUNCTION_COUNT),
            rand::weak_rng(),
        )
    }
}

impl<T, H> CuckooHashSet<T, H>
where
    T: Eq,
    H: HashFamily<T>,
{
    /// Constructs a new, empty `CuckooHashSet<T, H>` with at least `capacity` slots, hashing
    /// with `hash_family` and choosing eviction victims with `rng`.
    ///
    /// # Panics
    /// Panics if `hash_family` has no functions.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::hash_table::{CuckooHashSet, SipHashFamily};
    /// use rand::{SeedableRng, XorShiftRng};
    ///
    /// let mut set = CuckooHashSet::from_parameters(
    ///     11,
    ///     SipHashFamily::from_seed(2, [1, 2, 3, 4]),
    ///     XorShiftRng::from_seed([5, 6, 7, 8]),
    /// );
    /// assert_eq!(set.capacity(), 11);
    ///
    /// for i in 0..4 {
    ///     set.insert(i);
    /// }
    /// assert_eq!(set.capacity(), 11);
    ///
    /// set.insert(4);
    /// assert_eq!(set.capacity(), 29);
    /// ```
    pub fn from_parameters(capacity: usize, hash_family: H, rng: XorShiftRng) -> Self {
        assert!(hash_family.function_count() > 0);
        CuckooHashSet {
            slots: Self::allocate(hash_table::next_prime(capacity)),
            len: 0,
            rehashes: 0,
            hash_family,
            rng,
        }
    }

    fn allocate(len: usize) -> Vec<Option<T>> {
        (0..len).map(|_| None).collect()
    }

    fn slot(&self, item: &T, which: usize) -> usize {
        (self.hash_family.hash(item, which) % self.slots.len() as u64) as usize
    }

    fn find_pos(&self, item: &T) -> Option<usize> {
        (0..self.hash_family.function_count())
            .map(|which| self.slot(item, which))
            .find(|pos| match self.slots[*pos] {
                Some(ref curr) => curr == item,
                None => false,
            })
    }

    /// Inserts an element into the set. Returns `false` if an equal element is already present.
    ///
    /// If the insertion would raise the load factor above `MAX_LOAD`, the table expands first.
    pub fn insert(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }

        if (self.len + 1) as f64 > self.slots.len() as f64 * MAX_LOAD {
            self.expand();
        }

        self.insert_item(item);
        true
    }

    fn insert_item(&mut self, mut item: T) {
        loop {
            item = match self.try_place(item) {
                Ok(()) => return,
                Err(item) => item,
            };

            trace!(
                "cuckoo eviction walk exceeded {} displacements with {} of {} slots used",
                MAX_DISPLACEMENTS,
                self.len,
                self.slots.len(),
            );
            self.rehashes += 1;
            if self.rehashes > ALLOWED_REHASHES {
                self.expand();
                self.rehashes = 0;
            } else {
                self.regenerate();
            }
        }
    }

    // Returns the element left without a slot if the eviction walk does not terminate.
    fn try_place(&mut self, mut item: T) -> Result<(), T> {
        let function_count = self.hash_family.function_count();
        let mut last_pos = None;

        for _ in 0..MAX_DISPLACEMENTS {
            for which in 0..function_count {
                let pos = self.slot(&item, which);
                if self.slots[pos].is_none() {
                    self.slots[pos] = Some(item);
                    self.len += 1;
                    return Ok(());
                }
            }

            let which = self.rng.gen_range(0, function_count);
            let mut pos = self.slot(&item, which);
            let mut retries = 0;
            while Some(pos) == last_pos && retries < MAX_SLOT_RETRIES {
                let which = self.rng.gen_range(0, function_count);
                pos = self.slot(&item, which);
                retries += 1;
            }

            if let Some(ref mut occupant) = self.slots[pos] {
                mem::swap(occupant, &mut item);
            }
            last_pos = Some(pos);
        }

        Err(item)
    }

    fn expand(&mut self) {
        let new_capacity = (self.slots.len() as f64 / MAX_LOAD) as usize;
        self.rehash(new_capacity);
    }

    fn regenerate(&mut self) {
        debug!("cuckoo hash family regenerated with {} slots", self.slots.len());
        self.hash_family.regenerate();
        let capacity = self.slots.len();
        self.rehash(capacity);
    }

    fn rehash(&mut self, new_capacity: usize) {
        let old_slots = mem::replace(
            &mut self.slots,
            Self::allocate(hash_table::next_prime(new_capacity)),
        );
        debug!(
            "cuckoo rehash: {} -> {} slots, {} elements",
            old_slots.len(),
            self.slots.len(),
            self.len,
        );
        self.len = 0;

        for item in old_slots.into_iter().filter_map(|slot| slot) {
            self.insert_item(item);
        }
    }

    /// Removes an element from the set. Returns `false` if the element was not present.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.find_pos(item) {
            Some(pos) => {
                self.slots[pos] = None;
                self.len -= 1;
                true
            },
            None => false,
        }
    }

    /// Checks if an element exists in the set.
    pub fn contains(&self, item: &T) -> bool {
        self.find_pos(item).is_some()
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
        self.slots.len()
    }

    /// Returns the hash family the set currently hashes with.
    pub fn hash_family(&self) -> &H {
        &self.hash_family
    }

    /// Clears the set, removing all elements. The number of slots is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over the set. The iterator yields elements in table order.
    pub fn iter(&self) -> CuckooHashSetIter<'_, T> {
        CuckooHashSetIter {
            slots: self.slots.iter(),
        }
    }
}

impl<T> Default for CuckooHashSet<T>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator for `CuckooHashSet<T, H>`.
pub struct CuckooHashSetIter<'a, T>
where
    T: 'a,
{
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for CuckooHashSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.next() {
            if let Some(ref item) = *slot {
                return Some(item);
            }
        }
        None
    }
}
