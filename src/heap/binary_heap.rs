use crate::error::{Error, Result};
use std::iter::FromIterator;

/// The number of elements a heap can hold before it first grows.
pub const DEFAULT_CAPACITY: usize = 10;

/// A min-heap stored in a contiguous array.
///
/// Positions are numbered from one, so the children of the element at position `i` are at
/// positions `2i` and `2i + 1`, and every element is no greater than its children. When the
/// array is full, its capacity grows from `n` to `2n + 1`.
///
/// # Examples
/// ```
/// use classic_collections::heap::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
/// heap.insert(5);
/// heap.insert(3);
/// heap.insert(8);
/// heap.insert(1);
///
/// assert_eq!(heap.find_min(), Ok(&1));
/// assert_eq!(heap.delete_min(), Ok(1));
/// assert_eq!(heap.delete_min(), Ok(3));
/// assert_eq!(heap.delete_min(), Ok(5));
/// assert_eq!(heap.len(), 1);
/// ```
pub struct BinaryHeap<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BinaryHeap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinaryHeap<T>` with a capacity of `DEFAULT_CAPACITY`.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs a new, empty `BinaryHeap<T>` that can hold `capacity` elements before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeap {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn less(&self, pos_1: usize, pos_2: usize) -> bool {
        self.items[pos_1 - 1] < self.items[pos_2 - 1]
    }

    fn swap(&mut self, pos_1: usize, pos_2: usize) {
        self.items.swap(pos_1 - 1, pos_2 - 1);
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity * 2 + 1;
        debug!("binary heap grow: {} -> {}", self.capacity, new_capacity);
        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;
    }

    fn percolate_up(&mut self, mut hole: usize) {
        while hole > 1 && self.less(hole, hole / 2) {
            self.swap(hole, hole / 2);
            hole /= 2;
        }
    }

    fn percolate_down(&mut self, mut hole: usize) {
        let len = self.items.len();
        while hole * 2 <= len {
            let mut child = hole * 2;
            if child != len && self.less(child + 1, child) {
                child += 1;
            }
            if self.less(child, hole) {
                self.swap(child, hole);
                hole = child;
            } else {
                break;
            }
        }
    }

    /// Inserts an element into the heap.
    pub fn insert(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(item);
        let hole = self.items.len();
        self.percolate_up(hole);
    }

    /// Returns a reference to the minimum element of the heap.
    ///
    /// # Errors
    /// Returns `Error::Underflow` if the heap is empty.
    pub fn find_min(&self) -> Result<&T> {
        self.items.first().ok_or(Error::Underflow)
    }

    /// Removes and returns the minimum element of the heap.
    ///
    /// # Errors
    /// Returns `Error::Underflow` if the heap is empty.
    pub fn delete_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::Underflow);
        }

        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.percolate_down(1);
        }
        Ok(min)
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the heap can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears the heap, removing all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for BinaryHeap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for BinaryHeap<T>
where
    T: Ord,
{
    /// Builds a heap from a vector in linear time by percolating down every internal position,
    /// starting from the last one.
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        let capacity = (len + 2) * 11 / 10 - 1;
        let mut heap = BinaryHeap { items, capacity };
        if capacity > len {
            heap.items.reserve_exact(capacity - len);
        }
        for hole in (1..=len / 2).rev() {
            heap.percolate_down(hole);
        }
        heap
    }
}

impl<T> FromIterator<T> for BinaryHeap<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryHeap;
    use crate::error::Error;

    fn is_heap_ordered(heap: &BinaryHeap<u32>) -> bool {
        (2..=heap.len()).all(|pos| heap.items[pos / 2 - 1] <= heap.items[pos - 1])
    }

    #[test]
    fn test_len_empty() {
        let heap: BinaryHeap<u32> = BinaryHeap::new();
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), 10);
    }

    #[test]
    fn test_underflow() {
        let mut heap: BinaryHeap<u32> = BinaryHeap::new();
        assert_eq!(heap.find_min(), Err(Error::Underflow));
        assert_eq!(heap.delete_min(), Err(Error::Underflow));
    }

    #[test]
    fn test_insert_delete_min() {
        let mut heap = BinaryHeap::new();
        for item in &[5, 3, 8, 1] {
            heap.insert(*item);
        }
        assert_eq!(heap.delete_min(), Ok(1));
        assert_eq!(heap.delete_min(), Ok(3));
        assert_eq!(heap.delete_min(), Ok(5));
        assert_eq!(heap.find_min(), Ok(&8));
    }

    #[test]
    fn test_heap_order() {
        let mut heap = BinaryHeap::new();
        for item in &[8, 9, 1, 7, 2, 3, 5, 4, 6, 0] {
            heap.insert(*item);
            assert!(is_heap_ordered(&heap));
        }
        while heap.delete_min().is_ok() {
            assert!(is_heap_ordered(&heap));
        }
    }

    #[test]
    fn test_grow() {
        let mut heap = BinaryHeap::with_capacity(2);
        heap.insert(1);
        heap.insert(2);
        assert_eq!(heap.capacity(), 2);
        heap.insert(3);
        assert_eq!(heap.capacity(), 5);
        for i in 4..7 {
            heap.insert(i);
        }
        assert_eq!(heap.capacity(), 11);
    }

    #[test]
    fn test_grow_from_zero() {
        let mut heap = BinaryHeap::with_capacity(0);
        heap.insert(1);
        assert_eq!(heap.capacity(), 1);
        assert_eq!(heap.find_min(), Ok(&1));
    }

    #[test]
    fn test_from_vec() {
        let heap = BinaryHeap::from(vec![8, 9, 1, 7, 2, 3, 5, 4, 6, 0]);
        assert!(is_heap_ordered(&heap));
        assert_eq!(heap.len(), 10);
        assert_eq!(heap.capacity(), 12);
        assert_eq!(heap.find_min(), Ok(&0));
    }

    #[test]
    fn test_from_iter() {
        let mut heap: BinaryHeap<u32> = (0..20).rev().collect();
        for i in 0..20 {
            assert_eq!(heap.delete_min(), Ok(i));
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut heap = BinaryHeap::new();
        heap.insert(1);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), 10);
    }
}
