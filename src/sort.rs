//! In-place sorting and selection over mutable slices of totally ordered elements.
//!
//! | Function         | Stable | Time (worst)  | Extra space |
//! |------------------|--------|---------------|-------------|
//! | `insertion_sort` | yes    | O(n^2)        | O(1)        |
//! | `shell_sort`     | no     | O(n^2)        | O(1)        |
//! | `heap_sort`      | no     | O(n log n)    | O(1)        |
//! | `merge_sort`     | yes    | O(n log n)    | O(n)        |
//! | `quick_sort`     | no     | O(n^2)        | O(log n)    |
//!
//! `quick_sort` and the selection functions choose the median of the first, middle, and last
//! elements as the pivot and fall back to insertion sort for ranges of at most `CUTOFF`
//! elements. Elements equal to the pivot are not grouped, and adversarial inputs still take
//! quadratic time.

/// Ranges of at most this many elements are insertion sorted by `quick_sort` and
/// `quick_select`.
pub const CUTOFF: usize = 3;

/// Sorts a slice by moving each element left past every greater element.
///
/// # Examples
/// ```
/// use classic_collections::sort;
///
/// let mut items = [8, 9, 1, 7, 2, 3, 5, 4, 6, 0];
/// sort::insertion_sort(&mut items);
/// assert_eq!(items, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn insertion_sort<T>(items: &mut [T])
where
    T: Ord,
{
    for pos in 1..items.len() {
        let mut curr = pos;
        while curr > 0 && items[curr] < items[curr - 1] {
            items.swap(curr, curr - 1);
            curr -= 1;
        }
    }
}

/// Sorts a slice by insertion sorting the subsequences of elements `gap` apart, for
/// `gap = n / 2, n / 4, ..., 1`.
pub fn shell_sort<T>(items: &mut [T])
where
    T: Ord,
{
    let mut gap = items.len() / 2;
    while gap > 0 {
        for pos in gap..items.len() {
            let mut curr = pos;
            while curr >= gap && items[curr] < items[curr - gap] {
                items.swap(curr, curr - gap);
                curr -= gap;
            }
        }
        gap /= 2;
    }
}

// Sifts the element at `hole` down a max-heap occupying `items[..len]`.
fn percolate_down<T>(items: &mut [T], mut hole: usize, len: usize)
where
    T: Ord,
{
    while 2 * hole + 1 < len {
        let mut child = 2 * hole + 1;
        if child + 1 < len && items[child] < items[child + 1] {
            child += 1;
        }
        if items[hole] < items[child] {
            items.swap(hole, child);
            hole = child;
        } else {
            break;
        }
    }
}

/// Sorts a slice by building a max-heap in place and repeatedly swapping its root behind the
/// shrinking heap.
pub fn heap_sort<T>(items: &mut [T])
where
    T: Ord,
{
    let len = items.len();
    for hole in (0..len / 2).rev() {
        percolate_down(items, hole, len);
    }
    for end in (1..len).rev() {
        items.swap(0, end);
        percolate_down(items, 0, end);
    }
}

/// Sorts a slice by recursively sorting both halves and merging them through a single
/// auxiliary buffer that is allocated once.
///
/// # Examples
/// ```
/// use classic_collections::sort;
///
/// let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// sort::merge_sort(&mut items);
/// assert_eq!(items, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort<T>(items: &mut [T])
where
    T: Ord + Clone,
{
    if items.len() < 2 {
        return;
    }
    let right = items.len() - 1;
    let mut buffer = items.to_vec();
    merge_sort_range(items, &mut buffer, 0, right);
}

fn merge_sort_range<T>(items: &mut [T], buffer: &mut [T], left: usize, right: usize)
where
    T: Ord + Clone,
{
    if left < right {
        let center = left + (right - left) / 2;
        merge_sort_range(items, buffer, left, center);
        merge_sort_range(items, buffer, center + 1, right);
        merge(items, buffer, left, center + 1, right);
    }
}

// Merges the sorted runs items[left_pos..right_pos] and items[right_pos..=right_end].
fn merge<T>(items: &mut [T], buffer: &mut [T], left_pos: usize, right_pos: usize, right_end: usize)
where
    T: Ord + Clone,
{
    let left_end = right_pos;
    let mut left = left_pos;
    let mut right = right_pos;
    let mut pos = left_pos;

    while left < left_end && right <= right_end {
        // taking from the left run on ties keeps the sort stable
        if items[left] <= items[right] {
            buffer[pos] = items[left].clone();
            left += 1;
        } else {
            buffer[pos] = items[right].clone();
            right += 1;
        }
        pos += 1;
    }
    while left < left_end {
        buffer[pos] = items[left].clone();
        left += 1;
        pos += 1;
    }
    while right <= right_end {
        buffer[pos] = items[right].clone();
        right += 1;
        pos += 1;
    }

    items[left_pos..=right_end].clone_from_slice(&buffer[left_pos..=right_end]);
}

// Orders the first, middle, and last elements and moves the median to `len - 2`, where it
// serves as the pivot. The first and last elements then act as sentinels for partitioning.
//
// precondition: the slice has more than `CUTOFF` elements
fn median_of_three<T>(items: &mut [T]) -> usize
where
    T: Ord,
{
    let right = items.len() - 1;
    let center = right / 2;
    if items[center] < items[0] {
        items.swap(0, center);
    }
    if items[right] < items[0] {
        items.swap(0, right);
    }
    if items[right] < items[center] {
        items.swap(center, right);
    }
    items.swap(center, right - 1);
    right - 1
}

// Partitions around the median of three and returns the final position of the pivot.
//
// precondition: the slice has more than `CUTOFF` elements
fn partition<T>(items: &mut [T]) -> usize
where
    T: Ord,
{
    let pivot = median_of_three(items);
    let mut i = 0;
    let mut j = pivot;
    loop {
        i += 1;
        while items[i] < items[pivot] {
            i += 1;
        }
        j -= 1;
        while items[pivot] < items[j] {
            j -= 1;
        }
        if i < j {
            items.swap(i, j);
        } else {
            break;
        }
    }
    items.swap(i, pivot);
    i
}

/// Sorts a slice with quicksort, using a median-of-three pivot and insertion sort for ranges
/// of at most `CUTOFF` elements.
///
/// # Examples
/// ```
/// use classic_collections::sort;
///
/// let mut items = [8, 9, 1, 7, 2, 3, 5, 4, 6, 0];
/// sort::quick_sort(&mut items);
/// assert_eq!(items, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn quick_sort<T>(items: &mut [T])
where
    T: Ord,
{
    if items.len() <= CUTOFF {
        insertion_sort(items);
        return;
    }

    let pivot = partition(items);
    let (smaller, rest) = items.split_at_mut(pivot);
    quick_sort(smaller);
    quick_sort(&mut rest[1..]);
}

/// Rearranges a slice so that the element at index `k` is the one that would be there if the
/// slice were sorted, with no greater element before it and no smaller element after it.
/// Returns a reference to that element.
///
/// Like `quick_sort`, but only recurses into the side of the partition that contains `k`.
///
/// # Panics
/// Panics if `k` is out of bounds.
///
/// # Examples
/// ```
/// use classic_collections::sort;
///
/// let mut items = [8, 9, 1, 7, 2, 3, 5, 4, 6, 0];
/// assert_eq!(*sort::quick_select(&mut items, 4), 4);
/// assert!(items[..4].iter().all(|item| *item < 4));
/// assert!(items[5..].iter().all(|item| *item > 4));
/// ```
pub fn quick_select<T>(items: &mut [T], k: usize) -> &T
where
    T: Ord,
{
    assert!(k < items.len());

    if items.len() <= CUTOFF {
        insertion_sort(items);
        return &items[k];
    }

    let pivot = partition(items);
    if k < pivot {
        quick_select(&mut items[..pivot], k)
    } else if k > pivot {
        quick_select(&mut items[pivot + 1..], k - pivot - 1)
    } else {
        &items[pivot]
    }
}

/// Moves the median of a slice to index `len / 2`, partitioning the rest around it as
/// `quick_select` does. An empty slice is left unchanged.
///
/// # Examples
/// ```
/// use classic_collections::sort;
///
/// let mut items = [8, 9, 1, 7, 2, 3, 5, 4, 6, 0];
/// sort::quick_select_sort(&mut items);
/// assert_eq!(items[5], 5);
/// ```
pub fn quick_select_sort<T>(items: &mut [T])
where
    T: Ord,
{
    if !items.is_empty() {
        let median = items.len() / 2;
        quick_select(items, median);
    }
}
