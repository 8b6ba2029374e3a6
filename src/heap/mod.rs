//! Min-ordered priority queues: an array-backed binary heap and the mergeable binomial queue and
//! leftist heap.

mod binary_heap;
mod binomial_queue;
mod leftist_heap;

pub use self::binary_heap::{BinaryHeap, DEFAULT_CAPACITY};
pub use self::binomial_queue::BinomialQueue;
pub use self::leftist_heap::LeftistHeap;
