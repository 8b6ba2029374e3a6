//! Hash sets that resolve collisions with separate chaining, quadratic probing, or cuckoo
//! hashing. Every table is sized to a prime number of slots.

mod cuckoo;
mod hash_family;
mod quadratic_probing;
mod separate_chaining;

pub use self::cuckoo::{CuckooHashSet, CuckooHashSetIter, ALLOWED_REHASHES, MAX_DISPLACEMENTS};
pub use self::hash_family::{HashFamily, SipHashFamily, DEFAULT_FUNCTION_COUNT};
pub use self::quadratic_probing::{QuadraticProbingHashSet, QuadraticProbingHashSetIter};
pub use self::separate_chaining::{SeparateChainingHashSet, SeparateChainingHashSetIter};

pub use self::cuckoo::MAX_LOAD as CUCKOO_MAX_LOAD;
pub use self::quadratic_probing::MAX_LOAD as QUADRATIC_PROBING_MAX_LOAD;
pub use self::separate_chaining::MAX_LOAD as SEPARATE_CHAINING_MAX_LOAD;

use siphasher::sip::SipHasher;
use std::hash::{Hash, Hasher};

/// The number of slots a table is created with when no capacity is given.
pub const DEFAULT_TABLE_SIZE: usize = 101;

/// Returns `true` if `n` is prime.
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }

    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }

    true
}

/// Returns the smallest prime that is greater than or equal to `n`.
pub fn next_prime(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }

    let mut n = if n % 2 == 0 { n + 1 } else { n };
    while !is_prime(n) {
        n += 2;
    }
    n
}

// fixed keys so that slot positions are stable across runs
fn hash<T>(item: &T) -> u64
where
    T: Hash + ?Sized,
{
    let mut hasher = SipHasher::new();
    item.hash(&mut hasher);
    hasher.finish()
}

fn slot<T>(item: &T, len: usize) -> usize
where
    T: Hash + ?Sized,
{
    (hash(item) % len as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::{is_prime, next_prime, slot};

    #[test]
    fn test_is_prime() {
        let primes: Vec<usize> = (0..30).filter(|n| is_prime(*n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime_rejects_even() {
        assert!(!is_prime(4));
        assert!(!is_prime(100));
        assert!(!is_prime(1));
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(11), 11);
        assert_eq!(next_prime(27), 29);
        assert_eq!(next_prime(202), 211);
    }

    #[test]
    fn test_slot_is_stable() {
        assert_eq!(slot(&"foo", 101), slot(&"foo", 101));
        assert!(slot(&12345u64, 7) < 7);
    }
}
