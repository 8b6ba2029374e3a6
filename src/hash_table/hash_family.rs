use rand::{self, Rng, SeedableRng, XorShiftRng};
use siphasher::sip::SipHasher;
use std::hash::{Hash, Hasher};

/// The number of hash functions in a family when none is given.
pub const DEFAULT_FUNCTION_COUNT: usize = 2;

/// A family of independent hash functions used by `CuckooHashSet`.
///
/// `hash` must be deterministic for a fixed family: the same element and function index always
/// produce the same value until `regenerate` is called.
pub trait HashFamily<T>
where
    T: ?Sized,
{
    /// Hashes `item` with the function at index `which`, where `which < self.function_count()`.
    fn hash(&self, item: &T, which: usize) -> u64;

    /// Returns the number of functions in the family.
    fn function_count(&self) -> usize;

    /// Replaces every function in the family with a newly generated one.
    fn regenerate(&mut self);
}

/// A hash family of keyed SipHash functions. Keys are drawn from an internal `XorShiftRng`, so
/// a family built with `from_seed` produces the same functions on every run.
///
/// # Examples
/// ```
/// use classic_collections::hash_table::{HashFamily, SipHashFamily};
///
/// let mut family = SipHashFamily::from_seed(2, [1, 2, 3, 4]);
/// assert_eq!(HashFamily::<u32>::function_count(&family), 2);
///
/// let hash = family.hash(&7u32, 0);
/// assert_eq!(family.hash(&7u32, 0), hash);
///
/// HashFamily::<u32>::regenerate(&mut family);
/// assert_ne!(family.hash(&7u32, 0), hash);
/// ```
pub struct SipHashFamily {
    hashers: Vec<SipHasher>,
    rng: XorShiftRng,
}

impl SipHashFamily {
    /// Constructs a family of `function_count` functions keyed from a randomly seeded generator.
    ///
    /// # Panics
    /// Panics if `function_count` is zero.
    pub fn new(function_count: usize) -> Self {
        Self::from_rng(function_count, rand::weak_rng())
    }

    /// Constructs a family of `function_count` functions keyed from a generator with a fixed
    /// seed. The seed must not be all zeros.
    ///
    /// # Panics
    /// Panics if `function_count` is zero or if `seed` is all zeros.
    pub fn from_seed(function_count: usize, seed: [u32; 4]) -> Self {
        Self::from_rng(function_count, XorShiftRng::from_seed(seed))
    }

    /// Constructs a family of `function_count` functions keyed from `rng`.
    ///
    /// # Panics
    /// Panics if `function_count` is zero.
    pub fn from_rng(function_count: usize, mut rng: XorShiftRng) -> Self {
        assert!(function_count > 0);
        SipHashFamily {
            hashers: Self::generate_hashers(function_count, &mut rng),
            rng,
        }
    }

    fn generate_hashers(function_count: usize, rng: &mut XorShiftRng) -> Vec<SipHasher> {
        (0..function_count)
            .map(|_| SipHasher::new_with_keys(rng.next_u64(), rng.next_u64()))
            .collect()
    }
}

impl Default for SipHashFamily {
    fn default() -> Self {
        Self::new(DEFAULT_FUNCTION_COUNT)
    }
}

impl<T> HashFamily<T> for SipHashFamily
where
    T: Hash + ?Sized,
{
    fn hash(&self, item: &T, which: usize) -> u64 {
        let sip = &mut self.hashers[which].clone();
        item.hash(sip);
        sip.finish()
    }

    fn function_count(&self) -> usize {
        self.hashers.len()
    }

    fn regenerate(&mut self) {
        let function_count = self.hashers.len();
        self.hashers = Self::generate_hashers(function_count, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::{HashFamily, SipHashFamily};

    #[test]
    fn test_function_count() {
        let family = SipHashFamily::from_seed(3, [1, 1, 1, 1]);
        assert_eq!(HashFamily::<u32>::function_count(&family), 3);
    }

    #[test]
    #[should_panic]
    fn test_zero_functions() {
        SipHashFamily::from_seed(0, [1, 1, 1, 1]);
    }

    #[test]
    fn test_deterministic() {
        let family_1 = SipHashFamily::from_seed(2, [1, 2, 3, 4]);
        let family_2 = SipHashFamily::from_seed(2, [1, 2, 3, 4]);
        for which in 0..2 {
            assert_eq!(family_1.hash("foo", which), family_2.hash("foo", which));
        }
    }

    #[test]
    fn test_functions_differ() {
        let family = SipHashFamily::from_seed(2, [1, 2, 3, 4]);
        assert_ne!(family.hash("foo", 0), family.hash("foo", 1));
    }

    #[test]
    fn test_regenerate() {
        let mut family = SipHashFamily::from_seed(2, [1, 2, 3, 4]);
        let before = family.hash("foo", 0);
        HashFamily::<str>::regenerate(&mut family);
        assert_ne!(family.hash("foo", 0), before);
        assert_eq!(HashFamily::<str>::function_count(&family), 2);
    }
}
