use classic_collections::hash_table::{
    CuckooHashSet, QuadraticProbingHashSet, SeparateChainingHashSet, SipHashFamily,
    CUCKOO_MAX_LOAD, QUADRATIC_PROBING_MAX_LOAD, SEPARATE_CHAINING_MAX_LOAD,
};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::HashSet;

const NUM_OF_OPERATIONS: usize = 20000;

macro_rules! hash_set_tests {
    ($($module_name:ident: $constructor:expr, $max_load:expr,)*) => {
        $(
            mod $module_name {
                use super::*;

                #[test]
                fn int_test_against_hash_set() {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $constructor;
                    let mut expected = HashSet::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, 2000u32);
                        if rng.gen::<bool>() {
                            assert_eq!(set.insert(key), expected.insert(key));
                            assert!(set.contains(&key));
                        } else {
                            assert_eq!(set.remove(&key), expected.remove(&key));
                            assert!(!set.contains(&key));
                        }

                        assert_eq!(set.len(), expected.len());
                        assert!(set.len() as f64 / set.capacity() as f64 <= $max_load);
                    }

                    let mut actual: Vec<u32> = set.iter().cloned().collect();
                    let mut expected: Vec<u32> = expected.into_iter().collect();
                    actual.sort();
                    expected.sort();
                    assert_eq!(actual, expected);
                }

                #[test]
                fn int_test_insert_then_remove_all() {
                    let mut set = $constructor;
                    for key in 0..500u32 {
                        assert!(set.insert(key));
                    }
                    for key in 0..500u32 {
                        assert!(set.contains(&key));
                        assert!(set.remove(&key));
                    }
                    assert!(set.is_empty());
                    assert_eq!(set.len(), 0);
                }

                #[test]
                fn int_test_clear() {
                    let mut set = $constructor;
                    for key in 0..100u32 {
                        set.insert(key);
                    }
                    let capacity = set.capacity();
                    set.clear();
                    assert!(set.is_empty());
                    assert_eq!(set.capacity(), capacity);
                    assert!((0..100u32).all(|key| !set.contains(&key)));
                }
            }
        )*
    }
}

hash_set_tests!(
    separate_chaining: SeparateChainingHashSet::with_capacity(7), SEPARATE_CHAINING_MAX_LOAD,
    quadratic_probing: QuadraticProbingHashSet::with_capacity(7), QUADRATIC_PROBING_MAX_LOAD,
    cuckoo: CuckooHashSet::from_parameters(
        7,
        SipHashFamily::from_seed(2, [1, 2, 3, 4]),
        SeedableRng::from_seed([5, 6, 7, 8]),
    ), CUCKOO_MAX_LOAD,
    cuckoo_three_functions: CuckooHashSet::from_parameters(
        7,
        SipHashFamily::from_seed(3, [1, 2, 3, 4]),
        SeedableRng::from_seed([5, 6, 7, 8]),
    ), CUCKOO_MAX_LOAD,
);

#[test]
fn int_test_cuckoo_single_expansion() {
    let mut set = CuckooHashSet::from_parameters(
        11,
        SipHashFamily::from_seed(2, [9, 9, 9, 9]),
        XorShiftRng::from_seed([3, 3, 3, 3]),
    );
    let mut capacities = Vec::new();
    for key in &["a", "b", "c", "d", "e"] {
        set.insert(*key);
        capacities.push(set.capacity());
    }
    assert_eq!(capacities, vec![11, 11, 11, 11, 29]);
}

#[test]
fn int_test_cuckoo_reproducible() {
    let build = || {
        let mut set = CuckooHashSet::from_parameters(
            11,
            SipHashFamily::from_seed(2, [1, 2, 3, 4]),
            XorShiftRng::from_seed([5, 6, 7, 8]),
        );
        for key in 0..1000u32 {
            set.insert(key);
        }
        set.iter().cloned().collect::<Vec<u32>>()
    };
    assert_eq!(build(), build());
}

#[test]
fn int_test_strings() {
    let mut chaining = SeparateChainingHashSet::new();
    let mut probing = QuadraticProbingHashSet::new();
    let mut cuckoo = CuckooHashSet::new();
    for word in "the quick brown fox jumps over the lazy dog".split(' ') {
        chaining.insert(word.to_string());
        probing.insert(word.to_string());
        cuckoo.insert(word.to_string());
    }
    assert_eq!(chaining.len(), 8);
    assert_eq!(probing.len(), 8);
    assert_eq!(cuckoo.len(), 8);
    assert!(chaining.contains(&"fox".to_string()));
    assert!(probing.contains(&"fox".to_string()));
    assert!(cuckoo.contains(&"fox".to_string()));
}
