use classic_collections::avl_tree::AvlTree;
use classic_collections::binary_search_tree::BinarySearchTree;
use classic_collections::Error;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 10000;

macro_rules! tree_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use super::*;

                #[test]
                fn int_test_against_btree_set() {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, 1000u32);
                        if rng.gen::<bool>() {
                            assert_eq!(tree.insert(key), expected.insert(key));
                        } else {
                            assert_eq!(tree.remove(&key), expected.take(&key));
                        }

                        assert_eq!(tree.len(), expected.len());
                        assert_eq!(tree.contains(&key), expected.contains(&key));
                        assert_eq!(tree.find_min().ok(), expected.iter().next());
                        assert_eq!(tree.find_max().ok(), expected.iter().next_back());
                    }

                    assert_eq!(
                        tree.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );
                    assert_eq!(
                        tree.into_iter().collect::<Vec<u32>>(),
                        expected.into_iter().collect::<Vec<u32>>(),
                    );
                }

                #[test]
                fn int_test_in_order_traversal() {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([2, 2, 2, 2]);
                    let mut tree = $type_name::new();
                    for _ in 0..1000 {
                        tree.insert(rng.next_u32());
                        let keys: Vec<&u32> = tree.iter().collect();
                        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
                    }
                }

                #[test]
                fn int_test_remove_all() {
                    let mut tree = $type_name::new();
                    for key in &[8, 9, 1, 7, 2, 3, 5, 4, 6, 0] {
                        tree.insert(*key);
                    }
                    for key in &[5, 0, 9, 1, 8, 2, 7, 3, 6, 4] {
                        assert_eq!(tree.remove(key), Some(*key));
                    }
                    assert!(tree.is_empty());
                    assert_eq!(tree.len(), 0);
                    assert_eq!(tree.find_min(), Err(Error::Underflow));
                    assert_eq!(tree.find_max(), Err(Error::Underflow));
                }
            }
        )*
    }
}

tree_tests!(
    avl_tree: AvlTree,
    binary_search_tree: BinarySearchTree,
);

#[test]
fn int_test_avl_height_bound() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([3, 3, 3, 3]);
    let mut tree = AvlTree::new();
    let mut keys = Vec::new();

    for key in 0..4096u32 {
        tree.insert(key);
        keys.push(key);
    }
    // an avl tree with n nodes is no taller than 1.44 * log2(n + 2)
    assert!(tree.height() as f64 <= 1.44 * (tree.len() as f64 + 2.0).log2());

    rng.shuffle(&mut keys);
    for key in keys.iter().take(3000) {
        assert_eq!(tree.remove(key), Some(*key));
        assert!(tree.height() as f64 <= 1.44 * (tree.len() as f64 + 2.0).log2());
    }
    assert_eq!(tree.len(), 1096);
}
