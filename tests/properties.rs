use std::collections::BTreeMap;

use proptest::prelude::*;

use redblack::{RBTree, RBTreeError};

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Delete(i16),
}

fn op() -> impl Strategy<Value = Op> {
    // a narrow key range so deletes actually hit and duplicates happen
    prop_oneof![
        3 => (-64i16..64).prop_map(Op::Insert),
        2 => (-64i16..64).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn inserts_keep_invariants(values in proptest::collection::vec(any::<i32>(), 0..300)) {
        let mut tree = RBTree::new();
        for &v in &values {
            tree.insert(v);
            prop_assert!(tree.validate().is_ok());
            prop_assert!(tree.find(&v));
        }

        let inorder = tree.inorder();
        prop_assert!(inorder.windows(2).all(|w| w[0] <= w[1]));

        let mut sorted = values.clone();
        sorted.sort();
        prop_assert_eq!(&inorder, &sorted);

        let mut preorder = tree.preorder();
        let mut postorder = tree.postorder();
        prop_assert_eq!(preorder.len(), inorder.len());
        prop_assert_eq!(postorder.len(), inorder.len());
        preorder.sort();
        postorder.sort();
        prop_assert_eq!(&preorder, &sorted);
        prop_assert_eq!(&postorder, &sorted);
    }

    #[test]
    fn deleting_everything_empties_the_tree(values in proptest::collection::btree_set(any::<i32>(), 0..200), seed in any::<u64>()) {
        let mut tree = RBTree::new();
        for &v in &values {
            tree.insert(v);
        }

        // delete in a scrambled but reproducible order
        let mut order: Vec<_> = values.iter().copied().collect();
        order.sort_by_key(|v| (*v as u64).wrapping_mul(seed | 1).rotate_left(17));

        for v in order {
            prop_assert_eq!(tree.delete(&v), Ok(()));
            prop_assert!(!tree.find(&v));
            prop_assert!(tree.validate().is_ok());
        }

        prop_assert!(tree.is_empty());
        prop_assert!(tree.inorder().is_empty());
        prop_assert_eq!(tree.height(), 0);
    }

    #[test]
    fn matches_a_counting_model(ops in proptest::collection::vec(op(), 0..400)) {
        let mut tree = RBTree::new();
        let mut model: BTreeMap<i16, usize> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    tree.insert(v);
                    *model.entry(v).or_default() += 1;
                }
                Op::Delete(v) => {
                    let expected = match model.get_mut(&v) {
                        Some(count) => {
                            *count -= 1;
                            if *count == 0 { model.remove(&v); }
                            Ok(())
                        }
                        None => Err(RBTreeError::NotFound),
                    };
                    prop_assert_eq!(tree.delete(&v), expected);
                }
            }
            prop_assert!(tree.validate().is_ok());
        }

        let flattened: Vec<i16> = model.iter()
            .flat_map(|(&v, &n)| std::iter::repeat(v).take(n))
            .collect();
        prop_assert_eq!(tree.inorder(), flattened);
        prop_assert_eq!(tree.len(), model.values().sum::<usize>());
    }
}
