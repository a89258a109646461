use redblack::concurrent_traversal::{check_membership, run_processes, HarnessConfig, Item, Process};
use redblack::{Color, RBTree, RBTreeError};

fn sample() -> RBTree<i32> {
    let mut tree = RBTree::new();
    for v in [55, 40, 30, 35] {
        tree.insert(v);
    }
    tree
}

#[test]
fn four_inserts() {
    let tree = sample();
    assert_eq!(tree.inorder(), [30, 35, 40, 55]);
    assert_eq!(tree.validate(), Ok(2));

    let snapshot = tree.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.get(&40), Some(&[(30, Color::Black), (55, Color::Black)][..]));
    assert_eq!(snapshot.get(&30), Some(&[(35, Color::Red)][..]));
    assert_eq!(snapshot.to_string(), "{40: [(30, Black), (55, Black)], 30: [(35, Red)]}");

    assert!(tree.find(&30));
    assert!(!tree.find(&65));
}

#[test]
fn delete_absent_leaves_tree_alone() {
    let mut tree = sample();
    let (inorder, preorder, snapshot) = (tree.inorder(), tree.preorder(), tree.snapshot());

    assert_eq!(tree.delete(&65), Err(RBTreeError::NotFound));

    assert_eq!(tree.inorder(), inorder);
    assert_eq!(tree.preorder(), preorder);
    assert_eq!(tree.snapshot(), snapshot);
}

#[test]
fn delete_then_find() {
    let mut tree = sample();
    tree.delete(&40).unwrap();
    assert!(!tree.find(&40));
    assert_eq!(tree.inorder(), [30, 35, 55]);
    tree.validate().unwrap();
}

#[test]
fn duplicates_are_deleted_one_at_a_time() {
    let mut tree = RBTree::new();
    for v in [3, 1, 3, 2, 3] {
        tree.insert(v);
    }
    assert_eq!(tree.inorder(), [1, 2, 3, 3, 3]);

    tree.delete(&3).unwrap();
    assert_eq!(tree.inorder(), [1, 2, 3, 3]);
    tree.delete(&3).unwrap();
    tree.delete(&3).unwrap();
    assert!(!tree.find(&3));
    assert_eq!(tree.delete(&3), Err(RBTreeError::NotFound));
    tree.validate().unwrap();
}

#[test]
fn empty_tree() {
    let tree = RBTree::<u64>::default();
    assert!(tree.is_empty());
    assert!(tree.inorder().is_empty());
    assert!(tree.snapshot().is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.validate(), Ok(0));
}

#[test]
fn harness_over_sample() {
    let tree = sample();
    let config = HarnessConfig::immediate().with_workers(2);

    let summary = run_processes(&tree, &[Process::Postorder, Process::Snapshot], &config, |_| {});
    assert_eq!(summary.reports[0].kind, Process::Postorder);
    assert_eq!(summary.reports[0].items, [35, 30, 55, 40].map(Item::Value));
    assert_eq!(summary.reports[1].items, [Item::Snapshot(tree.snapshot())]);
    assert_eq!(summary.reports[1].items[0].to_string(), "{40: [(30, Black), (55, Black)], 30: [(35, Red)]}");

    assert_eq!(check_membership(&tree, &[30, 65], &config), [(30, true), (65, false)]);
}
