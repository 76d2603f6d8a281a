use avl_collections::avl_tree::{AvlSet, Error};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100_000;

fn height_bound(len: usize) -> f64 {
    1.45 * ((len + 2) as f64).log2() - 1.0
}

#[test]
fn int_test_avl_set() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.gen_range(0, 10_000u32);

        if rng.gen_range(0, 3) == 0 {
            assert_eq!(set.remove(&value), expected.remove(&value));
            assert!(!set.contains(&value));
        } else {
            assert_eq!(set.add(value), expected.insert(value));
            assert!(set.contains(&value));
        }
        assert_eq!(set.len(), expected.len());
    }

    assert!(f64::from(set.height().unwrap()) <= height_bound(set.len()));
    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
}

#[test]
fn int_test_membership() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([4, 3, 2, 1]);
    let mut values: Vec<u32> = (0..2_000).map(|value| value * 2).collect();
    rng.shuffle(&mut values);

    let mut set = AvlSet::new();
    for value in &values {
        assert!(set.add(*value));
        assert!(f64::from(set.height().unwrap()) <= height_bound(set.len()));
    }
    for value in &values {
        assert!(set.contains(value));
        assert!(!set.contains(&(value + 1)));
    }

    let (removed, remaining) = values.split_at(values.len() / 3);
    for value in removed {
        assert!(set.remove(value));
    }
    assert_eq!(set.len(), remaining.len());
    for value in removed {
        assert!(!set.contains(value));
    }
    for value in remaining {
        assert!(set.contains(value));
    }
}

#[test]
fn int_test_idempotence() {
    let mut set: AvlSet<u32> = (0..100).collect();
    let before = set.render().unwrap();

    assert!(!set.add(50));
    assert!(!set.remove(&100));
    assert_eq!(set.len(), 100);
    assert_eq!(set.render().unwrap(), before);
}

#[test]
fn int_test_sequential_scenario() {
    let mut set = AvlSet::new();
    for value in 0..15 {
        set.add(value);
    }

    assert_eq!(set.height(), Ok(3));
    assert_eq!(set.iter().cloned().collect::<Vec<i32>>(), (0..15).collect::<Vec<i32>>());

    assert!(set.remove(&7));
    assert_eq!(set.len(), 14);
    assert!(!set.contains(&7));
    assert_eq!(
        set.iter().cloned().collect::<Vec<i32>>(),
        vec![0, 1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14],
    );
    assert!(set.render().unwrap().ends_with("Tree height: 3"));
}

#[test]
fn int_test_drain_to_empty() {
    let mut set: AvlSet<u32> = (0..64).collect();
    for value in 0..64 {
        assert!(set.remove(&value));
    }
    assert!(set.is_empty());
    assert_eq!(set.render(), Err(Error::EmptyCollection));
    assert_eq!(set.iter().next(), None);
}
