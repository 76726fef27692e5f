#![cfg(feature = "ordered")]
//! Property tests checking OrderedSet against a plain Vec model: the set should always hold the
//! same elements, in the same order, as a de-duplicated list that receives the same edits.

use std::collections::HashSet;

use ordered_collections::collections::ordered::{DEFAULT_CAP, OrderedSet};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Insert(usize, u8),
    Remove(u8),
    RemoveAt(usize),
    Replace(usize, u8),
    Pop,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0_u8..40).prop_map(Op::Push),
        2 => (0_usize..48, 0_u8..40).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0_u8..40).prop_map(Op::Remove),
        1 => (0_usize..48).prop_map(Op::RemoveAt),
        1 => (0_usize..48, 0_u8..40).prop_map(|(i, v)| Op::Replace(i, v)),
        1 => Just(Op::Pop),
    ]
}

/// Applies `op` to the model, returning whether the set should report success.
fn apply_model(model: &mut Vec<u8>, op: &Op) -> bool {
    match *op {
        Op::Push(v) => {
            if model.contains(&v) {
                return false;
            }
            model.push(v);
            true
        },
        Op::Insert(i, v) => {
            if i > model.len() || model.contains(&v) {
                return false;
            }
            model.insert(i, v);
            true
        },
        Op::Remove(v) => match model.iter().position(|x| *x == v) {
            Some(pos) => {
                model.remove(pos);
                true
            },
            None => false,
        },
        Op::RemoveAt(i) => {
            if i >= model.len() {
                return false;
            }
            model.remove(i);
            true
        },
        Op::Replace(i, v) => {
            if i >= model.len() {
                return false;
            }
            let mut target = i;
            if let Some(pos) = model.iter().position(|x| *x == v)
                && pos != i
            {
                model.remove(pos);
                if pos < i {
                    target -= 1;
                }
            }
            model[target] = v;
            true
        },
        Op::Pop => model.pop().is_some(),
    }
}

fn apply_set(set: &mut OrderedSet<u8>, op: &Op) -> bool {
    match *op {
        Op::Push(v) => set.push(v),
        Op::Insert(i, v) => set.insert(i, v).unwrap_or(false),
        Op::Remove(v) => set.remove(&v).is_some(),
        Op::RemoveAt(i) => set.remove_at(i).is_ok(),
        Op::Replace(i, v) => set.replace(i, v).is_ok(),
        Op::Pop => set.pop().is_some(),
    }
}

proptest! {
    /// Every edit leaves the set matching the model, with a coherent index and sane capacity.
    #[test]
    fn prop_matches_deduplicated_list(ops in prop::collection::vec(op(), 0..200)) {
        let mut set = OrderedSet::new();
        let mut model = Vec::new();

        for op in &ops {
            let expected = apply_model(&mut model, op);
            prop_assert_eq!(apply_set(&mut set, op), expected, "{:?} reported the wrong outcome", op);
            prop_assert_eq!(set.as_slice(), model.as_slice(), "after {:?}", op);
            prop_assert!(set.cap() >= set.len());
            prop_assert!(set.cap() >= DEFAULT_CAP);
        }

        for (pos, v) in model.iter().enumerate() {
            prop_assert_eq!(set.index_of(v), Some(pos));
        }
        for v in 0_u8..40 {
            prop_assert_eq!(set.contains(&v), model.contains(&v));
        }
    }

    /// Collecting keeps only the first occurrence of each value, in encounter order.
    #[test]
    fn prop_collect_keeps_first_occurrences(values in prop::collection::vec(any::<u16>(), 0..300)) {
        let set: OrderedSet<u16> = values.iter().copied().collect();

        let mut seen = HashSet::new();
        let expected: Vec<u16> = values.iter().copied().filter(|v| seen.insert(*v)).collect();

        prop_assert_eq!(set.as_slice(), expected.as_slice());
        prop_assert_eq!(set.into_iter().collect::<Vec<_>>(), expected);
    }

    /// Adding the same values twice changes nothing the second time.
    #[test]
    fn prop_add_all_is_idempotent(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut set = OrderedSet::new();
        set.add_all(values.iter().copied());
        let snapshot = set.to_vec();

        prop_assert!(!set.add_all(values.iter().copied()));
        prop_assert_eq!(set.to_vec(), snapshot);
    }

    /// Copying out with `to_vec` and collecting again gives an equal set in the same order.
    #[test]
    fn prop_to_vec_round_trip(values in prop::collection::vec(any::<i64>(), 0..150)) {
        let set: OrderedSet<i64> = values.iter().copied().collect();
        let rebuilt: OrderedSet<i64> = set.to_vec().into_iter().collect();

        prop_assert_eq!(&rebuilt, &set);
        prop_assert_eq!(rebuilt.as_slice(), set.as_slice());
    }

    /// Equality and hashing ignore order.
    #[test]
    fn prop_reversed_sets_are_equal(values in prop::collection::vec(any::<i32>(), 0..100)) {
        use std::hash::{BuildHasher, RandomState};

        let forward: OrderedSet<i32> = values.iter().copied().collect();
        let backward: OrderedSet<i32> = values.iter().rev().copied().collect();
        let hasher = RandomState::new();

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(hasher.hash_one(&forward), hasher.hash_one(&backward));
    }

    /// Removing everything through a cursor empties the set and compacts it back to the default.
    #[test]
    fn prop_cursor_drains(values in prop::collection::hash_set(any::<u32>(), 0..200)) {
        let mut set: OrderedSet<u32> = values.iter().copied().collect();
        let mut removed = Vec::new();

        let mut cursor = set.cursor();
        while cursor.has_next() {
            cursor.next().unwrap();
            removed.push(cursor.remove().unwrap());
        }

        prop_assert!(set.is_empty());
        prop_assert_eq!(removed.len(), values.len());
        if !values.is_empty() {
            prop_assert_eq!(set.cap(), DEFAULT_CAP);
        }
    }
}
