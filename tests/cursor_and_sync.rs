#![cfg(feature = "ordered")]
//! Scenario tests for cursor traversal and, with the `sync` feature, for sharing a set between
//! threads.

use ordered_collections::collections::ordered::{
    IllegalState, IndexOutOfBounds, NoSuchElement, OrderedSet, OrderedSetError,
};
use rstest::{fixture, rstest};

#[fixture]
fn letters() -> OrderedSet<char> {
    OrderedSet::from(['a', 'b', 'c', 'd'])
}

#[rstest]
#[case::first(1, 'a', &['b', 'c', 'd'])]
#[case::second(2, 'b', &['a', 'c', 'd'])]
#[case::last(4, 'd', &['a', 'b', 'c'])]
fn removes_after_forward_steps(
    mut letters: OrderedSet<char>,
    #[case] steps: usize,
    #[case] removed: char,
    #[case] rest: &[char],
) {
    let mut cursor = letters.cursor();
    for _ in 0..steps {
        cursor.next().unwrap();
    }

    assert_eq!(cursor.remove(), Ok(removed));
    assert_eq!(cursor.next_index(), steps - 1);
    assert_eq!(cursor.remove(), Err(IllegalState::AlreadyRemoved));
    assert_eq!(letters.as_slice(), rest);
}

#[rstest]
#[case::start(0, None)]
#[case::middle(2, Some(1))]
#[case::end(4, Some(3))]
fn cursor_at_positions(
    mut letters: OrderedSet<char>,
    #[case] index: usize,
    #[case] previous: Option<usize>,
) {
    let cursor = letters.cursor_at(index).unwrap();

    assert_eq!(cursor.next_index(), index);
    assert_eq!(cursor.previous_index(), previous);
    assert_eq!(cursor.has_next(), index < 4);
    assert_eq!(cursor.has_previous(), index > 0);
}

#[rstest]
fn cursor_at_rejects_past_end(mut letters: OrderedSet<char>) {
    assert_eq!(
        letters.cursor_at(5).err(),
        Some(IndexOutOfBounds {
            index: 5,
            len: 4
        })
    );
}

#[rstest]
fn rest_of_traversal_after_removal(mut letters: OrderedSet<char>) {
    let mut cursor = letters.cursor();
    cursor.next().unwrap();
    cursor.next().unwrap();
    cursor.remove().unwrap();

    let mut rest = Vec::new();
    while let Ok(item) = cursor.next() {
        rest.push(*item);
    }

    assert_eq!(rest, vec!['c', 'd']);
    assert_eq!(cursor.next(), Err(NoSuchElement));
}

#[rstest]
fn zigzag_removal(mut letters: OrderedSet<char>) -> Result<(), OrderedSetError> {
    let mut cursor = letters.cursor();
    cursor.next()?;
    cursor.next()?;
    cursor.next()?;
    assert_eq!(*cursor.previous()?, 'c');
    assert_eq!(cursor.remove()?, 'c');
    assert_eq!(*cursor.previous()?, 'b');
    assert_eq!(cursor.remove()?, 'b');
    assert_eq!(*cursor.next()?, 'd');

    assert_eq!(letters.as_slice(), &['a', 'd']);
    Ok(())
}

#[cfg(feature = "sync")]
mod sync {
    use std::sync::Arc;
    use std::thread;

    use ordered_collections::collections::ordered::{OrderedSet, SyncOrderedSet};
    use rstest::rstest;

    #[rstest]
    #[case::few_threads(2)]
    #[case::many_threads(8)]
    fn concurrent_pushes_keep_uniqueness(#[case] threads: usize) {
        let set = Arc::new(SyncOrderedSet::<u32>::default());

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let set = Arc::clone(&set);
                thread::spawn(move || (0..100).filter(|v| set.push(*v)).count())
            })
            .collect();
        let added: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(added, 100, "Each value should be added by exactly one thread.");
        assert_eq!(set.len(), 100);

        let mut values = set.to_vec();
        values.sort_unstable();
        assert_eq!(values, (0..100).collect::<Vec<_>>());
    }

    #[rstest]
    fn forwards_to_inner_set() {
        let set = SyncOrderedSet::from(OrderedSet::from([1, 2, 3]));

        assert!(set.contains(&2));
        assert_eq!(set.index_of(&3), Some(2));
        assert_eq!(set.get_cloned(0), Ok(1));
        assert_eq!(set.insert(0, 0), Ok(true));
        assert_eq!(set.replace(1, 3), Ok(1));
        assert_eq!(set.remove(&0), Some(0));
        assert_eq!(set.remove_at(0), Ok(3));
        assert!(set.add_all([4, 5]));
        assert_eq!(set.to_vec(), vec![2, 4, 5]);

        {
            let mut guard = set.lock();
            let mut cursor = guard.cursor();
            cursor.next().unwrap();
            cursor.remove().unwrap();
        }
        assert_eq!(set.len(), 2);

        set.clear();
        assert!(set.is_empty());
        assert!(set.into_inner().is_empty());
    }
}
