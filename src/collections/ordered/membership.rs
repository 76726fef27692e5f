use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter;
use std::mem;

use crate::util::fmt::DebugRaw;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A bucket's contents: the full hash of an element and the element's position in the owning
/// set's element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub hash: u64,
    pub pos: usize,
}

/// The uniqueness index behind [`OrderedSet`](super::OrderedSet).
///
/// This is an open-addressing table with linear probing, like the crate's other hash-based
/// collections, except that buckets never hold elements. Each bucket holds an element's hash and
/// its position in the set's element array, and equality is resolved by the caller looking at that
/// position. The index therefore has no opinion on order: it only ever answers "is there an equal
/// element, and where is it?".
///
/// Hashes are stored so that growing the table never has to touch the elements themselves.
///
/// The index can't keep itself coherent with the element array. Whenever the owning set shifts
/// elements, it has to call [`shift_up`](Membership::shift_up) or
/// [`shift_down`](Membership::shift_down) to renumber the affected positions.
pub(crate) struct Membership<B: BuildHasher> {
    pub(crate) buckets: Box<[Option<Entry>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<B: BuildHasher> Membership<B> {
    /// Creates an index with enough buckets to hold `cap` positions without growing.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Membership<B> {
        Membership {
            buckets: empty_buckets(buckets_for(cap)),
            len: 0,
            hasher,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    pub fn hash<Q: Hash + ?Sized>(&self, key: &Q) -> u64 {
        self.hasher.hash_one(key)
    }

    /// Finds the bucket holding a position whose element matches `hash` and satisfies `eq`,
    /// returning the bucket and the position.
    pub fn find(&self, hash: u64, mut eq: impl FnMut(usize) -> bool) -> Option<(usize, usize)> {
        let mut index = self.ideal_index(hash)?;

        // The load factor guarantees at least one empty bucket, which ends every probe sequence.
        while let Some(entry) = &self.buckets[index] {
            if entry.hash == hash && eq(entry.pos) {
                return Some((index, entry.pos));
            }
            index = (index + 1) % self.cap();
        }

        None
    }

    /// Records that the element at `pos` has the provided `hash`. The caller must already have
    /// checked that no equal element is present.
    pub fn insert(&mut self, hash: u64, pos: usize) {
        if self.should_grow() {
            self.grow();
        }

        self.place(Entry {
            hash,
            pos,
        });
        self.len += 1;
    }

    /// Empties the provided bucket, returning its entry, and closes the gap so that every
    /// remaining entry is still reachable from its ideal bucket.
    pub fn remove(&mut self, bucket: usize) -> Option<Entry> {
        let removed = self.buckets[bucket].take()?;
        self.len -= 1;

        let cap = self.cap();
        let mut hole = bucket;
        let mut probe = (hole + 1) % cap;

        // Walk the rest of the cluster. Any entry whose ideal bucket doesn't lie (cyclically)
        // within (hole, probe] would become unreachable past the hole, so it's moved back into it.
        while let Some(entry) = self.buckets[probe] {
            let ideal = (entry.hash % cap as u64) as usize;

            let reachable = if hole <= probe {
                hole < ideal && ideal <= probe
            } else {
                hole < ideal || ideal <= probe
            };

            if !reachable {
                self.buckets[hole] = self.buckets[probe].take();
                hole = probe;
            }

            probe = (probe + 1) % cap;
        }

        Some(removed)
    }

    /// Renumbers every position at or after `from` one step to the right, making room for an
    /// insertion at `from`.
    pub fn shift_up(&mut self, from: usize) {
        for entry in self.buckets.iter_mut().flatten() {
            if entry.pos >= from {
                entry.pos += 1;
            }
        }
    }

    /// Renumbers every position at or after `from` one step to the left, closing the gap left by
    /// a removal at `from - 1`.
    pub fn shift_down(&mut self, from: usize) {
        for entry in self.buckets.iter_mut().flatten() {
            if entry.pos >= from {
                entry.pos -= 1;
            }
        }
    }

    /// Makes sure that `total` positions fit without growing the table.
    pub fn reserve(&mut self, total: usize) {
        let new_cap = buckets_for(total);
        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Resizes the table for `total` positions, shrinking if it's currently much larger than
    /// needed.
    pub fn fit(&mut self, total: usize) {
        let new_cap = buckets_for(cmp::max(total, self.len()));
        if new_cap * GROWTH_FACTOR > self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Forgets every entry, replacing the table with one sized for `cap` positions.
    pub fn reset(&mut self, cap: usize) {
        self.buckets = empty_buckets(buckets_for(cap));
        self.len = 0;
    }

    /// Determines whether the index's length exceeds the load capacity, suggesting that it should
    /// grow before inserting new entries.
    pub(crate) fn should_grow(&self) -> bool {
        self.len >= self.buckets.len() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_ALLOCATED_CAP);

        self.realloc_with_cap(new_cap)
    }

    /// Reallocates the table with `new_cap` buckets, re-placing every entry by its stored hash.
    /// Requests that would overload the table are ignored.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR < self.len { return; }

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_cap));

        for entry in old_buckets.into_vec().into_iter().flatten() {
            self.place(entry);
        }
    }

    /// Computes the ideal bucket for `hash`, or None if the table has no buckets.
    pub(crate) fn ideal_index(&self, hash: u64) -> Option<usize> {
        hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Puts `entry` in the first empty bucket at or after its ideal one. Doesn't touch `len`.
    fn place(&mut self, entry: Entry) {
        let cap = self.cap();
        let mut index = (entry.hash % cap as u64) as usize;

        while self.buckets[index].is_some() {
            index = (index + 1) % cap;
        }

        self.buckets[index] = Some(entry);
    }
}

impl<B: BuildHasher + Clone> Clone for Membership<B> {
    fn clone(&self) -> Self {
        Membership {
            buckets: self.buckets.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<B: BuildHasher + Debug> Debug for Membership<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Membership")
            .field("buckets", &DebugRaw(
                self.buckets.iter()
                    .map(|b| match b {
                        Some(Entry { hash, pos }) => format!("({hash:#x} -> {pos})"),
                        None => "-".into(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

/// The number of buckets needed to hold `len` entries below the load factor.
const fn buckets_for(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        len * LOAD_FACTOR_DENOMINATOR / LOAD_FACTOR_NUMERATOR + 1
    }
}

fn empty_buckets(cap: usize) -> Box<[Option<Entry>]> {
    iter::repeat_n(None, cap).collect()
}
