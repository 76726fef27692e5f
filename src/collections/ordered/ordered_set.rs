use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash, Hasher, RandomState};
use std::mem;
use std::ops::{
    BitAnd, BitOr, BitOrAssign, BitXor, Index, Range, Sub, SubAssign,
};
use std::slice;

use super::membership::Membership;
use super::{Cursor, IndexOutOfBounds, InvalidLoadFactor, Unsupported};
use crate::collections::traits::Set;
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// The capacity of a new set, and the smallest capacity compaction will shrink to.
pub const DEFAULT_CAP: usize = 10;

/// The load factor used unless one is provided explicitly.
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// The smallest capacity used when a set is built from an existing collection.
const MIN_COLLECTION_CAP: usize = 16;

/// A set that remembers insertion order and can be indexed like a list.
///
/// Elements are kept in one contiguous array in display order, next to an index of element hashes
/// that makes membership tests `O(1)`. Adding an element that is already present does nothing:
/// the element keeps the position it was first inserted at.
///
/// The array has a capacity of its own, separate from the index. When an insertion needs more
/// room, the capacity becomes `floor(required * (1 + load_factor)) + 1`. After removals, if fewer
/// than half of the slots are in use, the capacity is halved (but never below [`DEFAULT_CAP`]).
/// Growth and shrinking use different thresholds so that a set hovering around one size doesn't
/// reallocate on every call.
///
/// It is a logic error for an element to be modified in a way that changes its hash or equality
/// while it is in the set. Because of this, OrderedSet's API never hands out mutable references
/// to its elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the OrderedSet.
/// - `m`: The number of elements in the other collection.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)` |
/// | `contains` | `O(1)`* |
/// | `index_of` | `O(1)`* |
/// | `push` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `remove_at` | `O(n)` |
/// | `replace` | `O(n)` |
/// | `remove_all` | `O(min(n, m) * n)`, `O(n)`** |
/// | `retain` | `O(n)` |
///
/// \* Amortized, assuming few hash collisions. `push` takes `O(n)` when the array has to grow.
///
/// \** `remove_all` scans whichever collection is smaller. If that's `self`, a single `O(n)` pass
/// is made.
pub struct OrderedSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) elements: Vec<T>,
    pub(crate) cap: usize,
    pub(crate) index: Membership<B>,
    pub(crate) load_factor: f32,
}

impl<T: Hash + Eq> OrderedSet<T> {
    /// Creates a new, empty OrderedSet with capacity [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::ordered::{OrderedSet, DEFAULT_CAP};
    /// let set: OrderedSet<u8> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> OrderedSet<T> {
        OrderedSet::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty OrderedSet with exactly the provided capacity.
    pub fn with_cap(cap: usize) -> OrderedSet<T> {
        OrderedSet::with_cap_and_hasher(cap, RandomState::new())
    }

    /// Creates a new, empty OrderedSet with the provided capacity and load factor.
    ///
    /// # Panics
    /// Panics if `load_factor` isn't finite and greater than 0.
    pub fn with_load_factor(cap: usize, load_factor: f32) -> OrderedSet<T> {
        OrderedSet::try_with_load_factor(cap, load_factor).throw()
    }

    /// Creates a new, empty OrderedSet with the provided capacity and load factor, or an error if
    /// `load_factor` isn't finite and greater than 0.
    pub fn try_with_load_factor(
        cap: usize,
        load_factor: f32,
    ) -> Result<OrderedSet<T>, InvalidLoadFactor> {
        OrderedSet::try_with_load_factor_and_hasher(cap, load_factor, RandomState::new())
    }
}

impl<T: Hash + Eq, B: BuildHasher> OrderedSet<T, B> {
    /// Creates a new, empty OrderedSet with capacity [`DEFAULT_CAP`] and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> OrderedSet<T, B> {
        OrderedSet::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new, empty OrderedSet with the provided capacity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> OrderedSet<T, B> {
        OrderedSet {
            elements: Vec::with_capacity(cap),
            cap,
            index: Membership::with_cap_and_hasher(cap, hasher),
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Creates a new, empty OrderedSet with every parameter provided explicitly, or an error if
    /// `load_factor` isn't finite and greater than 0.
    pub fn try_with_load_factor_and_hasher(
        cap: usize,
        load_factor: f32,
        hasher: B,
    ) -> Result<OrderedSet<T, B>, InvalidLoadFactor> {
        if !load_factor.is_finite() || load_factor <= 0.0 {
            return Err(InvalidLoadFactor(load_factor));
        }

        let mut set = OrderedSet::with_cap_and_hasher(cap, hasher);
        set.load_factor = load_factor;
        Ok(set)
    }

    /// Returns the number of elements in the OrderedSet.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the OrderedSet contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the current capacity of the OrderedSet: the number of elements it can hold before
    /// the next reallocation. This is exactly the value last chosen by the growth or compaction
    /// policy, independent of what the allocator actually handed out.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the load factor used when growing.
    pub const fn load_factor(&self) -> f32 {
        self.load_factor
    }

    /// Returns a reference to the set's [`BuildHasher`].
    pub const fn hasher(&self) -> &B {
        &self.index.hasher
    }

    /// Returns true if the OrderedSet contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(item).is_some()
    }

    /// Returns true if the OrderedSet contains every element of `other`.
    pub fn contains_all<S: Set<T>>(&self, other: &S) -> bool {
        other.iter().all(|item| self.contains(item))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::ordered::OrderedSet;
    /// let set: OrderedSet<char> = "hello".chars().collect();
    /// assert_eq!(set.get(2), Ok(&'l'));
    /// assert!(set.get(4).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.elements.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the position of the element equal to `item`, if there is one.
    pub fn index_of<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(item).map(|(_, pos)| pos)
    }

    /// Identical to [`index_of`](OrderedSet::index_of), because no element can occur twice.
    pub fn last_index_of<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(item)
    }

    /// Returns all elements as a slice, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over all elements, in order, as references.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Copies all elements into a new [`Vec`], in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Copies all elements into `dest` if it is long enough, otherwise into a new [`Vec`] of
    /// exactly [`len`](OrderedSet::len) slots.
    ///
    /// When `dest` is strictly longer than the set, the slot directly after the last element is set
    /// to None, marking the end of the copied elements. Slots after that are left untouched.
    pub fn to_array_into(&self, mut dest: Vec<Option<T>>) -> Vec<Option<T>>
    where
        T: Clone,
    {
        if dest.len() < self.len() {
            return self.iter().cloned().map(Some).collect();
        }

        for (slot, item) in dest.iter_mut().zip(self.iter()) {
            *slot = Some(item.clone());
        }

        if let Some(terminator) = dest.get_mut(self.len()) {
            *terminator = None;
        }

        dest
    }

    /// Appends `value` to the end of the OrderedSet if no equal element is present. Returns true
    /// if the set changed.
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::ordered::OrderedSet;
    /// let mut set = OrderedSet::<&str>::new();
    /// assert!(set.push("a"));
    /// assert!(set.push("b"));
    /// assert!(!set.push("a"));
    /// assert_eq!(set.as_slice(), &["a", "b"]);
    /// ```
    pub fn push(&mut self, value: T) -> bool {
        self.insert_at(self.len(), value)
    }

    /// Inserts `value` at `index`, moving all following elements one place to the right. Does
    /// nothing and returns `Ok(false)` if an equal element is already present anywhere in the set.
    ///
    /// `index` may be equal to [`len`](OrderedSet::len), which appends.
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::ordered::OrderedSet;
    /// let mut set = OrderedSet::from([1, 2, 3]);
    /// assert_eq!(set.insert(1, 100), Ok(true));
    /// assert_eq!(set.insert(0, 3), Ok(false));
    /// assert!(set.insert(5, 200).is_err());
    /// assert_eq!(set.as_slice(), &[1, 100, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<bool, IndexOutOfBounds> {
        self.check_insert_index(index)?;

        Ok(self.insert_at(index, value))
    }

    /// Appends every value from `iter` that isn't already present, in order. Returns true if any
    /// value was added.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> bool {
        self.insert_all_at(self.len(), iter)
    }

    /// Inserts every value from `iter` that isn't already present, starting at `index` and keeping
    /// their relative order. Returns `Ok(true)` if any value was added.
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::ordered::OrderedSet;
    /// let mut set = OrderedSet::from(['a', 'b', 'c']);
    /// assert_eq!(set.insert_all(1, ['x', 'c', 'y']), Ok(true));
    /// assert_eq!(set.as_slice(), &['a', 'x', 'y', 'b', 'c']);
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<bool, IndexOutOfBounds> {
        self.check_insert_index(index)?;

        Ok(self.insert_all_at(index, iter))
    }

    /// Removes the element equal to `item`, returning it if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (_, pos) = self.find(item)?;
        let removed = self.take_at(pos);
        self.compact();
        Some(removed)
    }

    /// Removes and returns the element at `index`, moving all following elements one place to the
    /// left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let removed = self.take_at(index);
        self.compact();
        Ok(removed)
    }

    /// Removes and returns the last element, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        let removed = self.take_at(last);
        self.compact();
        Some(removed)
    }

    /// Replaces the element at `index` with `value`, returning the element that was there.
    ///
    /// If an element equal to `value` is already present at another position, it is detached
    /// first, so `value` is moved rather than duplicated. The set then shrinks by one, and the
    /// replacement lands where the evicted element sat relative to the remaining elements.
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::ordered::OrderedSet;
    /// let mut set = OrderedSet::from(['a', 'b', 'c']);
    /// assert_eq!(set.replace(0, 'c'), Ok('a'));
    /// assert_eq!(set.as_slice(), &['c', 'b']);
    /// ```
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let hash = self.index.hash(&value);
        let mut target = index;
        let mut detached = false;

        if let Some((_, pos)) = self.find_hashed(hash, &value) {
            if pos == index {
                // The index entry already describes an equal element at this position.
                return Ok(mem::replace(&mut self.elements[index], value));
            }

            self.take_at(pos);
            detached = true;
            if pos < index {
                target -= 1;
            }
        }

        let evicted_hash = self.index.hash(&self.elements[target]);
        // UNREACHABLE: target is below len and every live position has an entry.
        let (bucket, _) = self.index.find(evicted_hash, |p| p == target).unreachable();
        self.index.remove(bucket);
        self.index.insert(hash, target);

        let evicted = mem::replace(&mut self.elements[target], value);

        if detached {
            self.compact();
        }

        Ok(evicted)
    }

    /// Removes every element that is also in `other`. Returns true if any element was removed.
    ///
    /// Whichever of the two collections is smaller gets scanned, and the set is compacted at most
    /// once, at the end.
    pub fn remove_all<S: Set<T>>(&mut self, other: &S) -> bool {
        let modified = if self.len() > other.len() {
            let mut modified = false;
            for item in other.iter() {
                if let Some((_, pos)) = self.find(item) {
                    self.take_at(pos);
                    modified = true;
                }
            }
            modified
        } else {
            self.retain_elements(|item| !other.contains(item))
        };

        if modified {
            self.compact();
        }

        modified
    }

    /// Removes every element that isn't also in `other`. Returns true if any element was removed.
    pub fn retain_all<S: Set<T>>(&mut self, other: &S) -> bool {
        self.retain(|item| other.contains(item))
    }

    /// Keeps only the elements for which `f` returns true, preserving their order. Returns true if
    /// any element was removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) -> bool {
        let modified = self.retain_elements(f);

        if modified {
            self.compact();
        }

        modified
    }

    /// Removes every element and resets the capacity to [`DEFAULT_CAP`].
    pub fn clear(&mut self) {
        self.elements = Vec::with_capacity(DEFAULT_CAP);
        self.cap = DEFAULT_CAP;
        self.index.reset(DEFAULT_CAP);
    }

    /// Ensures that the OrderedSet can hold an additional `extra` elements without reallocating,
    /// growing with the usual policy if it can't.
    pub fn reserve(&mut self, extra: usize) {
        self.ensure_cap(self.len().saturating_add(extra));
    }

    /// Creates a [`Cursor`] positioned before the first element.
    pub fn cursor(&mut self) -> Cursor<'_, T, B> {
        Cursor::new(self, 0)
    }

    /// Creates a [`Cursor`] positioned so that the first call to
    /// [`next`](Cursor::next) returns the element at `index`. `index` may be equal to
    /// [`len`](OrderedSet::len), positioning the cursor after the last element.
    pub fn cursor_at(&mut self, index: usize) -> Result<Cursor<'_, T, B>, IndexOutOfBounds> {
        self.check_insert_index(index)?;

        Ok(Cursor::new(self, index))
    }

    /// Views of a range of an OrderedSet aren't supported, this always returns an error. Use
    /// [`as_slice`](OrderedSet::as_slice) and index the slice instead.
    pub fn sub_list(&self, _range: Range<usize>) -> Result<&[T], Unsupported> {
        Err(Unsupported::new("OrderedSet::sub_list"))
    }
}

impl<T: Hash + Eq, B: BuildHasher> OrderedSet<T, B> {
    /// Finds the bucket and position of the element equal to `item`.
    pub(crate) fn find<Q>(&self, item: &Q) -> Option<(usize, usize)>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_hashed(self.index.hash(item), item)
    }

    pub(crate) fn find_hashed<Q>(&self, hash: u64, item: &Q) -> Option<(usize, usize)>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let elements = &self.elements;
        self.index.find(hash, |pos| elements[pos].borrow() == item)
    }

    /// Inserts `value` at `pos` unless an equal element is present. `pos` must be at most len.
    pub(crate) fn insert_at(&mut self, pos: usize, value: T) -> bool {
        let hash = self.index.hash(&value);
        if self.find_hashed(hash, &value).is_some() {
            return false;
        }

        self.ensure_cap(self.len() + 1);

        if pos < self.len() {
            self.index.shift_up(pos);
        }
        self.index.insert(hash, pos);
        self.elements.insert(pos, value);

        true
    }

    /// Inserts every new value from `iter` consecutively from `pos`. `pos` must be at most len.
    pub(crate) fn insert_all_at<I: IntoIterator<Item = T>>(&mut self, pos: usize, iter: I) -> bool {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        let mut pos = pos;
        let mut modified = false;
        for value in iter {
            if self.insert_at(pos, value) {
                pos += 1;
                modified = true;
            }
        }

        modified
    }

    /// Removes the element at `pos` from both the array and the index, without compacting. `pos`
    /// must be below len.
    pub(crate) fn take_at(&mut self, pos: usize) -> T {
        let hash = self.index.hash(&self.elements[pos]);
        // UNREACHABLE: pos is below len and every live position has an entry.
        let (bucket, _) = self.index.find(hash, |p| p == pos).unreachable();
        self.index.remove(bucket);

        let removed = self.elements.remove(pos);

        if pos < self.len() {
            self.index.shift_down(pos + 1);
        }

        removed
    }

    /// Retains elements matching `f` and rebuilds the index if anything was dropped, without
    /// compacting.
    pub(crate) fn retain_elements<F: FnMut(&T) -> bool>(&mut self, mut f: F) -> bool {
        let before = self.len();
        self.elements.retain(|item| f(item));

        if self.len() == before {
            return false;
        }

        self.index.reset(self.cap);
        for (pos, item) in self.elements.iter().enumerate() {
            let hash = self.index.hash(item);
            self.index.insert(hash, pos);
        }

        true
    }

    /// Grows the array so that it can hold `required` elements, using the load factor to decide
    /// how much extra room to leave.
    pub(crate) fn ensure_cap(&mut self, required: usize) {
        if required <= self.cap { return; }

        let grown = ((required as f32) * (1.0 + self.load_factor)) as usize;
        let new_cap = cmp::max(grown.saturating_add(1), required);

        self.realloc_with_cap(new_cap);
        self.index.reserve(new_cap);
    }

    /// Halves the capacity if less than half of it is in use, without going below
    /// [`DEFAULT_CAP`].
    pub(crate) fn compact(&mut self) {
        let half = self.cap / 2;
        if self.len() >= half { return; }

        let new_cap = cmp::max(half, DEFAULT_CAP);
        if new_cap >= self.cap { return; }

        self.realloc_with_cap(new_cap);
        self.index.fit(new_cap);
    }

    /// Reallocates the array with room for exactly `new_cap` elements. `new_cap` must be at least
    /// len.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap > self.elements.capacity() {
            self.elements.reserve_exact(new_cap - self.len());
        } else {
            self.elements.shrink_to(new_cap);
        }

        self.cap = new_cap;
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.elements.len();
        if index >= len {
            return Err(IndexOutOfBounds {
                index,
                len,
            });
        }
        Ok(())
    }

    pub(crate) fn check_insert_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.elements.len();
        if index > len {
            return Err(IndexOutOfBounds {
                index,
                len,
            });
        }
        Ok(())
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for OrderedSet<T, B> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        OrderedSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        OrderedSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        OrderedSet::iter(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for OrderedSet<T, B> {
    fn default() -> Self {
        OrderedSet::with_hasher(B::default())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for OrderedSet<T, B> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.cap);
        elements.extend(self.elements.iter().cloned());

        OrderedSet {
            elements,
            cap: self.cap,
            index: self.index.clone(),
            load_factor: self.load_factor,
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for OrderedSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let expected = (iter.size_hint().0 as f32 / DEFAULT_LOAD_FACTOR) as usize + 1;
        let mut set =
            OrderedSet::with_cap_and_hasher(cmp::max(expected, MIN_COLLECTION_CAP), B::default());

        set.add_all(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for OrderedSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: Hash + Eq, B: BuildHasher> Index<usize> for OrderedSet<T, B> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T, B1, B2> PartialEq<OrderedSet<T, B2>> for OrderedSet<T, B1>
where
    T: Hash + Eq,
    B1: BuildHasher,
    B2: BuildHasher,
{
    /// Two sets are equal if they contain equal elements, in any order.
    fn eq(&self, other: &OrderedSet<T, B2>) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for OrderedSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher> Hash for OrderedSet<T, B> {
    /// Hashes the set without regard to order, so that sets which are equal hash the same.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let element_hasher = BuildHasherDefault::<DefaultHasher>::default();
        let sum = self.iter().fold(0_u64, |sum, item| {
            sum.wrapping_add(element_hasher.hash_one(item))
        });

        state.write_usize(self.len());
        state.write_u64(sum);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &OrderedSet<T, B> {
    type Output = OrderedSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for OrderedSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.add_all(rhs);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &OrderedSet<T, B> {
    type Output = OrderedSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &OrderedSet<T, B> {
    type Output = OrderedSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &OrderedSet<T, B> {
    type Output = OrderedSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for OrderedSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        self.remove_all(&rhs);
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for OrderedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSet")
            .field("contents", &DebugRaw(format!(
                "#{{{}}}",
                self.iter()
                    .map(|i| format!("{i:?}"))
                    .collect::<Vec<String>>()
                    .join(", ")
            )))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("load_factor", &self.load_factor)
            .field("hasher", self.hasher())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for OrderedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
