use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use parking_lot::{Mutex, MutexGuard};

use super::{IndexOutOfBounds, OrderedSet};

/// An [`OrderedSet`] behind a lock, so that it can be shared between threads (usually in an
/// [`Arc`](std::sync::Arc)).
///
/// Every forwarded method takes the lock for the duration of one call. Anything that has to see a
/// consistent set across several calls, including traversal with a [`Cursor`](super::Cursor),
/// should hold the guard returned by [`lock`](SyncOrderedSet::lock) instead.
///
/// Methods that would return a reference into the set return clones instead, since a reference
/// can't outlive the lock.
pub struct SyncOrderedSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) inner: Mutex<OrderedSet<T, B>>,
}

impl<T: Hash + Eq, B: BuildHasher> SyncOrderedSet<T, B> {
    pub fn new(set: OrderedSet<T, B>) -> SyncOrderedSet<T, B> {
        SyncOrderedSet {
            inner: Mutex::new(set),
        }
    }

    /// Locks the set, blocking until no other thread holds it.
    pub fn lock(&self) -> MutexGuard<'_, OrderedSet<T, B>> {
        self.inner.lock()
    }

    /// Consumes the wrapper, returning the set inside it.
    pub fn into_inner(self) -> OrderedSet<T, B> {
        self.inner.into_inner()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().contains(item)
    }

    pub fn index_of<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().index_of(item)
    }

    /// Returns a clone of the element at `index`.
    pub fn get_cloned(&self, index: usize) -> Result<T, IndexOutOfBounds>
    where
        T: Clone,
    {
        self.lock().get(index).cloned()
    }

    /// See [`OrderedSet::push`].
    pub fn push(&self, value: T) -> bool {
        self.lock().push(value)
    }

    /// See [`OrderedSet::insert`].
    pub fn insert(&self, index: usize, value: T) -> Result<bool, IndexOutOfBounds> {
        self.lock().insert(index, value)
    }

    /// See [`OrderedSet::add_all`]. All values are added under a single lock.
    pub fn add_all<I: IntoIterator<Item = T>>(&self, iter: I) -> bool {
        self.lock().add_all(iter)
    }

    /// See [`OrderedSet::remove`].
    pub fn remove<Q>(&self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().remove(item)
    }

    /// See [`OrderedSet::remove_at`].
    pub fn remove_at(&self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.lock().remove_at(index)
    }

    /// See [`OrderedSet::replace`].
    pub fn replace(&self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.lock().replace(index, value)
    }

    pub fn clear(&self) {
        self.lock().clear()
    }

    /// Copies all elements into a new [`Vec`], as a snapshot taken under one lock.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.lock().to_vec()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for SyncOrderedSet<T, B> {
    fn default() -> Self {
        SyncOrderedSet::new(OrderedSet::with_hasher(B::default()))
    }
}

impl<T: Hash + Eq, B: BuildHasher> From<OrderedSet<T, B>> for SyncOrderedSet<T, B> {
    fn from(value: OrderedSet<T, B>) -> Self {
        SyncOrderedSet::new(value)
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for SyncOrderedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(set) => f.debug_struct("SyncOrderedSet").field("inner", &*set).finish(),
            None => f.debug_struct("SyncOrderedSet").field("inner", &"<locked>").finish(),
        }
    }
}
