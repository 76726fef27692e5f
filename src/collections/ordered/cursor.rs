use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};

use super::{IllegalState, NoSuchElement, OrderedSet, Unsupported};

/// A type for bi-directional traversal of an [`OrderedSet`], which can also remove the element it
/// last returned. See [`OrderedSet::cursor`] and [`OrderedSet::cursor_at`] to create one.
///
/// A Cursor sits between two elements (or before the first, or after the last). Calling
/// [`next`](Cursor::next) or [`previous`](Cursor::previous) steps over an element and returns it,
/// making it the cursor's current element. [`remove`](Cursor::remove) removes the current element,
/// after which another step is needed before the next removal.
///
/// The cursor holds a mutable borrow of its set, so the set can't be modified through any other
/// path while the cursor is alive.
///
/// # Examples
/// ```
/// # use ordered_collections::collections::ordered::OrderedSet;
/// let mut set = OrderedSet::from([1, 2, 3, 4]);
/// let mut cursor = set.cursor();
///
/// while cursor.has_next() {
///     if *cursor.next().unwrap() % 2 == 0 {
///         cursor.remove().unwrap();
///     }
/// }
///
/// assert_eq!(set.as_slice(), &[1, 3]);
/// ```
pub struct Cursor<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) set: &'a mut OrderedSet<T, B>,
    pub(crate) next: usize,
    pub(crate) last_returned: Option<usize>,
    pub(crate) removed: bool,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Cursor<'a, T, B> {
    /// `next` must be at most the set's length.
    pub(crate) const fn new(set: &'a mut OrderedSet<T, B>, next: usize) -> Cursor<'a, T, B> {
        Cursor {
            set,
            next,
            last_returned: None,
            removed: false,
        }
    }

    /// Returns true if [`next`](Cursor::next) would return an element.
    pub fn has_next(&self) -> bool {
        self.next < self.set.len()
    }

    /// Returns true if [`previous`](Cursor::previous) would return an element.
    pub const fn has_previous(&self) -> bool {
        self.next > 0
    }

    /// Returns the index of the element that [`next`](Cursor::next) would return. This is equal
    /// to the set's length when the cursor is at the end.
    pub const fn next_index(&self) -> usize {
        self.next
    }

    /// Returns the index of the element that [`previous`](Cursor::previous) would return, or None
    /// when the cursor is at the start.
    pub const fn previous_index(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    /// Steps forward over the next element and returns it.
    pub fn next(&mut self) -> Result<&T, NoSuchElement> {
        if !self.has_next() {
            return Err(NoSuchElement);
        }

        let pos = self.next;
        self.last_returned = Some(pos);
        self.removed = false;
        self.next += 1;

        Ok(&self.set.elements[pos])
    }

    /// Steps backward over the previous element and returns it.
    pub fn previous(&mut self) -> Result<&T, NoSuchElement> {
        let pos = self.previous_index().ok_or(NoSuchElement)?;

        self.next = pos;
        self.last_returned = Some(pos);
        self.removed = false;

        Ok(&self.set.elements[pos])
    }

    /// Removes and returns the element last returned by [`next`](Cursor::next) or
    /// [`previous`](Cursor::previous). The set may be compacted afterwards, exactly as with
    /// [`OrderedSet::remove_at`].
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::ordered::{IllegalState, OrderedSet};
    /// let mut set = OrderedSet::from(['a', 'b', 'c']);
    /// let mut cursor = set.cursor();
    ///
    /// assert_eq!(cursor.remove(), Err(IllegalState::NoCurrent));
    /// cursor.next().unwrap();
    /// assert_eq!(cursor.remove(), Ok('a'));
    /// assert_eq!(cursor.remove(), Err(IllegalState::AlreadyRemoved));
    /// ```
    pub fn remove(&mut self) -> Result<T, IllegalState> {
        let pos = self.last_returned.ok_or(IllegalState::NoCurrent)?;
        if self.removed {
            return Err(IllegalState::AlreadyRemoved);
        }

        let removed = self.set.take_at(pos);
        self.set.compact();

        if pos < self.next {
            self.next -= 1;
        }
        self.removed = true;

        Ok(removed)
    }

    /// Replacing elements through a cursor isn't supported, this always returns an error. Use
    /// [`OrderedSet::replace`] instead.
    pub fn set(&mut self, _value: T) -> Result<(), Unsupported> {
        Err(Unsupported::new("Cursor::set"))
    }

    /// Inserting elements through a cursor isn't supported, this always returns an error. Use
    /// [`OrderedSet::insert`] instead.
    pub fn add(&mut self, _value: T) -> Result<(), Unsupported> {
        Err(Unsupported::new("Cursor::add"))
    }

    /// Consumes the cursor, handing back the borrow of its set.
    pub fn into_set(self) -> &'a mut OrderedSet<T, B> {
        self.set
    }
}

impl<'a, T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for Cursor<'a, T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("set", &self.set)
            .field("next", &self.next)
            .field("last_returned", &self.last_returned)
            .field("removed", &self.removed)
            .finish()
    }
}
