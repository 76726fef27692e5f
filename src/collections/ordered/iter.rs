use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice;
use std::vec;

use super::OrderedSet;

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for OrderedSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.elements.into_iter())
    }
}

/// A type for owned iteration over an [`OrderedSet`]. Produces values of type `T`, in order.
///
/// See [`OrderedSet::into_iter`].
pub struct IntoIter<T>(pub(crate) vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a OrderedSet<T, B> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
