use std::collections::{BTreeSet, HashSet, btree_set, hash_set};
use std::hash::{BuildHasher, Hash};
use std::iter::{Chain, FusedIterator};

/// A collection of unique items that can report its size and answer membership queries.
///
/// This is the seam that bulk operations such as
/// [`OrderedSet::remove_all`](crate::collections::ordered::OrderedSet::remove_all) accept, so they
/// work against sets from this crate and from [`std`] alike. The provided methods build lazy set
/// algebra over any two implementors, which may be of different types. Results are yielded in the
/// iteration order of the left operand, followed by the right operand where applicable.
pub trait Set<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of items in the set.
    fn len(&self) -> usize;

    /// Returns true if the set contains no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the set contains an item equal to `item`.
    fn contains(&self, item: &T) -> bool;

    /// Returns an iterator over all items in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Creates a borrowed iterator over all items that are in `self` but not `other`.
    /// (`self \ other`)
    fn difference<'a, R: Set<T>>(&'a self, other: &'a R) -> Difference<'a, Self, R, T>
    where
        Self: Sized,
        T: 'a,
    {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn symmetric_difference<'a, R: Set<T>>(
        &'a self,
        other: &'a R,
    ) -> SymmetricDifference<'a, Self, R, T>
    where
        Self: Sized,
        T: 'a,
    {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`.
    /// (`self ∩ other`)
    fn intersection<'a, R: Set<T>>(&'a self, other: &'a R) -> Intersection<'a, Self, R, T>
    where
        Self: Sized,
        T: 'a,
    {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`.
    /// (`self ∪ other`)
    fn union<'a, R: Set<T>>(&'a self, other: &'a R) -> Union<'a, Self, R, T>
    where
        Self: Sized,
        T: 'a,
    {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if `other` contains all items of `self`. (`self ⊆ other`)
    fn is_subset<R: Set<T>>(&self, other: &R) -> bool
    where
        Self: Sized,
    {
        self.len() <= other.len() && other.is_superset(self)
    }

    /// Returns true if `self` contains all items of `other`. (`self ⊇ other`)
    fn is_superset<R: Set<T>>(&self, other: &R) -> bool {
        other.iter().all(|item| self.contains(item))
    }

    /// Returns true if `self` and `other` have no items in common.
    fn is_disjoint<R: Set<T>>(&self, other: &R) -> bool {
        !other.iter().any(|item| self.contains(item))
    }
}

pub struct Difference<'a, L: Set<T> + 'a, R: Set<T> + 'a, T: 'a> {
    pub(crate) inner: L::Iter<'a>,
    pub(crate) other: &'a R,
}

impl<'a, L: Set<T> + 'a, R: Set<T> + 'a, T: 'a> Iterator for Difference<'a, L, R, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, L: Set<T> + 'a, R: Set<T> + 'a, T: 'a> FusedIterator for Difference<'a, L, R, T>
where
    L::Iter<'a>: FusedIterator,
{
}

pub struct SymmetricDifference<'a, L: Set<T> + 'a, R: Set<T> + 'a, T: 'a> {
    pub(crate) inner: Chain<Difference<'a, L, R, T>, Difference<'a, R, L, T>>,
}

impl<'a, L: Set<T> + 'a, R: Set<T> + 'a, T: 'a> Iterator for SymmetricDifference<'a, L, R, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub struct Intersection<'a, L: Set<T> + 'a, R: Set<T> + 'a, T: 'a> {
    pub(crate) inner: L::Iter<'a>,
    pub(crate) other: &'a R,
}

impl<'a, L: Set<T> + 'a, R: Set<T> + 'a, T: 'a> Iterator for Intersection<'a, L, R, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && !self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

pub struct Union<'a, L: Set<T> + 'a, R: Set<T> + 'a, T: 'a> {
    pub(crate) inner: Chain<L::Iter<'a>, Difference<'a, R, L, T>>,
}

impl<'a, L: Set<T> + 'a, R: Set<T> + 'a, T: 'a> Iterator for Union<'a, L, R, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T> for HashSet<T, S> {
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }
}

impl<T: Ord> Set<T> for BTreeSet<T> {
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        BTreeSet::iter(self)
    }
}
