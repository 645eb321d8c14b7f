//! Hash set of grid coordinates.
//!
//! Backs both the live-cell set and the candidate set of the engine. Iteration
//! order is unspecified and no caller may rely on it.

use crate::Pos2;
use std::collections::{HashSet, hash_set};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateSet {
    cells: HashSet<Pos2>,
}

impl CoordinateSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        self.cells.contains(&pos)
    }

    /// Adds `pos`, returning `false` if it was already present
    #[inline]
    pub fn insert(&mut self, pos: Pos2) -> bool {
        self.cells.insert(pos)
    }

    /// Removes `pos`, returning `false` if it was absent
    #[inline]
    pub fn remove(&mut self, pos: Pos2) -> bool {
        self.cells.remove(&pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of members the set can hold without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.capacity()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterates every member once. Calling this again restarts the sequence.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.cells.iter(),
        }
    }

    /// Members in row-major order
    pub fn to_sorted_vec(&self) -> Vec<Pos2> {
        let mut cells: Vec<Pos2> = self.iter().collect();
        cells.sort_unstable();
        cells
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_set::Iter<'a, Pos2>,
}
impl Iterator for Iter<'_> {
    type Item = Pos2;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CoordinateSet {
    type Item = Pos2;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Pos2> for CoordinateSet {
    fn from_iter<I: IntoIterator<Item = Pos2>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Pos2> for CoordinateSet {
    fn extend<I: IntoIterator<Item = Pos2>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
