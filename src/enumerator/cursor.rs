// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Forward cursor over an enumeration.
//!
//! [`Tuples`] holds the owning enumerator and the next index as an
//! exact counter, and pulls one object per call. It is plain
//! synchronous iteration; restarting means asking the enumerator for a
//! fresh cursor.

use crate::arith::Int;
use crate::enumerator::Enumerator;

/// Iterator yielding every object of an enumeration in ascending index
/// order.
#[derive(Debug, Clone)]
pub struct Tuples<'a, T> {
    enumerator: &'a Enumerator<T>,
    next: Int,
}

impl<'a, T> Tuples<'a, T> {
    pub(crate) fn new(enumerator: &'a Enumerator<T>) -> Self {
        Self {
            enumerator,
            next: Int::from(0),
        }
    }
}

impl<'a, T: Clone> Iterator for Tuples<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= *self.enumerator.length() {
            return None;
        }
        let choices = self.enumerator.decode(&self.next);
        self.next.increment();
        Some(self.enumerator.project(&choices))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.enumerator.length() - &self.next).to_usize() {
            Some(remaining) => (remaining, Some(remaining)),
            // More objects than a usize can count.
            None => (usize::MAX, None),
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a Enumerator<T> {
    type Item = Vec<T>;
    type IntoIter = Tuples<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
