// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The enumerator core: one generic struct, five decode rules.
//!
//! Every variant shares the same lifecycle. Construction computes
//! `size` (elements per produced tuple, or count of choices) and
//! `length` (total object count, exact, arbitrary precision when
//! needed) from the seed, then the enumerator is frozen: `nth` is a
//! pure function of the index, so a shared instance may be queried from
//! many threads without coordination.
//!
//! The set of variants is closed, so decoding dispatches over the
//! [`Kind`] tag rather than through trait objects. Each variant's digit
//! arithmetic lives in its own submodule and works on seed *positions*;
//! this module owns validation and the projection from positions to
//! seed elements.
//!
//! # Example
//!
//! ```
//! use combinatorics::{Enumerator, Int};
//!
//! let combos = Enumerator::combination(vec!['a', 'b', 'c'], 2).unwrap();
//! assert_eq!(combos.length(), &Int::from(3));
//! assert_eq!(combos.nth(0).unwrap(), vec!['a', 'b']);
//! assert_eq!(combos.nth(2).unwrap(), vec!['b', 'c']);
//!
//! let all: Vec<Vec<char>> = combos.iter().collect();
//! assert_eq!(all.len(), 3);
//! ```

pub mod base_n;
pub mod cartesian;
pub mod combination;
pub mod cursor;
pub mod permutation;
pub mod power_set;

pub use cursor::Tuples;

use crate::arith::Int;
use crate::codec::counting::{combination_count, permutation_count};
use crate::error::Error;

/// Which decode rule an enumerator applies, with the per-variant data
/// the rule needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Ordered selections without repetition; Lehmer-code decoding.
    Permutation,
    /// Unordered selections without repetition; combinadic decoding.
    Combination,
    /// Fixed-length tuples over an alphabet of `base` symbols.
    BaseN { base: usize },
    /// All subsets of the seed, decoded from the index's bit pattern.
    PowerSet,
    /// One choice per factor; `factors` holds each factor's length and
    /// the seed stores the factors concatenated in order.
    Cartesian { factors: Vec<usize> },
}

/// An indexed combinatorial enumeration over a frozen seed.
///
/// The seed is an ordered sequence of opaque elements, addressed only
/// by position: elements are never compared or hashed. `length` may
/// exceed native integer range; [`Enumerator::is_big`] reports when it
/// does.
#[derive(Debug, Clone)]
pub struct Enumerator<T> {
    seed: Vec<T>,
    size: usize,
    length: Int,
    kind: Kind,
}

impl<T> Enumerator<T> {
    /// Enumerate the k-permutations of `seed`, `P(N, k)` objects.
    ///
    /// Fails when `size` exceeds the seed length.
    pub fn permutation(seed: Vec<T>, size: usize) -> Result<Self, Error> {
        let length = permutation_count(seed.len(), size)?;
        Ok(Self {
            seed,
            size,
            length,
            kind: Kind::Permutation,
        })
    }

    /// Enumerate the k-combinations of `seed`, `C(N, k)` objects.
    ///
    /// Fails when `size` exceeds the seed length.
    pub fn combination(seed: Vec<T>, size: usize) -> Result<Self, Error> {
        let length = combination_count(seed.len(), size)?;
        Ok(Self {
            seed,
            size,
            length,
            kind: Kind::Combination,
        })
    }

    /// Enumerate all `size`-length tuples over `seed` as an alphabet,
    /// `N^size` objects. Repetition is allowed; `size` zero gives the
    /// single empty tuple.
    pub fn base_n(seed: Vec<T>, size: usize) -> Self {
        let base = seed.len();
        let mut length = Int::from(1);
        for _ in 0..size {
            length = &length * base;
        }
        Self {
            seed,
            size,
            length,
            kind: Kind::BaseN { base },
        }
    }

    /// Enumerate all subsets of `seed`, `2^N` objects.
    pub fn power_set(seed: Vec<T>) -> Self {
        let size = seed.len();
        let length = Int::power_of_two(size);
        Self {
            seed,
            size,
            length,
            kind: Kind::PowerSet,
        }
    }

    /// Enumerate the Cartesian product of `factors`, one element drawn
    /// from each; the last factor cycles fastest.
    ///
    /// Fails on an empty factor list, which would leave the length
    /// ill-defined.
    pub fn cartesian_product(factors: Vec<Vec<T>>) -> Result<Self, Error> {
        if factors.is_empty() {
            return Err(Error::EmptyProduct);
        }
        let sizes: Vec<usize> = factors.iter().map(Vec::len).collect();
        let mut length = Int::from(1);
        for &s in &sizes {
            length = &length * s;
        }
        let size = factors.len();
        let seed: Vec<T> = factors.into_iter().flatten().collect();
        Ok(Self {
            seed,
            size,
            length,
            kind: Kind::Cartesian { factors: sizes },
        })
    }

    /// Elements per produced tuple (k), or the count of choices for
    /// power sets and Cartesian products.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of objects in the enumeration, exact.
    #[inline]
    pub fn length(&self) -> &Int {
        &self.length
    }

    /// Whether `length` exceeds the native integer range.
    #[inline]
    pub fn is_big(&self) -> bool {
        !self.length.fits_native()
    }

    /// Whether exact indexing is guaranteed even when `is_big`.
    ///
    /// Arbitrary precision is always available here, so this is
    /// constantly true; the predicate exists so callers can keep the
    /// degraded-mode check portable to platforms without it.
    #[inline]
    pub fn is_safe(&self) -> bool {
        true
    }

    /// The decode rule and its per-variant data.
    #[inline]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// The seed elements. For a Cartesian product this is the factors
    /// concatenated in order.
    #[inline]
    pub fn seed(&self) -> &[T] {
        &self.seed
    }

    /// Decode index `n` into the choice vector of the nth object: seed
    /// positions for permutations, combinations and power sets, digit
    /// values for base-N, one index per factor for Cartesian products.
    ///
    /// Fails with a range error when `n` is outside `[0, length)`.
    pub fn nth_indices(&self, n: impl Into<Int>) -> Result<Vec<usize>, Error> {
        let n = n.into();
        self.check(&n)?;
        Ok(self.decode(&n))
    }

    /// Map a choice vector back to its index, inverting
    /// [`Enumerator::nth_indices`].
    ///
    /// Fails when the vector does not describe a valid object: wrong
    /// arity, a choice out of range, a repeated position where the
    /// variant forbids one, or positions out of ascending order where
    /// it requires them.
    pub fn rank(&self, choices: &[usize]) -> Result<Int, Error> {
        self.validate_choices(choices)?;
        Ok(match &self.kind {
            Kind::Permutation => permutation::rank(choices, self.seed.len()),
            Kind::Combination => combination::rank(choices, self.seed.len()),
            Kind::BaseN { base } => base_n::rank(choices, *base),
            Kind::PowerSet => power_set::rank(choices),
            Kind::Cartesian { factors } => cartesian::rank(choices, factors),
        })
    }

    /// Decode without the range check, for callers that already
    /// validated or generated the index.
    pub(crate) fn decode(&self, n: &Int) -> Vec<usize> {
        match &self.kind {
            Kind::Permutation => permutation::decode(n, self.seed.len(), self.size),
            Kind::Combination => combination::decode(n, self.seed.len(), self.size),
            Kind::BaseN { base } => base_n::decode(n, *base, self.size),
            Kind::PowerSet => power_set::decode(n, self.seed.len()),
            Kind::Cartesian { factors } => cartesian::decode(n, factors),
        }
    }

    fn check(&self, n: &Int) -> Result<(), Error> {
        if n.is_negative() || *n >= self.length {
            return Err(Error::IndexOutOfRange {
                index: n.clone(),
                length: self.length.clone(),
            });
        }
        Ok(())
    }

    fn validate_choices(&self, choices: &[usize]) -> Result<(), Error> {
        let malformed = |reason| Err(Error::MalformedChoices { reason });
        match &self.kind {
            Kind::Permutation => {
                if choices.len() != self.size {
                    return malformed("wrong number of choices");
                }
                if choices.iter().any(|&p| p >= self.seed.len()) {
                    return malformed("position outside the seed");
                }
                for (i, &p) in choices.iter().enumerate() {
                    if choices[..i].contains(&p) {
                        return malformed("repeated position");
                    }
                }
            }
            Kind::Combination => {
                if choices.len() != self.size {
                    return malformed("wrong number of choices");
                }
                if choices.iter().any(|&p| p >= self.seed.len()) {
                    return malformed("position outside the seed");
                }
                if !choices.windows(2).all(|w| w[0] < w[1]) {
                    return malformed("positions not in ascending order");
                }
            }
            Kind::BaseN { base } => {
                if choices.len() != self.size {
                    return malformed("wrong number of choices");
                }
                if choices.iter().any(|&d| d >= *base) {
                    return malformed("digit outside the base");
                }
            }
            Kind::PowerSet => {
                if choices.iter().any(|&p| p >= self.seed.len()) {
                    return malformed("position outside the seed");
                }
                if !choices.windows(2).all(|w| w[0] < w[1]) {
                    return malformed("positions not in ascending order");
                }
            }
            Kind::Cartesian { factors } => {
                if choices.len() != factors.len() {
                    return malformed("wrong number of choices");
                }
                if choices.iter().zip(factors.iter()).any(|(&c, &s)| c >= s) {
                    return malformed("choice outside its factor");
                }
            }
        }
        Ok(())
    }
}

impl<T: Clone> Enumerator<T> {
    /// Produce the nth object as seed elements, in order.
    ///
    /// Fails with a range error when `n` is outside `[0, length)`,
    /// including negative indices.
    pub fn nth(&self, n: impl Into<Int>) -> Result<Vec<T>, Error> {
        let n = n.into();
        self.check(&n)?;
        Ok(self.project(&self.decode(&n)))
    }

    /// A fresh forward cursor over all objects in ascending index
    /// order. Calling this again restarts from index zero.
    pub fn iter(&self) -> Tuples<'_, T> {
        Tuples::new(self)
    }

    /// Every object, eagerly.
    ///
    /// The count is exponential in the seed size; callers are expected
    /// to have checked `length` first.
    pub fn to_vec(&self) -> Vec<Vec<T>> {
        self.iter().collect()
    }

    /// Project a choice vector onto the seed elements.
    pub(crate) fn project(&self, choices: &[usize]) -> Vec<T> {
        match &self.kind {
            Kind::Cartesian { factors } => {
                let mut offset = 0;
                choices
                    .iter()
                    .zip(factors.iter())
                    .map(|(&choice, &size)| {
                        let element = self.seed[offset + choice].clone();
                        offset += size;
                        element
                    })
                    .collect()
            }
            _ => choices.iter().map(|&p| self.seed[p].clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_construction() {
        let en = Enumerator::permutation(vec![1, 2, 3, 4], 2).unwrap();
        assert_eq!(en.size(), 2);
        assert_eq!(en.length(), &Int::from(12));
        assert!(!en.is_big());
        assert!(en.is_safe());
    }

    #[test]
    fn test_oversized_selection_rejected() {
        let err = Enumerator::permutation(vec![1, 2, 3], 4).unwrap_err();
        assert_eq!(err, Error::SizeExceedsSeed { size: 4, seed: 3 });

        let err = Enumerator::combination(vec![1, 2, 3], 4).unwrap_err();
        assert_eq!(err, Error::SizeExceedsSeed { size: 4, seed: 3 });
    }

    #[test]
    fn test_empty_cartesian_product_rejected() {
        let err = Enumerator::<u8>::cartesian_product(vec![]).unwrap_err();
        assert_eq!(err, Error::EmptyProduct);
    }

    #[test]
    fn test_base_n_degenerate_sizes() {
        let unary = Enumerator::base_n(vec!['x'], 3);
        assert_eq!(unary.length(), &Int::from(1));
        assert_eq!(unary.nth(0).unwrap(), vec!['x', 'x', 'x']);

        let empty_tuple = Enumerator::base_n(vec!['a', 'b'], 0);
        assert_eq!(empty_tuple.length(), &Int::from(1));
        assert_eq!(empty_tuple.nth(0).unwrap(), Vec::<char>::new());

        // An empty alphabet with a positive size has nothing to produce.
        let empty_alphabet = Enumerator::base_n(Vec::<char>::new(), 2);
        assert_eq!(empty_alphabet.length(), &Int::from(0));
        assert!(empty_alphabet.nth(0).is_err());
    }

    #[test]
    fn test_cartesian_projection() {
        let en = Enumerator::cartesian_product(vec![vec![1, 2], vec![7, 8, 9]]).unwrap();
        assert_eq!(en.size(), 2);
        assert_eq!(en.length(), &Int::from(6));
        assert_eq!(en.nth(0).unwrap(), vec![1, 7]);
        assert_eq!(en.nth(5).unwrap(), vec![2, 9]);
    }

    #[test]
    fn test_nth_indices_and_rank_round_trip() {
        let en = Enumerator::combination(vec!['a', 'b', 'c', 'd'], 2).unwrap();
        for n in 0..6 {
            let choices = en.nth_indices(n).unwrap();
            assert_eq!(en.rank(&choices).unwrap(), Int::from(n), "n = {}", n);
        }
    }

    #[test]
    fn test_rank_rejects_malformed_choices() {
        let perm = Enumerator::permutation(vec![1, 2, 3], 2).unwrap();
        assert!(matches!(
            perm.rank(&[0]).unwrap_err(),
            Error::MalformedChoices { .. }
        ));
        assert!(matches!(
            perm.rank(&[1, 1]).unwrap_err(),
            Error::MalformedChoices { .. }
        ));
        assert!(matches!(
            perm.rank(&[0, 3]).unwrap_err(),
            Error::MalformedChoices { .. }
        ));

        let combo = Enumerator::combination(vec![1, 2, 3], 2).unwrap();
        assert!(matches!(
            combo.rank(&[2, 1]).unwrap_err(),
            Error::MalformedChoices { .. }
        ));
    }

    #[test]
    fn test_range_check_boundaries() {
        let en = Enumerator::power_set(vec![1, 2]);
        assert_eq!(en.length(), &Int::from(4));
        assert!(en.nth(3).is_ok());
        assert!(matches!(
            en.nth(4).unwrap_err(),
            Error::IndexOutOfRange { .. }
        ));
        assert!(matches!(
            en.nth(-1).unwrap_err(),
            Error::IndexOutOfRange { .. }
        ));
    }

    #[test]
    fn test_is_big_thresholds() {
        let small = Enumerator::permutation((0..20).collect::<Vec<_>>(), 20).unwrap();
        assert!(!small.is_big());

        let big = Enumerator::permutation((0..21).collect::<Vec<_>>(), 21).unwrap();
        assert!(big.is_big());
        assert!(big.is_safe());
    }
}
