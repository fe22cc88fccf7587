// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for enumerator construction and indexing.

use thiserror::Error;

use crate::arith::Int;

/// Errors reported by enumerator constructors, the counting functions,
/// and the indexing operations.
///
/// `IndexOutOfRange` and `FactoradicOverflow` are range violations: the
/// arguments were of the right shape but outside the valid interval.
/// The remaining variants are domain violations: the request itself was
/// malformed and no interval of valid indices exists for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index outside `[0, length)` was passed to `nth` or `nth_indices`.
    #[error("index {index} out of range for enumeration of length {length}")]
    IndexOutOfRange { index: Int, length: Int },

    /// `factoradic` was asked to fit a value into too few digits
    /// (`n >= digits!`).
    #[error("{n} has no factoradic representation in {digits} digits")]
    FactoradicOverflow { n: Int, digits: usize },

    /// `factoradic` was given a negative value.
    #[error("factoradic is undefined for negative {n}")]
    FactoradicNegative { n: Int },

    /// The requested tuple size exceeds the seed length.
    #[error("tuple size {size} exceeds seed length {seed}")]
    SizeExceedsSeed { size: usize, seed: usize },

    /// A Cartesian product needs at least one factor.
    #[error("Cartesian product over an empty factor list")]
    EmptyProduct,

    /// A choice vector handed to `rank` does not describe a valid object
    /// of the enumeration.
    #[error("malformed choice vector: {reason}")]
    MalformedChoices { reason: &'static str },
}
