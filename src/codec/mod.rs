// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Factorial-number-system codec.
//!
//! This module holds the counting functions (`factorial`,
//! `permutation_count`, `combination_count`) and the conversion between
//! ordinal values and their factoradic digit sequences. Everything the
//! enumerator variants do is built on these primitives:
//!
//! - A permutation rank is a factoradic number whose digits drive the
//!   Lehmer decoding.
//! - A combination rank walks the same digit space restricted to one
//!   canonical representative per block of `k!` permutations.
//! - Base-N, power-set and Cartesian ranks are the fixed-radix and
//!   binary specializations of the same positional idea.

pub mod counting;
pub mod factoradic;

pub use counting::{combination_count, factorial, permutation_count};
pub use factoradic::{factoradic, from_factoradic};
