// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Indexed combinatorial enumeration.
//!
//! Given a finite seed sequence, this crate enumerates permutations,
//! combinations, base-N tuples, power sets and Cartesian products, with
//! direct access to the nth object of any enumeration: no object before
//! it is materialized. The reverse map is available too, from an
//! object's choice vector back to its index.
//!
//! # Architecture
//!
//! The crate is layered, leaves first:
//!
//! - [`arith`] supplies [`Int`], an exact integer that starts native and
//!   escalates to arbitrary precision the moment an operation would
//!   lose exactness. Object counts cross that line early: a 21-element
//!   seed already has more permutations than `i64` can hold.
//! - [`codec`] is the factorial number system: `n!`, `P(n, k)`,
//!   `C(n, k)`, and the conversion between ordinals and factoradic
//!   digit sequences.
//! - [`enumerator`] holds the one generic [`Enumerator`] struct. A
//!   closed [`Kind`] tag picks the decode rule per variant; each rule
//!   turns an index into a choice vector of seed positions, and the
//!   core projects positions onto elements.
//!
//! Seed elements are opaque. They are selected by position, never
//! compared or hashed, and the seed is frozen at construction: every
//! query is a pure function of the index, safe to issue from multiple
//! threads against a shared enumerator.
//!
//! # Example
//!
//! ```
//! use combinatorics::{Enumerator, Int};
//!
//! let perms = Enumerator::permutation(vec!['a', 'b', 'c'], 2).unwrap();
//! assert_eq!(perms.length(), &Int::from(6));
//! assert_eq!(perms.nth(0).unwrap(), vec!['a', 'b']);
//! assert_eq!(perms.nth(5).unwrap(), vec!['c', 'b']);
//!
//! // Indices round-trip through choice vectors.
//! let choices = perms.nth_indices(4).unwrap();
//! assert_eq!(perms.rank(&choices).unwrap(), Int::from(4));
//!
//! // Out-of-range indices fail rather than wrap.
//! assert!(perms.nth(6).is_err());
//! assert!(perms.nth(-1).is_err());
//! ```

pub mod arith;
pub mod codec;
pub mod enumerator;
pub mod error;

// Re-export the working surface
pub use arith::Int;
pub use codec::{combination_count, factoradic, factorial, from_factoradic, permutation_count};
pub use enumerator::{Enumerator, Kind, Tuples};
pub use error::Error;
