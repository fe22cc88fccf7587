// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact integer arithmetic with automatic precision escalation.
//!
//! Object counts in combinatorial enumeration outgrow fixed-width
//! integers almost immediately (`21!` already exceeds `i64`), so every
//! count and every index in this crate is an [`Int`]: a native `i64`
//! fast path that escalates to an arbitrary-precision integer the
//! moment an operation would lose exactness.

pub mod int;

pub use int::Int;
