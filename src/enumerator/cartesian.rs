// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mixed-radix decoding for Cartesian products.
//!
//! With factor sizes `s_1 .. s_m`, a rank below their product
//! decomposes odometer-style: the last factor cycles fastest.

use crate::arith::Int;

/// Decode a validated rank into one index per factor.
pub(crate) fn decode(n: &Int, factors: &[usize]) -> Vec<usize> {
    let mut choices = vec![0usize; factors.len()];
    let mut rest = n.clone();
    for (slot, &size) in choices.iter_mut().zip(factors.iter()).rev() {
        let (quotient, remainder) = rest.div_rem(size);
        *slot = remainder;
        rest = quotient;
    }
    choices
}

/// Rank a choice vector, inverting [`decode`].
pub(crate) fn rank(choices: &[usize], factors: &[usize]) -> Int {
    let mut total = Int::from(0);
    for (&choice, &size) in choices.iter().zip(factors.iter()) {
        total = &(&total * size) + &Int::from(choice);
    }
    total
}
