// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting functions: `n!`, `P(n, k)` and `C(n, k)`.
//!
//! All three return an [`Int`] and promote to arbitrary precision only
//! when the running product overflows the native arm. `P(n, k)` is
//! computed as the descending product of `k` consecutive integers
//! starting at `n` rather than as a quotient of two full factorials,
//! which keeps intermediates no larger than the result.

use crate::arith::Int;
use crate::error::Error;

/// `n!`, with `factorial(0) == 1`.
pub fn factorial(n: usize) -> Int {
    let mut product = Int::from(1);
    for i in 2..=n {
        product = &product * i;
    }
    product
}

/// `P(n, k)`: the number of k-permutations of n elements.
///
/// Defined as `1` when `k == 0`. Fails when `k > n`.
pub fn permutation_count(n: usize, k: usize) -> Result<Int, Error> {
    if k > n {
        return Err(Error::SizeExceedsSeed { size: k, seed: n });
    }
    Ok(falling_product(n, k))
}

/// `C(n, k)`: the number of k-combinations of n elements.
///
/// Computed as `P(n, j) / j!` for `j = min(k, n - k)`, an exact
/// division; the symmetry `C(n, k) == C(n, n - k)` holds by
/// construction. Fails when `k > n`.
pub fn combination_count(n: usize, k: usize) -> Result<Int, Error> {
    if k > n {
        return Err(Error::SizeExceedsSeed { size: k, seed: n });
    }
    Ok(choose(n, k))
}

/// `n * (n-1) * ... * (n-k+1)`, the descending product of `k` terms.
pub(crate) fn falling_product(n: usize, k: usize) -> Int {
    debug_assert!(k <= n, "falling product of {} terms from {}", k, n);
    let mut product = Int::from(1);
    for i in ((n - k + 1)..=n).rev() {
        product = &product * i;
    }
    product
}

/// `C(n, k)` without the domain check, for decode loops whose structure
/// already guarantees `k <= n`.
pub(crate) fn choose(n: usize, k: usize) -> Int {
    debug_assert!(k <= n, "choose({}, {}) out of domain", n, k);
    let k = k.min(n - k);
    falling_product(n, k).div_exact(&factorial(k))
}
