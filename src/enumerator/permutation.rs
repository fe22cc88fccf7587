// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lehmer-code decoding and ranking for k-permutations.
//!
//! A rank `n` below `P(N, k)` is scaled by `(N-k)!` into a full
//! N-digit factoradic number. The top `k` digits, taken most
//! significant first, each select one element from a shrinking pool of
//! seed positions: digit `d` at step `i` removes the `d`-th remaining
//! position. The bottom `N-k` digits of the scaled value are zero, so
//! ranking inverts the scaling with an exact division.

use crate::arith::Int;
use crate::codec::counting::factorial;
use crate::codec::factoradic::{digits_unchecked, from_factoradic};

/// Decode a validated rank into `size` distinct seed positions.
pub(crate) fn decode(n: &Int, seed_len: usize, size: usize) -> Vec<usize> {
    let offset = seed_len - size;
    let full = n * &factorial(offset);
    let digits = digits_unchecked(&full, seed_len);

    let mut pool: Vec<usize> = (0..seed_len).collect();
    let mut positions = Vec::with_capacity(size);
    for i in (offset..seed_len).rev() {
        positions.push(pool.remove(digits[i]));
    }
    positions
}

/// Rank a tuple of distinct seed positions, inverting [`decode`].
pub(crate) fn rank(positions: &[usize], seed_len: usize) -> Int {
    let offset = seed_len - positions.len();
    let mut digits = vec![0usize; seed_len];
    for (i, &p) in positions.iter().enumerate() {
        // Lehmer digit: the position, less the earlier choices below it.
        let below = positions[..i].iter().filter(|&&q| q < p).count();
        digits[seed_len - 1 - i] = p - below;
    }
    from_factoradic(&digits).div_exact(&factorial(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_full_permutation() {
        assert_eq!(decode(&Int::from(0), 4, 4), vec![0, 1, 2, 3]);
        // Rank 23 is the lexicographically last permutation of four.
        assert_eq!(decode(&Int::from(23), 4, 4), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_partial_permutation_order() {
        // P(3, 2) = 6 tuples in factoradic order.
        let expected = [
            vec![0, 1],
            vec![0, 2],
            vec![1, 0],
            vec![1, 2],
            vec![2, 0],
            vec![2, 1],
        ];
        for (n, tuple) in expected.iter().enumerate() {
            assert_eq!(&decode(&Int::from(n as i64), 3, 2), tuple, "n = {}", n);
        }
    }

    #[test]
    fn test_rank_inverts_decode() {
        for n in 0..24 {
            let positions = decode(&Int::from(n), 4, 4);
            assert_eq!(rank(&positions, 4), Int::from(n), "n = {}", n);
        }
        for n in 0..60 {
            let positions = decode(&Int::from(n), 5, 3);
            assert_eq!(rank(&positions, 5), Int::from(n), "n = {}", n);
        }
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(decode(&Int::from(0), 3, 0), Vec::<usize>::new());
        assert_eq!(rank(&[], 3), Int::from(0));
    }

    #[test]
    fn test_big_rank_round_trip() {
        use crate::codec::counting::permutation_count;

        // 22 elements force the arbitrary-precision arm.
        let length = permutation_count(22, 22).unwrap();
        let last = &length - &Int::from(1);
        let positions = decode(&last, 22, 22);
        let reversed: Vec<usize> = (0..22).rev().collect();
        assert_eq!(positions, reversed);
        assert_eq!(rank(&positions, 22), last);
    }
}
