// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The [`Int`] tagged union: native `i64` or arbitrary precision.
//!
//! # Escalation rule
//!
//! If either operand is [`Int::Big`], or a native operation's true
//! mathematical result would overflow `i64`, the result is computed in
//! arbitrary precision and returned as [`Int::Big`]. Results never
//! demote back to the native arm; [`Int::fits_native`] answers the
//! value-level question instead, so `Int::from(6)` and a `Big` holding
//! `6` compare equal.
//!
//! Division is exact integer division only. The combinatorial
//! identities guarantee a zero remainder at every call site, and
//! [`Int::div_exact`] panics if that invariant is broken rather than
//! silently truncating.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// An exact integer: native fast path, arbitrary-precision spill.
#[derive(Debug, Clone)]
pub enum Int {
    /// Value held in a native `i64`.
    Native(i64),
    /// Value escalated to arbitrary precision.
    Big(BigInt),
}

impl Int {
    /// True when the value (not the representation) fits in `i64`.
    pub fn fits_native(&self) -> bool {
        match self {
            Int::Native(_) => true,
            Int::Big(b) => b.to_i64().is_some(),
        }
    }

    /// True when the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Int::Native(v) => *v < 0,
            Int::Big(b) => b.is_negative(),
        }
    }

    /// True when the value is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Int::Native(v) => *v == 0,
            Int::Big(b) => b.is_zero(),
        }
    }

    /// The value as a `usize`, if it fits.
    pub fn to_usize(&self) -> Option<usize> {
        match self {
            Int::Native(v) => usize::try_from(*v).ok(),
            Int::Big(b) => b.to_usize(),
        }
    }

    /// `2^exponent`, escalating once the bit position leaves `i64`.
    pub fn power_of_two(exponent: usize) -> Int {
        if exponent < 63 {
            Int::Native(1i64 << exponent)
        } else {
            Int::Big(BigInt::one() << exponent)
        }
    }

    /// Whether bit `i` of the binary expansion is set.
    ///
    /// The value must be non-negative; bits of negative values are not
    /// meaningful here.
    pub fn bit(&self, i: u64) -> bool {
        debug_assert!(!self.is_negative(), "bit access on a negative value");
        match self {
            Int::Native(v) => i < 63 && (v >> i) & 1 == 1,
            Int::Big(b) => b.magnitude().bit(i),
        }
    }

    /// Add one in place, escalating on overflow.
    pub fn increment(&mut self) {
        match self {
            Int::Native(v) => match v.checked_add(1) {
                Some(next) => *v = next,
                None => {
                    let value = *v;
                    *self = Int::Big(BigInt::from(value) + BigInt::one());
                }
            },
            Int::Big(b) => *b += BigInt::one(),
        }
    }

    /// Exact integer division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or does not divide `self` exactly.
    pub fn div_exact(&self, rhs: &Int) -> Int {
        match (self, rhs) {
            (Int::Native(a), Int::Native(b)) => {
                assert!(*b != 0, "division by zero");
                assert!(a % b == 0, "{} is not an exact multiple of {}", a, b);
                Int::Native(a / b)
            }
            _ => {
                let (a, b) = (self.to_big(), rhs.to_big());
                assert!(!b.is_zero(), "division by zero");
                let quotient = &a / &b;
                let remainder = &a % &b;
                assert!(
                    remainder.is_zero(),
                    "{} is not an exact multiple of {}",
                    a,
                    b
                );
                Int::Big(quotient)
            }
        }
    }

    /// Quotient and remainder by a native divisor, for digit extraction.
    ///
    /// The value must be non-negative, so the remainder always fits the
    /// divisor's range.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_rem(&self, divisor: usize) -> (Int, usize) {
        assert!(divisor != 0, "division by zero");
        debug_assert!(!self.is_negative(), "digit extraction on a negative value");
        match self {
            Int::Native(v) => match i64::try_from(divisor) {
                Ok(d) => (Int::Native(v / d), (v % d) as usize),
                // A divisor beyond i64 exceeds any native value.
                Err(_) => (Int::Native(0), *v as usize),
            },
            Int::Big(b) => {
                let d = BigInt::from(divisor);
                let quotient = b / &d;
                let remainder = (b % &d)
                    .to_usize()
                    .expect("remainder of a usize divisor fits usize");
                (Int::Big(quotient), remainder)
            }
        }
    }

    fn to_big(&self) -> BigInt {
        match self {
            Int::Native(v) => BigInt::from(*v),
            Int::Big(b) => b.clone(),
        }
    }
}

impl Add for &Int {
    type Output = Int;

    fn add(self, rhs: &Int) -> Int {
        match (self, rhs) {
            (Int::Native(a), Int::Native(b)) => match a.checked_add(*b) {
                Some(sum) => Int::Native(sum),
                None => Int::Big(BigInt::from(*a) + BigInt::from(*b)),
            },
            _ => Int::Big(self.to_big() + rhs.to_big()),
        }
    }
}

impl Sub for &Int {
    type Output = Int;

    fn sub(self, rhs: &Int) -> Int {
        match (self, rhs) {
            (Int::Native(a), Int::Native(b)) => match a.checked_sub(*b) {
                Some(diff) => Int::Native(diff),
                None => Int::Big(BigInt::from(*a) - BigInt::from(*b)),
            },
            _ => Int::Big(self.to_big() - rhs.to_big()),
        }
    }
}

impl Mul for &Int {
    type Output = Int;

    fn mul(self, rhs: &Int) -> Int {
        match (self, rhs) {
            (Int::Native(a), Int::Native(b)) => match a.checked_mul(*b) {
                Some(product) => Int::Native(product),
                None => Int::Big(BigInt::from(*a) * BigInt::from(*b)),
            },
            _ => Int::Big(self.to_big() * rhs.to_big()),
        }
    }
}

impl Mul<usize> for &Int {
    type Output = Int;

    fn mul(self, rhs: usize) -> Int {
        match self {
            Int::Native(v) => match i64::try_from(rhs).ok().and_then(|r| v.checked_mul(r)) {
                Some(product) => Int::Native(product),
                None => Int::Big(BigInt::from(*v) * BigInt::from(rhs)),
            },
            Int::Big(b) => Int::Big(b * BigInt::from(rhs)),
        }
    }
}

impl Add for Int {
    type Output = Int;

    fn add(self, rhs: Int) -> Int {
        &self + &rhs
    }
}

impl Sub for Int {
    type Output = Int;

    fn sub(self, rhs: Int) -> Int {
        &self - &rhs
    }
}

impl Mul for Int {
    type Output = Int;

    fn mul(self, rhs: Int) -> Int {
        &self * &rhs
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Int::Native(a), Int::Native(b)) => a.cmp(b),
            (Int::Big(a), Int::Big(b)) => a.cmp(b),
            (Int::Native(a), Int::Big(b)) => BigInt::from(*a).cmp(b),
            (Int::Big(a), Int::Native(b)) => a.cmp(&BigInt::from(*b)),
        }
    }
}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Int {}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Int::Native(v) => write!(f, "{}", v),
            Int::Big(b) => write!(f, "{}", b),
        }
    }
}

macro_rules! int_from_native {
    ($($t:ty),*) => {$(
        impl From<$t> for Int {
            fn from(value: $t) -> Int {
                Int::Native(value as i64)
            }
        }
    )*};
}

int_from_native!(u8, u16, u32, i8, i16, i32, i64);

macro_rules! int_from_wide {
    ($($t:ty),*) => {$(
        impl From<$t> for Int {
            fn from(value: $t) -> Int {
                match i64::try_from(value) {
                    Ok(v) => Int::Native(v),
                    Err(_) => Int::Big(BigInt::from(value)),
                }
            }
        }
    )*};
}

int_from_wide!(u64, u128, usize, i128);

impl From<BigInt> for Int {
    fn from(value: BigInt) -> Int {
        Int::Big(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_arithmetic_stays_native() {
        let a = Int::from(6);
        let b = Int::from(7);
        let product = &a * &b;
        assert!(matches!(product, Int::Native(42)));
    }

    #[test]
    fn test_overflow_escalates_to_big() {
        let a = Int::from(i64::MAX);
        let sum = &a + &Int::from(1);
        assert!(matches!(sum, Int::Big(_)));
        assert!(!sum.fits_native());
    }

    #[test]
    fn test_big_and_native_compare_by_value() {
        let native = Int::from(6);
        let big = Int::Big(BigInt::from(6));
        assert_eq!(native, big);
        assert!(Int::from(5) < big);
        assert!(Int::Big(BigInt::from(7)) > native);
    }

    #[test]
    fn test_div_exact() {
        let n = Int::from(720);
        assert_eq!(n.div_exact(&Int::from(6)), Int::from(120));

        let big = Int::Big(BigInt::from(720));
        assert_eq!(big.div_exact(&Int::from(6)), Int::from(120));
    }

    #[test]
    #[should_panic(expected = "not an exact multiple")]
    fn test_div_exact_rejects_remainder() {
        Int::from(7).div_exact(&Int::from(2));
    }

    #[test]
    fn test_div_rem_digits() {
        let (q, r) = Int::from(23).div_rem(5);
        assert_eq!(q, Int::from(4));
        assert_eq!(r, 3);

        let (q, r) = Int::Big(BigInt::from(23)).div_rem(5);
        assert_eq!(q, Int::from(4));
        assert_eq!(r, 3);
    }

    #[test]
    fn test_power_of_two() {
        assert_eq!(Int::power_of_two(0), Int::from(1));
        assert_eq!(Int::power_of_two(10), Int::from(1024));

        let big = Int::power_of_two(70);
        assert!(!big.fits_native());
        assert_eq!(
            big,
            Int::Big(BigInt::from(1_180_591_620_717_411_303_424u128))
        );
    }

    #[test]
    fn test_bit_access() {
        let n = Int::from(0b1011);
        assert!(n.bit(0));
        assert!(n.bit(1));
        assert!(!n.bit(2));
        assert!(n.bit(3));
        assert!(!n.bit(40));

        let big = Int::power_of_two(100);
        assert!(big.bit(100));
        assert!(!big.bit(99));
    }

    #[test]
    fn test_increment_escalates() {
        let mut n = Int::from(i64::MAX);
        n.increment();
        assert!(matches!(n, Int::Big(_)));

        let mut m = Int::from(41);
        m.increment();
        assert_eq!(m, Int::from(42));
    }

    #[test]
    fn test_wide_conversions() {
        assert!(matches!(Int::from(12usize), Int::Native(12)));
        assert!(matches!(Int::from(u64::MAX), Int::Big(_)));
        assert_eq!(Int::from(u64::MAX).to_usize(), Some(u64::MAX as usize));
        assert_eq!(Int::from(-1).to_usize(), None);
    }
}
