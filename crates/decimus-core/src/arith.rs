//! Addition, subtraction, multiplication, and magnitude comparison.
//!
//! All three operations work schoolbook-style on aligned digit
//! strings: operands are brought to a common exponent by appending
//! zeros, padded to a common width, and then combined digit by digit
//! with explicit carry or borrow propagation.

use std::cmp::Ordering;
use std::iter;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

use crate::decimal::{Decimal, DigitBuf};

impl Decimal {
    /// Compares absolute values, ignoring signs.
    ///
    /// The implied integer-part lengths are compared first; only when
    /// they tie are the digit strings aligned to a common exponent and
    /// compared lexicographically.
    #[must_use]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        match self.integer_len().cmp(&other.integer_len()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        let (lhs, rhs, _) = align(self, other);
        lhs.cmp(&rhs)
    }
}

/// Brings both digit strings to the smaller of the two exponents and a
/// common width. Appended zeros scale the wider-exponent operand down;
/// prepended zeros only pad for positional arithmetic.
pub(crate) fn align(a: &Decimal, b: &Decimal) -> (DigitBuf, DigitBuf, i64) {
    let exponent = a.exponent.min(b.exponent);
    let mut lhs = a.digits.clone();
    let mut rhs = b.digits.clone();
    lhs.extend(iter::repeat(0).take((a.exponent - exponent) as usize));
    rhs.extend(iter::repeat(0).take((b.exponent - exponent) as usize));
    let width = lhs.len().max(rhs.len());
    pad_left(&mut lhs, width);
    pad_left(&mut rhs, width);
    (lhs, rhs, exponent)
}

fn pad_left(digits: &mut DigitBuf, width: usize) {
    let missing = width - digits.len();
    if missing > 0 {
        digits.insert_many(0, iter::repeat(0).take(missing));
    }
}

/// Compares two leading-zero-free digit strings as integers. An empty
/// slice is zero.
pub(crate) fn cmp_digit_slices(a: &[u8], b: &[u8]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}

/// Digit-by-digit addition of equal-width strings, carrying into an
/// extra leading digit when needed.
fn add_aligned(lhs: &[u8], rhs: &[u8]) -> DigitBuf {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut out = DigitBuf::with_capacity(lhs.len() + 1);
    let mut carry = 0;
    for (&a, &b) in lhs.iter().zip(rhs).rev() {
        let sum = a + b + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out.reverse();
    out
}

/// Right-aligned digit subtraction with borrow propagation. The
/// minuend must not be numerically smaller than the subtrahend; the
/// result is returned without leading zeros (empty means zero).
pub(crate) fn sub_digit_slices(minuend: &[u8], subtrahend: &[u8]) -> DigitBuf {
    debug_assert!(minuend.len() >= subtrahend.len());
    let offset = minuend.len() - subtrahend.len();
    let mut out = DigitBuf::with_capacity(minuend.len());
    let mut borrow = 0_i16;
    for i in (0..minuend.len()).rev() {
        let small = if i >= offset {
            i16::from(subtrahend[i - offset])
        } else {
            0
        };
        let mut large = i16::from(minuend[i]) - borrow;
        if large < small {
            large += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push((large - small) as u8);
    }
    debug_assert_eq!(borrow, 0, "minuend was smaller than subtrahend");
    out.reverse();
    let leading = out.iter().take_while(|&&d| d == 0).count();
    out.drain(..leading);
    out
}

fn add_values(a: &Decimal, b: &Decimal) -> Decimal {
    // Mixed signs reduce to a subtraction of magnitudes.
    if a.negative != b.negative {
        if a.negative {
            return sub_values(b, &a.abs());
        }
        return sub_values(a, &b.abs());
    }
    let (lhs, rhs, exponent) = align(a, b);
    Decimal::new_normalized(a.negative, add_aligned(&lhs, &rhs), exponent)
}

fn sub_values(a: &Decimal, b: &Decimal) -> Decimal {
    // Mixed signs reduce to an addition of magnitudes.
    if a.negative != b.negative {
        let (lhs, rhs, exponent) = align(a, b);
        return Decimal::new_normalized(a.negative, add_aligned(&lhs, &rhs), exponent);
    }
    let a_is_larger = a.cmp_magnitude(b) != Ordering::Less;
    let (lhs, rhs, exponent) = align(a, b);
    let digits = if a_is_larger {
        sub_digit_slices(&lhs, &rhs)
    } else {
        sub_digit_slices(&rhs, &lhs)
    };
    Decimal::new_normalized(a.negative == a_is_larger, digits, exponent)
}

fn mul_values(a: &Decimal, b: &Decimal) -> Decimal {
    if a.is_zero() || b.is_zero() {
        return Decimal::zero();
    }
    let negative = a.negative != b.negative;
    let exponent = a.exponent + b.exponent;
    // Classic long multiplication into a buffer wide enough for every
    // partial product.
    let mut buffer = DigitBuf::from_elem(0, a.digits.len() + b.digits.len());
    for i in (0..a.digits.len()).rev() {
        let lhs = u16::from(a.digits[i]);
        let mut carry = 0_u16;
        for j in (0..b.digits.len()).rev() {
            let index = i + j + 1;
            let product = lhs * u16::from(b.digits[j]) + u16::from(buffer[index]) + carry;
            buffer[index] = (product % 10) as u8;
            carry = product / 10;
        }
        buffer[i] += carry as u8;
    }
    Decimal::new_normalized(negative, buffer, exponent)
}

impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_values(&self, &rhs)
    }
}

impl Add<&Decimal> for Decimal {
    type Output = Self;

    fn add(self, rhs: &Decimal) -> Self::Output {
        add_values(&self, rhs)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self::Output {
        add_values(self, rhs)
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_values(&self, &rhs)
    }
}

impl Sub<&Decimal> for Decimal {
    type Output = Self;

    fn sub(self, rhs: &Decimal) -> Self::Output {
        sub_values(&self, rhs)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_values(self, rhs)
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_values(&self, &rhs)
    }
}

impl Mul<&Decimal> for Decimal {
    type Output = Self;

    fn mul(self, rhs: &Decimal) -> Self::Output {
        mul_values(&self, rhs)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_values(self, rhs)
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let negative = !self.negative;
        Self::new_normalized(negative, self.digits, self.exponent)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
