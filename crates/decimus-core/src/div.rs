//! Fixed precision truncating division.

use std::cmp::Ordering;
use std::iter;
use std::ops::Div;

use num_traits::Zero;

use crate::arith::{cmp_digit_slices, sub_digit_slices};
use crate::decimal::{Decimal, DigitBuf};
use crate::error::ArithmeticError;

/// Number of extra fractional digits a quotient carries.
///
/// Quotients are truncated, never rounded: `1000 / 3` is exactly
/// twenty 3s after the decimal point, and whatever remainder is left
/// once the padded dividend is exhausted is discarded.
pub const DIVISION_PRECISION: usize = 20;

impl Decimal {
    /// Divides `self` by `divisor`, truncating after
    /// [`DIVISION_PRECISION`] fractional digits.
    ///
    /// Both digit strings are treated as plain integers; the operands'
    /// exponent difference moves onto the quotient, and the dividend is
    /// padded with enough zeros that the quotient always carries the
    /// full fractional precision.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when `divisor` is
    /// zero.
    pub fn try_div(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let negative = self.negative != divisor.negative;
        let shift = self.exponent - divisor.exponent;
        let pad = DIVISION_PRECISION as i64 + shift.max(0);
        let mut dividend = self.digits.clone();
        dividend.extend(iter::repeat(0).take(pad as usize));
        let quotient = long_divide(&dividend, &divisor.digits);
        Ok(Self::new_normalized(negative, quotient, shift - pad))
    }
}

/// Schoolbook long division over digit strings.
///
/// One dividend digit at a time is drawn into the running remainder;
/// each quotient digit is how many times the divisor subtracts out of
/// it. The remainder is kept free of leading zeros so slice comparison
/// stays an integer comparison.
fn long_divide(dividend: &[u8], divisor: &[u8]) -> DigitBuf {
    let mut quotient = DigitBuf::with_capacity(dividend.len());
    let mut remainder = DigitBuf::new();
    for &next in dividend {
        if !(remainder.is_empty() && next == 0) {
            remainder.push(next);
        }
        let mut count = 0;
        while cmp_digit_slices(&remainder, divisor) != Ordering::Less {
            remainder = sub_digit_slices(&remainder, divisor);
            count += 1;
        }
        quotient.push(count);
    }
    quotient
}

impl Div for Decimal {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`Decimal::try_div`] to handle
    /// the error instead.
    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(&rhs).expect("division by zero")
    }
}

impl Div<&Decimal> for Decimal {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`Decimal::try_div`] to handle
    /// the error instead.
    fn div(self, rhs: &Decimal) -> Self::Output {
        self.try_div(rhs).expect("division by zero")
    }
}

impl Div for &Decimal {
    type Output = Decimal;

    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`Decimal::try_div`] to handle
    /// the error instead.
    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(rhs).expect("division by zero")
    }
}
