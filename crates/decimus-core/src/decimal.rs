//! The `Decimal` value type.
//!
//! A `Decimal` is a sign flag, an unscaled digit string, and a
//! power-of-ten exponent. The digit string is the number's base-10
//! magnitude, most significant digit first; the exponent places the
//! decimal point.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_traits::{One, Zero};
use smallvec::{smallvec, SmallVec};

/// Digit storage. Values are `0..=9`, most significant first; numbers
/// up to 24 digits stay inline on the stack.
pub(crate) type DigitBuf = SmallVec<[u8; 24]>;

/// An arbitrary precision decimal number.
///
/// The represented value is `digits × 10^exponent`, negated when the
/// sign flag is set. Zero is canonically non-negative with exponent 0.
///
/// `Decimal` has immutable value semantics: every operation consumes
/// its operands read-only and returns a fresh value, so instances can
/// be shared freely across call sites.
///
/// The stored form is only lightly canonical (see [`Decimal::from_parts`]),
/// so equality, ordering, and hashing are all defined on the represented
/// value rather than the raw fields.
#[derive(Clone)]
pub struct Decimal {
    pub(crate) negative: bool,
    pub(crate) digits: DigitBuf,
    pub(crate) exponent: i64,
}

impl Decimal {
    /// Creates a decimal from an already-validated sign/digits/exponent
    /// triple.
    ///
    /// `digits` holds digit values (`0..=9`), most significant first.
    /// The triple is normalized on construction: leading zeros are
    /// stripped, an all-zero magnitude collapses to the canonical zero,
    /// and while the exponent is negative, trailing zeros are compacted
    /// into it. Trailing zeros at a non-negative exponent are kept, so
    /// two equal values may differ structurally; comparisons account
    /// for this.
    #[must_use]
    pub fn from_parts(negative: bool, digits: &[u8], exponent: i64) -> Self {
        debug_assert!(
            digits.iter().all(|&d| d < 10),
            "digit values must be 0..=9"
        );
        Self::new_normalized(negative, DigitBuf::from_slice(digits), exponent)
    }

    pub(crate) fn new_normalized(negative: bool, digits: DigitBuf, exponent: i64) -> Self {
        let mut value = Self {
            negative,
            digits,
            exponent,
        };
        value.normalize();
        value
    }

    /// Removes redundant zeros and enforces the canonical zero.
    fn normalize(&mut self) {
        let leading = self.digits.iter().take_while(|&&d| d == 0).count();
        if leading > 0 {
            self.digits.drain(..leading);
        }
        if self.digits.is_empty() {
            self.digits.push(0);
            self.exponent = 0;
            self.negative = false;
            return;
        }
        if self.exponent < 0 {
            let trailing = self.digits.iter().rev().take_while(|&&d| d == 0).count();
            let removable = trailing.min(self.exponent.unsigned_abs() as usize);
            if removable > 0 {
                self.digits.truncate(self.digits.len() - removable);
                self.exponent += removable as i64;
            }
        }
    }

    /// Returns the digit values, most significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the power-of-ten exponent applied to the digit string.
    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Returns true if the value is negative (and therefore non-zero).
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        let mut magnitude = self.clone();
        magnitude.negative = false;
        magnitude
    }

    /// Number of digits in front of the decimal point, including the
    /// virtual zeros a positive exponent implies. Negative for values
    /// below 0.1.
    pub(crate) fn integer_len(&self) -> i64 {
        self.digits.len() as i64 + self.exponent
    }

    /// The represented value with every trailing zero folded into the
    /// exponent; unique per value, so it backs [`Hash`].
    pub(crate) fn canonical_parts(&self) -> (bool, &[u8], i64) {
        if self.is_zero() {
            return (false, &self.digits, 0);
        }
        let trailing = self.digits.iter().rev().take_while(|&&d| d == 0).count();
        (
            self.negative,
            &self.digits[..self.digits.len() - trailing],
            self.exponent + trailing as i64,
        )
    }
}

impl Zero for Decimal {
    fn zero() -> Self {
        Self {
            negative: false,
            digits: smallvec![0],
            exponent: 0,
        }
    }

    fn is_zero(&self) -> bool {
        self.digits[0] == 0
    }
}

impl One for Decimal {
    fn one() -> Self {
        Self {
            negative: false,
            digits: smallvec![1],
            exponent: 0,
        }
    }

    fn is_one(&self) -> bool {
        !self.negative && self.exponent == 0 && self.digits.as_slice() == [1]
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (negative, digits, exponent) = self.canonical_parts();
        negative.hash(state);
        digits.hash(state);
        exponent.hash(state);
    }
}

impl fmt::Display for Decimal {
    /// Renders the value as a plain literal: sign, digits, and an
    /// expanded decimal point. Scientific notation is never re-emitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut out = String::with_capacity(self.digits.len() + 2);
        if self.negative {
            out.push('-');
        }
        if self.exponent >= 0 {
            push_digits(&mut out, &self.digits);
            push_zeros(&mut out, self.exponent.unsigned_abs() as usize);
        } else {
            let fraction = self.exponent.unsigned_abs() as usize;
            if fraction >= self.digits.len() {
                out.push_str("0.");
                push_zeros(&mut out, fraction - self.digits.len());
                push_digits(&mut out, &self.digits);
            } else {
                let point = self.digits.len() - fraction;
                push_digits(&mut out, &self.digits[..point]);
                out.push('.');
                push_digits(&mut out, &self.digits[point..]);
            }
        }
        f.write_str(&out)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self)
    }
}

fn push_digits(out: &mut String, digits: &[u8]) {
    for &d in digits {
        out.push(char::from(b'0' + d));
    }
}

fn push_zeros(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push('0');
    }
}

fn digits_of(mut magnitude: u64) -> DigitBuf {
    let mut digits = DigitBuf::new();
    if magnitude == 0 {
        digits.push(0);
    }
    while magnitude > 0 {
        digits.push((magnitude % 10) as u8);
        magnitude /= 10;
    }
    digits.reverse();
    digits
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new_normalized(value < 0, digits_of(value.unsigned_abs()), 0)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::new_normalized(false, digits_of(value), 0)
    }
}
