//! Conversion of numeric literals into [`Decimal`] values.

use std::str::FromStr;

use crate::decimal::{Decimal, DigitBuf};
use crate::error::ParseError;

/// Parses a numeric literal into a [`Decimal`].
///
/// Grammar: `[sign] digits [ '.' digits ] [ ('e'|'E'|'^') [sign] digits ]`.
/// The mantissa's fractional digits lower the exponent; the optional
/// adjustment after the exponent marker is added to it.
///
/// The input is expected to be pre-sanitized (whitespace stripped,
/// character set checked); the parser interprets the grammar only. A
/// bare `.` mantissa canonicalizes to zero.
///
/// # Errors
///
/// [`ParseError::Empty`] when there is no mantissa,
/// [`ParseError::InvalidExponent`] when the adjustment is not a valid
/// integer, and [`ParseError::InvalidDigit`] when a mantissa character
/// is not a digit or a single decimal point.
pub fn parse(input: &str) -> Result<Decimal, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let (negative, rest) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    let (mantissa, adjustment) = match rest.find(|c| matches!(c, 'e' | 'E' | '^')) {
        Some(marker) => {
            let adjustment: i64 = rest[marker + 1..]
                .parse()
                .map_err(|_| ParseError::InvalidExponent)?;
            (&rest[..marker], adjustment)
        }
        None => (rest, 0),
    };
    if mantissa.is_empty() {
        return Err(ParseError::Empty);
    }

    let (integer, fraction) = match mantissa.find('.') {
        Some(point) => (&mantissa[..point], &mantissa[point + 1..]),
        None => (mantissa, ""),
    };
    let mut digits = DigitBuf::with_capacity(integer.len() + fraction.len());
    for ch in integer.chars().chain(fraction.chars()) {
        match ch.to_digit(10) {
            Some(d) => digits.push(d as u8),
            None => return Err(ParseError::InvalidDigit(ch)),
        }
    }

    let exponent = (-(fraction.len() as i64))
        .checked_add(adjustment)
        .ok_or(ParseError::InvalidExponent)?;
    Ok(Decimal::new_normalized(negative, digits, exponent))
}

impl FromStr for Decimal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
