//! Input cleaning for numeric literals.

use crate::CalcError;

/// Returns true for characters allowed in a numeric literal: digits,
/// the decimal point, signs, and the exponent markers `e`, `E`, `^`.
#[must_use]
pub fn is_numeric_char(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | '+' | '-' | 'e' | 'E' | '^')
}

/// Strips whitespace and validates the character set of a numeric
/// input, returning the cleaned literal.
///
/// The parser in `decimus-core` interprets the literal grammar only;
/// this function enforces the character-class precondition it relies
/// on.
///
/// # Errors
///
/// Returns [`CalcError::InvalidCharacter`] for the first character
/// outside the literal alphabet.
pub fn sanitize(input: &str) -> Result<String, CalcError> {
    let mut cleaned = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_whitespace() {
            continue;
        }
        if !is_numeric_char(c) {
            return Err(CalcError::InvalidCharacter(c));
        }
        cleaned.push(c);
    }
    Ok(cleaned)
}
