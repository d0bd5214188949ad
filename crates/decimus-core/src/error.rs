//! Error types for parsing and arithmetic.

use thiserror::Error;

/// Errors produced when interpreting a numeric literal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no mantissa to interpret.
    #[error("empty numeric literal")]
    Empty,

    /// A mantissa character outside the literal grammar.
    ///
    /// Full character-class validation is the sanitizer's job; this
    /// variant only guards the digit buffer against non-digit bytes.
    #[error("invalid digit {0:?} in numeric literal")]
    InvalidDigit(char),

    /// The exponent adjustment after `e`, `E`, or `^` was not a valid
    /// integer.
    #[error("invalid exponent in numeric literal")]
    InvalidExponent,
}

/// Errors produced by fallible arithmetic operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative operand.
    #[error("square root of a negative number")]
    NegativeOperand,
}
