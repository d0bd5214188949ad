//! # decimus-calc
//!
//! String-in, string-out calculator layer over `decimus-core`.
//!
//! This crate is the input boundary the arithmetic core assumes: it
//! strips whitespace, rejects characters outside the numeric literal
//! alphabet, and only then hands the cleaned text to the parser. The
//! [`eval`] functions bundle that pipeline with one arithmetic
//! operation each and render the result back to a literal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod eval;
pub mod sanitize;

use decimus_core::{ArithmeticError, ParseError};
use thiserror::Error;

pub use sanitize::sanitize;

/// Errors surfaced by the calculator layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A character outside the numeric literal alphabet.
    #[error("invalid character {0:?} in input")]
    InvalidCharacter(char),

    /// The cleaned input was not a valid literal.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The operation itself failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
