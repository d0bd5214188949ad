//! # decimus-core
//!
//! Arbitrary precision decimal arithmetic over base-10 digit strings.
//!
//! The central type is [`Decimal`]: a sign, an unscaled digit string, and
//! a power-of-ten exponent. All arithmetic is performed digit-for-digit
//! with explicit carry and borrow propagation — there is no machine
//! big-integer backend, which keeps truncation behavior exact and
//! inspectable.
//!
//! ## Quick start
//!
//! ```
//! use decimus_core::Decimal;
//!
//! let a: Decimal = "123.456".parse().unwrap();
//! let b: Decimal = "789.012".parse().unwrap();
//! assert_eq!((a + b).to_string(), "912.468");
//! ```
//!
//! Division truncates after [`DIVISION_PRECISION`] fractional digits and
//! square root iterates Newton–Raphson until two successive iterates
//! render identically, so every operation is bounded by its input size.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decimal;
pub mod error;
pub mod parse;

mod arith;
mod div;
mod sqrt;

#[cfg(test)]
mod proptests;

pub use decimal::Decimal;
pub use div::DIVISION_PRECISION;
pub use error::{ArithmeticError, ParseError};
pub use parse::parse;
pub use sqrt::SQRT_MAX_ITERATIONS;
