//! # Decimus
//!
//! Arbitrary precision decimal arithmetic over base-10 digit strings.
//!
//! Decimus provides exact schoolbook arithmetic on decimal literals of
//! any length:
//!
//! - **Hand-rolled digit arithmetic**: addition, subtraction,
//!   multiplication, fixed-precision division, and Newton–Raphson
//!   square root, all with explicit carry/borrow propagation
//! - **Textual boundary**: parse any `[sign] digits[.digits][e±n]`
//!   literal (caret exponents included), render results back without
//!   scientific notation
//! - **Calculator layer**: sanitized string-in/string-out entry points
//!
//! ## Quick start
//!
//! ```
//! use decimus::prelude::*;
//!
//! let a: Decimal = "1.23e5".parse().unwrap();
//! let b: Decimal = "4.56e4".parse().unwrap();
//! assert_eq!((a + b).to_string(), "168600");
//!
//! assert_eq!(eval::divide("1000", "3").unwrap(), "333.33333333333333333333");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use decimus_calc as calc;
pub use decimus_core as core;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use decimus_calc::{eval, sanitize, CalcError};
    pub use decimus_core::{parse, ArithmeticError, Decimal, ParseError};
}
