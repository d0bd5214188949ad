//! String-level arithmetic entry points.
//!
//! Each function sanitizes its operands, parses them, performs one
//! operation, and renders the result back to a plain literal.

use decimus_core::Decimal;

use crate::sanitize::sanitize;
use crate::CalcError;

fn parse_operand(text: &str) -> Result<Decimal, CalcError> {
    let cleaned = sanitize(text)?;
    Ok(cleaned.parse::<Decimal>()?)
}

/// Adds two numeric strings.
///
/// # Errors
///
/// Fails when either operand does not clean up into a valid literal.
pub fn add(lhs: &str, rhs: &str) -> Result<String, CalcError> {
    Ok((parse_operand(lhs)? + parse_operand(rhs)?).to_string())
}

/// Subtracts the second numeric string from the first.
///
/// # Errors
///
/// Fails when either operand does not clean up into a valid literal.
pub fn subtract(lhs: &str, rhs: &str) -> Result<String, CalcError> {
    Ok((parse_operand(lhs)? - parse_operand(rhs)?).to_string())
}

/// Multiplies two numeric strings.
///
/// # Errors
///
/// Fails when either operand does not clean up into a valid literal.
pub fn multiply(lhs: &str, rhs: &str) -> Result<String, CalcError> {
    Ok((parse_operand(lhs)? * parse_operand(rhs)?).to_string())
}

/// Divides the first numeric string by the second.
///
/// # Errors
///
/// Fails when an operand does not clean up into a valid literal or the
/// divisor is zero.
pub fn divide(lhs: &str, rhs: &str) -> Result<String, CalcError> {
    let quotient = parse_operand(lhs)?.try_div(&parse_operand(rhs)?)?;
    Ok(quotient.to_string())
}

/// Takes the square root of a numeric string.
///
/// # Errors
///
/// Fails when the operand does not clean up into a valid literal or is
/// negative.
pub fn sqrt(operand: &str) -> Result<String, CalcError> {
    Ok(parse_operand(operand)?.sqrt()?.to_string())
}

#[cfg(test)]
mod tests {
    use decimus_core::{ArithmeticError, ParseError};

    use super::*;

    #[test]
    fn whole_pipeline_addition() {
        assert_eq!(add("123.456", "789.012").unwrap(), "912.468");
        assert_eq!(add("1.23e5", "4.56e4").unwrap(), "168600");
        assert_eq!(add("1.23^5", "4.56^4").unwrap(), "168600");
        assert_eq!(add(" 1 000 ", "1"), Ok("1001".to_string()));
    }

    #[test]
    fn remaining_operations() {
        assert_eq!(subtract("987654321", "123456789").unwrap(), "864197532");
        assert_eq!(multiply("12345", "67890").unwrap(), "838102050");
        assert_eq!(divide("1000", "3").unwrap(), "333.33333333333333333333");
        assert_eq!(sqrt("144").unwrap(), "12");
    }

    #[test]
    fn errors_surface_unchanged() {
        assert_eq!(add("12a", "1"), Err(CalcError::InvalidCharacter('a')));
        assert_eq!(
            add("", "1"),
            Err(CalcError::Parse(ParseError::Empty))
        );
        assert_eq!(
            divide("1", "0"),
            Err(CalcError::Arithmetic(ArithmeticError::DivisionByZero))
        );
        assert_eq!(
            sqrt("-100"),
            Err(CalcError::Arithmetic(ArithmeticError::NegativeOperand))
        );
    }
}
