//! Newton–Raphson square root.

use num_traits::{One, Zero};

use crate::decimal::{Decimal, DigitBuf};
use crate::div::DIVISION_PRECISION;
use crate::error::ArithmeticError;

/// Iteration cap for the Newton–Raphson loop.
pub const SQRT_MAX_ITERATIONS: usize = 20;

impl Decimal {
    /// Computes the square root via Newton–Raphson iteration
    /// `x' = (x + self / x) / 2`.
    ///
    /// The operand is first rescaled by an even power of ten into
    /// `[0.1, 10)` — the initial guess is therefore `10^(m/2)` for a
    /// value of magnitude `10^m`. Iterates are truncated to
    /// [`DIVISION_PRECISION`] fractional digits and the loop stops as
    /// soon as two successive iterates render identically, or after
    /// [`SQRT_MAX_ITERATIONS`] rounds.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NegativeOperand`] when `self` is
    /// negative.
    pub fn sqrt(&self) -> Result<Self, ArithmeticError> {
        if self.is_negative() {
            return Err(ArithmeticError::NegativeOperand);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let magnitude = self.digits.len() as i64 + self.exponent;
        let half = magnitude.div_euclid(2);
        let reduced = Self::new_normalized(false, self.digits.clone(), self.exponent - 2 * half);

        let two = Self::from(2_i64);
        let mut guess = Self::one();
        let mut rendered = guess.to_string();
        for _ in 0..SQRT_MAX_ITERATIONS {
            let quotient = reduced.try_div(&guess)?;
            let next = (&guess + &quotient)
                .try_div(&two)?
                .truncate_fraction(DIVISION_PRECISION);
            let next_rendered = next.to_string();
            let converged = next_rendered == rendered;
            guess = next;
            rendered = next_rendered;
            if converged {
                break;
            }
        }
        Ok(Self::new_normalized(false, guess.digits, guess.exponent + half))
    }

    /// Drops digits below `10^-scale`, truncating toward zero.
    fn truncate_fraction(&self, scale: usize) -> Self {
        let limit = -(scale as i64);
        if self.exponent >= limit {
            return self.clone();
        }
        let drop = (limit - self.exponent) as usize;
        if drop >= self.digits.len() {
            return Self::zero();
        }
        let kept = DigitBuf::from_slice(&self.digits[..self.digits.len() - drop]);
        Self::new_normalized(self.negative, kept, limit)
    }
}
