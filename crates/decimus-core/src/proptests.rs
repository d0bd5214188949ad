//! Property-based tests for decimal arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Decimal, DIVISION_PRECISION};

    // Strategy for arbitrary decimals from raw sign/digits/exponent triples
    fn decimal() -> impl Strategy<Value = Decimal> {
        (
            any::<bool>(),
            prop::collection::vec(0_u8..10, 1..24),
            -12_i64..12,
        )
            .prop_map(|(negative, digits, exponent)| {
                Decimal::from_parts(negative, &digits, exponent)
            })
    }

    fn non_zero_decimal() -> impl Strategy<Value = Decimal> {
        decimal().prop_filter("non-zero", |d| !d.is_zero())
    }

    // Strategy for integer-valued decimals (non-negative exponent)
    fn integer_decimal() -> impl Strategy<Value = Decimal> {
        (any::<bool>(), prop::collection::vec(0_u8..10, 1..16), 0_i64..4)
            .prop_map(|(negative, digits, exponent)| {
                Decimal::from_parts(negative, &digits, exponent)
            })
    }

    fn non_zero_integer_decimal() -> impl Strategy<Value = Decimal> {
        integer_decimal().prop_filter("non-zero", |d| !d.is_zero())
    }

    proptest! {
        // Additive group axioms

        #[test]
        fn add_commutative(a in decimal(), b in decimal()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in decimal(), b in decimal(), c in decimal()) {
            prop_assert_eq!((&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn add_identity(a in decimal()) {
            prop_assert_eq!(&a + &Decimal::zero(), a.clone());
            prop_assert_eq!(&Decimal::zero() + &a, a);
        }

        #[test]
        fn additive_inverse(a in decimal()) {
            prop_assert_eq!(&a - &a, Decimal::zero());
            prop_assert_eq!(&a + &(-a.clone()), Decimal::zero());
        }

        #[test]
        fn subtraction_is_addition_of_negation(a in decimal(), b in decimal()) {
            prop_assert_eq!(&a - &b, &a + &(-b.clone()));
        }

        // Multiplicative axioms

        #[test]
        fn mul_commutative(a in decimal(), b in decimal()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_identity(a in decimal()) {
            prop_assert_eq!(&a * &Decimal::one(), a.clone());
            prop_assert_eq!(&Decimal::one() * &a, a);
        }

        #[test]
        fn mul_zero(a in decimal()) {
            prop_assert_eq!(&a * &Decimal::zero(), Decimal::zero());
        }

        #[test]
        fn mul_distributes_over_add(a in decimal(), b in decimal(), c in decimal()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        // Rendering

        #[test]
        fn parse_round_trips_rendered_values(a in decimal()) {
            let rendered = a.to_string();
            let reparsed: Decimal = rendered.parse().unwrap();
            prop_assert_eq!(reparsed, a);
        }

        // Division (truncated at DIVISION_PRECISION fractional digits)

        #[test]
        fn division_inverts_multiplication_within_precision(
            a in integer_decimal(),
            b in non_zero_integer_decimal()
        ) {
            let quotient = a.try_div(&b).unwrap();
            let error = (&(&quotient * &b) - &a).abs();
            // The truncated quotient is off by less than one unit in
            // its last place, so the product misses a by less than
            // |b| × 10^-DIVISION_PRECISION.
            let bound = b.abs() * Decimal::from_parts(false, &[1], -(DIVISION_PRECISION as i64));
            prop_assert!(error < bound, "error {} exceeded bound {}", error, bound);
        }

        #[test]
        fn quotient_sign_is_xor(a in non_zero_integer_decimal(), b in non_zero_integer_decimal()) {
            let quotient = a.try_div(&b).unwrap();
            if quotient.is_zero() {
                return Ok(());
            }
            prop_assert_eq!(quotient.is_negative(), a.is_negative() != b.is_negative());
        }

        // Square root

        #[test]
        fn sqrt_of_square_is_abs(a in -10_000_i64..10_000) {
            let square = Decimal::from(a * a);
            prop_assert_eq!(square.sqrt().unwrap(), Decimal::from(a).abs());
        }

        #[test]
        fn sqrt_squares_back_within_tolerance(a in 1_i64..1_000_000) {
            let operand = Decimal::from(a);
            let root = operand.sqrt().unwrap();
            let error = (&(&root * &root) - &operand).abs();
            // The root is truncated near its 20th significant digit, so
            // squaring misses the operand by a comparably relative amount.
            let relative: Decimal = "1e-16".parse().unwrap();
            let tolerance = &operand * &relative;
            prop_assert!(error < tolerance, "error {} for sqrt({})", error, a);
        }
    }
}
