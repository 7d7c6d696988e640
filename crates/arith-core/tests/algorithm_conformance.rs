//! Cross-checked conformance coverage for the three arithmetic engines.
//!
//! Booth products are verified against native big-integer multiplication,
//! and both dividers are verified against the Euclidean identity and
//! against each other, over exhaustive small ranges and random operands.

#![allow(clippy::pedantic, clippy::nursery)]

use arith_core::{divide_non_restoring, divide_restoring, multiply, EngineError};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use proptest::prelude::*;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

#[test]
fn concrete_scenarios_match_the_contract() {
    assert_eq!(
        multiply(&BigInt::from(3), &BigInt::from(-4)).product,
        BigInt::from(-12)
    );
    assert_eq!(
        multiply(&BigInt::from(-7), &BigInt::from(-2)).product,
        BigInt::from(14)
    );

    let restoring = divide_restoring(&BigInt::from(13), &BigInt::from(4)).unwrap();
    assert_eq!(restoring.quotient, BigInt::from(3));
    assert_eq!(restoring.remainder, BigInt::from(1));

    let non_restoring = divide_non_restoring(&BigInt::from(-13), &BigInt::from(4)).unwrap();
    assert_eq!(non_restoring.quotient, BigInt::from(-3));
    assert_eq!(non_restoring.remainder, BigInt::from(-1));

    assert_eq!(
        divide_restoring(&BigInt::from(7), &BigInt::from(0)),
        Err(EngineError::DivisionByZero)
    );
}

#[test]
fn booth_product_matches_native_multiplication_exhaustively() {
    for m in -24_i64..=24 {
        for q in -24_i64..=24 {
            let result = multiply(&BigInt::from(m), &BigInt::from(q));
            assert_eq!(
                result.product,
                BigInt::from(m * q),
                "booth disagreed on {m} * {q}"
            );
            assert_eq!(
                result.steps.len() as u64,
                result.bit_width,
                "step count drifted for {m} * {q}"
            );
        }
    }
}

#[test]
fn both_dividers_satisfy_the_euclidean_identity_exhaustively() {
    for dividend in -30_i64..=30 {
        for divisor in -12_i64..=12 {
            let dividend = BigInt::from(dividend);
            let divisor = BigInt::from(divisor);

            if divisor.is_zero() {
                assert_eq!(
                    divide_restoring(&dividend, &divisor),
                    Err(EngineError::DivisionByZero)
                );
                assert_eq!(
                    divide_non_restoring(&dividend, &divisor),
                    Err(EngineError::DivisionByZero)
                );
                continue;
            }

            let restoring = divide_restoring(&dividend, &divisor).unwrap();
            let non_restoring = divide_non_restoring(&dividend, &divisor).unwrap();

            for result in [&restoring, &non_restoring] {
                assert_eq!(
                    &result.quotient * &divisor + &result.remainder,
                    dividend,
                    "identity failed for {dividend} / {divisor}"
                );
                assert!(
                    result.remainder.is_zero()
                        || result.remainder.is_negative() == dividend.is_negative(),
                    "remainder sign drifted for {dividend} / {divisor}"
                );
                assert!(result.remainder.abs() < divisor.abs());
            }

            assert_eq!(restoring.quotient, non_restoring.quotient);
            assert_eq!(restoring.remainder, non_restoring.remainder);
        }
    }
}

#[test]
fn zero_dividend_divides_cleanly() {
    for divisor in [1_i64, -1, 2, 7, -9, 100] {
        let divisor = BigInt::from(divisor);
        let restoring = divide_restoring(&BigInt::zero(), &divisor).unwrap();
        assert_eq!(restoring.quotient, BigInt::zero());
        assert_eq!(restoring.remainder, BigInt::zero());

        let non_restoring = divide_non_restoring(&BigInt::zero(), &divisor).unwrap();
        assert_eq!(non_restoring.quotient, BigInt::zero());
        assert_eq!(non_restoring.remainder, BigInt::zero());
    }
}

#[test]
fn wide_operands_exercise_multi_word_registers() {
    let m: BigInt = "123456789012345678901234567890".parse().unwrap();
    let q: BigInt = "-98765432109876543210".parse().unwrap();

    let product = multiply(&m, &q);
    assert_eq!(product.product, &m * &q);

    let division = divide_restoring(&m, &q).unwrap();
    assert_eq!(&division.quotient * &q + &division.remainder, m);
}

proptest! {
    #[test]
    fn property_booth_matches_native_product(m in any::<i32>(), q in any::<i32>()) {
        let m = BigInt::from(m);
        let q = BigInt::from(q);
        prop_assert_eq!(multiply(&m, &q).product, &m * &q);
    }

    #[test]
    fn property_division_identity_and_agreement(dividend in any::<i32>(), divisor in any::<i32>()) {
        prop_assume!(divisor != 0);
        let dividend = BigInt::from(dividend);
        let divisor = BigInt::from(divisor);

        let restoring = divide_restoring(&dividend, &divisor).unwrap();
        let non_restoring = divide_non_restoring(&dividend, &divisor).unwrap();

        prop_assert_eq!(&restoring.quotient * &divisor + &restoring.remainder, dividend.clone());
        prop_assert_eq!(&restoring.quotient, &non_restoring.quotient);
        prop_assert_eq!(&restoring.remainder, &non_restoring.remainder);
        prop_assert!(
            restoring.remainder.is_zero()
                || restoring.remainder.is_negative() == dividend.is_negative()
        );
    }

    #[test]
    fn property_divisor_zero_always_rejected(dividend in any::<i64>()) {
        let dividend = BigInt::from(dividend);
        prop_assert_eq!(
            divide_restoring(&dividend, &BigInt::zero()),
            Err(EngineError::DivisionByZero)
        );
        prop_assert_eq!(
            divide_non_restoring(&dividend, &BigInt::zero()),
            Err(EngineError::DivisionByZero)
        );
    }
}
