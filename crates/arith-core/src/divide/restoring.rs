//! Restoring shift-subtract divider.

#![allow(clippy::pedantic, clippy::nursery, unknown_lints)]

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::api::DivisionResult;
use crate::codec::{mask_to, to_binary_string};
use crate::error::EngineError;
use crate::trace::{StepOperation, StepRecord, StepTrace};

use super::{apply_signs, DivisionSetup};

/// Divides two signed integers with the restoring algorithm.
///
/// Each of the N iterations shifts the `(A:Q)` pair left, subtracts the
/// divisor magnitude from `A`, and either keeps the result (quotient bit 1)
/// or restores `A` by adding the divisor back (quotient bit 0). `A` is
/// never negative at an iteration boundary, so no final correction exists
/// and the trace always holds exactly N records.
///
/// # Errors
///
/// Returns [`EngineError::DivisionByZero`] when `divisor` is zero; the
/// check runs before any register mutation, so no partial trace is
/// produced.
pub fn divide_restoring(
    dividend: &BigInt,
    divisor: &BigInt,
) -> Result<DivisionResult, EngineError> {
    if divisor.is_zero() {
        return Err(EngineError::DivisionByZero);
    }

    let setup = DivisionSetup::new(dividend, divisor);
    let n = setup.width;
    let m = setup.divisor_mag;

    let mut a = BigInt::zero();
    let mut q = setup.dividend_mag;
    let mut steps = StepTrace::new();

    for index in 1..=n {
        let initial_a = to_binary_string(&a, setup.a_width);
        let initial_q = to_binary_string(&q, n);

        // Shift (A:Q) left; A absorbs Q's vacated top bit.
        let top = (&q >> (n - 1)) & BigInt::one();
        a = (a << 1u64) | top;
        q = mask_to(&(&q << 1u64), n);

        a -= &m;
        let (operation, bit) = if a.is_negative() {
            a += &m;
            (StepOperation::Restore, 0)
        } else {
            q |= BigInt::one();
            (StepOperation::Subtract, 1)
        };

        let after_a = to_binary_string(&a, setup.a_width);
        steps.push(StepRecord {
            index,
            initial_a,
            initial_q,
            initial_q1: None,
            operation,
            after_op_a: after_a.clone(),
            after_shift_a: after_a,
            after_shift_q: to_binary_string(&q, n),
            after_shift_q1: None,
            new_bit: Some(bit),
        });
    }

    let (quotient, remainder) = apply_signs(dividend, divisor, q, a);
    Ok(DivisionResult {
        quotient,
        remainder,
        bit_width: n,
        steps,
    })
}
