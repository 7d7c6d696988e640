//! Booth recoding multiplier.
//!
//! Runs the `(A, Q, Q₋₁)` state machine for exactly N iterations:
//! 1. Record the pre-operation registers.
//! 2. Classify on `(Q₀, Q₋₁)`: `10` subtracts the multiplicand from `A`,
//!    `01` adds it, anything else is a no-op; `A` stays at N-bit width.
//! 3. Record `A` after the operation.
//! 4. Arithmetic-right-shift the `(A:Q:Q₋₁)` concatenation by one bit. The
//!    vacated top bit equals the pre-shift sign of `A`; this is what makes
//!    the shift arithmetic rather than logical. `Q₋₁` takes the bit shifted
//!    out of `Q`'s low end.
//! 5. Re-derive the signed views of `A` and `Q` from their top bits so the
//!    next iteration's comparisons see correctly signed values.
//! 6. Record the post-shift registers.
//!
//! Termination concatenates `A` over `Q` into a 2N-bit pattern and decodes
//! it as the signed product.

#![allow(clippy::pedantic, clippy::nursery, unknown_lints)]

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::api::MultiplicationResult;
use crate::codec::{decode, encode, mask_to, to_binary_string};
use crate::trace::{StepOperation, StepRecord, StepTrace};
use crate::width::booth_width;

/// Multiplies two signed integers with Booth's algorithm, returning the
/// product together with the full step trace.
///
/// The register width N is resolved from the operands, so every invocation
/// runs exactly N iterations and emits exactly N step records. Zero
/// operands still produce a well-formed (possibly single-step) trace.
#[must_use]
pub fn multiply(multiplicand: &BigInt, multiplier: &BigInt) -> MultiplicationResult {
    let width = booth_width(multiplicand, multiplier);

    let m = decode(&encode(multiplicand, width), width);
    let mut q = decode(&encode(multiplier, width), width);
    let mut a = BigInt::zero();
    let mut q1: u8 = 0;

    let mut steps = StepTrace::new();

    for index in 1..=width {
        let q0: u8 = u8::from((&q & BigInt::one()).is_one());
        let initial_q1 = q1;

        let initial_a = to_binary_string(&a, width);
        let initial_q = to_binary_string(&q, width);

        let operation = match (q0, q1) {
            (1, 0) => {
                a -= &m;
                StepOperation::Subtract
            }
            (0, 1) => {
                a += &m;
                StepOperation::Add
            }
            _ => StepOperation::None,
        };

        let after_op_a = to_binary_string(&a, width);

        // Concatenate A:Q:Q-1, shift right once, and re-insert A's
        // pre-shift sign bit at the top.
        let combined = (mask_to(&a, width) << (width + 1)) | (mask_to(&q, width) << 1u64)
            | BigInt::from(q1);
        let sign = &combined >> (2 * width);
        let combined = (&combined >> 1u64) | (sign << (2 * width));

        q1 = q0;
        q = decode(&mask_to(&(&combined >> 1u64), width), width);
        a = decode(&mask_to(&(&combined >> (width + 1)), width), width);

        steps.push(StepRecord {
            index,
            initial_a,
            initial_q,
            initial_q1: Some(initial_q1),
            operation,
            after_op_a,
            after_shift_a: to_binary_string(&a, width),
            after_shift_q: to_binary_string(&q, width),
            after_shift_q1: Some(q1),
            new_bit: None,
        });
    }

    let product_bits = (mask_to(&a, width) << width) | mask_to(&q, width);
    let product = decode(&product_bits, 2 * width);

    MultiplicationResult {
        product,
        bit_width: width,
        steps,
    }
}
