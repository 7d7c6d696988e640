//! Prints the full Booth recoding trace for a small worked example.

use arith_core::multiply;
use num_bigint::BigInt;
use num_traits as _;
use proptest as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

fn main() {
    let multiplicand = BigInt::from(-7);
    let multiplier = BigInt::from(3);

    let result = multiply(&multiplicand, &multiplier);

    println!(
        "{multiplicand} * {multiplier} = {} ({} bits, {} steps)",
        result.product,
        result.bit_width,
        result.steps.len()
    );

    for step in &result.steps {
        let q1_in = step.initial_q1.unwrap_or(0);
        let q1_out = step.after_shift_q1.unwrap_or(0);
        println!(
            "step {:>2}: A={} Q={} Q-1={q1_in} | {:<16} | A'={} | shift -> A={} Q={} Q-1={q1_out}",
            step.index,
            step.initial_a,
            step.initial_q,
            step.operation,
            step.after_op_a,
            step.after_shift_a,
            step.after_shift_q,
        );
    }
}
