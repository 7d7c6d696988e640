//! Restoring and non-restoring shift-subtract dividers.
//!
//! Both variants operate on operand magnitudes and reconstruct signs at the
//! end under the truncating-division convention: the quotient sign is the
//! XOR of the operand signs, the remainder sign follows the dividend. The
//! iteration count N is the bit length of the dividend's magnitude; the
//! quotient register `Q` is a genuine N-bit integer register with explicit
//! bit-set operations, never a spliced string.

mod nonrestoring;
mod restoring;

pub use nonrestoring::divide_non_restoring;
pub use restoring::divide_restoring;

use num_bigint::BigInt;
use num_traits::Signed;

use crate::width::magnitude_bit_length;

/// Register widths and magnitudes shared by both division variants.
pub(crate) struct DivisionSetup {
    /// Divisor magnitude `M`.
    pub divisor_mag: BigInt,
    /// Dividend magnitude, the initial content of `Q`.
    pub dividend_mag: BigInt,
    /// Iteration count and `Q` register width.
    pub width: u64,
    /// Display width for the accumulator; one bit wider than the widest
    /// operand so transiently negative accumulators render with a correct
    /// two's-complement sign bit.
    pub a_width: u64,
}

impl DivisionSetup {
    pub(crate) fn new(dividend: &BigInt, divisor: &BigInt) -> Self {
        let width = magnitude_bit_length(dividend);
        let a_width = width.max(magnitude_bit_length(divisor)) + 1;
        Self {
            divisor_mag: divisor.abs(),
            dividend_mag: dividend.abs(),
            width,
            a_width,
        }
    }
}

/// Applies the sign convention to a magnitude quotient and remainder.
pub(crate) fn apply_signs(
    dividend: &BigInt,
    divisor: &BigInt,
    quotient_mag: BigInt,
    remainder_mag: BigInt,
) -> (BigInt, BigInt) {
    let quotient = if dividend.is_negative() != divisor.is_negative() {
        -quotient_mag
    } else {
        quotient_mag
    };
    let remainder = if dividend.is_negative() {
        -remainder_mag
    } else {
        remainder_mag
    };
    (quotient, remainder)
}
