//! Operand-derived register width resolution.
//!
//! The resolved width fixes both the register size and the iteration count
//! of the algorithm that consumes it: Booth runs `N` iterations, the
//! dividers run `N` iterations plus at most one correction step.

use num_bigint::BigInt;
use num_traits::Zero;

/// Number of bits needed to represent `value` in signed two's-complement
/// form: the binary digit count of `|value|` plus one sign bit, minimum 1
/// for zero.
#[must_use]
pub fn signed_bit_length(value: &BigInt) -> u64 {
    if value.is_zero() {
        1
    } else {
        value.bits() + 1
    }
}

/// Number of bits in the magnitude of `value`, minimum 1 for zero.
#[must_use]
pub fn magnitude_bit_length(value: &BigInt) -> u64 {
    if value.is_zero() {
        1
    } else {
        value.bits()
    }
}

/// Register width for a Booth multiplication run: the larger of the two
/// operands' signed bit lengths.
#[must_use]
pub fn booth_width(multiplicand: &BigInt, multiplier: &BigInt) -> u64 {
    signed_bit_length(multiplicand).max(signed_bit_length(multiplier))
}
