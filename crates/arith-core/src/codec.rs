//! Two's-complement codec over arbitrary-precision integers.
//!
//! Every register in the engine is an N-bit two's-complement value stored
//! in a [`BigInt`]. Arithmetic stays confined to N bits via the explicit
//! `(1 << N) - 1` mask; [`decode`] recovers the signed view from the sign
//! bit. Widths are operand-derived and can exceed any machine word, so all
//! primitives here work on `BigInt` rather than fixed-width integers.
//! `BigInt` bitwise operators use two's-complement semantics for negative
//! operands, which is exactly the masking behavior the algorithms rely on.

use num_bigint::BigInt;
use num_traits::{One, Signed};

/// Confines `bits` to `width` bits by masking with `(1 << width) - 1`.
///
/// Applied after every shift, add, and subtract so registers never grow
/// beyond their declared width.
#[must_use]
pub fn mask_to(bits: &BigInt, width: u64) -> BigInt {
    bits & ((BigInt::one() << width) - 1)
}

/// Encodes a signed integer into its `width`-bit two's-complement pattern.
///
/// Non-negative values are masked directly; negative values are mapped to
/// `(1 << width) + value` before masking. Callers must have sized `width`
/// so that `|value| < 2^(width - 1)`; a violation means the bit-width
/// resolver produced a wrong width and is an internal-logic fault, not an
/// input error.
#[must_use]
pub fn encode(value: &BigInt, width: u64) -> BigInt {
    debug_assert!(
        value.bits() < width,
        "operand magnitude does not fit in {width} bits"
    );
    if value.is_negative() {
        mask_to(&((BigInt::one() << width) + value), width)
    } else {
        mask_to(value, width)
    }
}

/// Decodes a `width`-bit pattern into its signed integer value.
///
/// When the sign bit (bit `width - 1`) is set the result is
/// `bits - 2^width`; otherwise `bits` is returned unchanged.
#[must_use]
pub fn decode(bits: &BigInt, width: u64) -> BigInt {
    let sign_bit = (bits >> (width - 1)) & BigInt::one();
    if sign_bit.is_one() {
        bits - (BigInt::one() << width)
    } else {
        bits.clone()
    }
}

/// Renders the `width`-bit pattern of `bits` as a zero-padded binary string
/// of exactly `width` characters.
///
/// Display only; never used for arithmetic.
#[must_use]
pub fn to_binary_string(bits: &BigInt, width: u64) -> String {
    let raw = mask_to(bits, width).to_str_radix(2);
    let pad = usize::try_from(width)
        .ok()
        .and_then(|w| w.checked_sub(raw.len()))
        .unwrap_or(0);
    let mut out = "0".repeat(pad);
    out.push_str(&raw);
    out
}
