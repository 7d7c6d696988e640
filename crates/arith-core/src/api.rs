//! Operand parsing and the host-visible result contract.
//!
//! The engine exposes plain data: a decoded result value plus the ordered
//! step trace. How that data is displayed, themed, or navigated is a
//! front-end concern.

use num_bigint::BigInt;

use crate::error::EngineError;
use crate::trace::StepTrace;

/// Final outcome of one Booth multiplication run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MultiplicationResult {
    /// Signed product decoded from the final 2N-bit `(A:Q)` concatenation.
    pub product: BigInt,
    /// Resolved register width `N`, which equals the iteration count.
    pub bit_width: u64,
    /// One record per iteration, in execution order.
    pub steps: StepTrace,
}

/// Final outcome of one division run, restoring or non-restoring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DivisionResult {
    /// Signed quotient under the truncating-division convention.
    pub quotient: BigInt,
    /// Signed remainder; its sign follows the dividend.
    pub remainder: BigInt,
    /// Resolved register width `N`; the run took `N` iterations plus at
    /// most one correction step.
    pub bit_width: u64,
    /// One record per iteration, plus the correction step when it ran.
    pub steps: StepTrace,
}

/// Parses caller-supplied text into a signed operand.
///
/// Surrounding whitespace is tolerated; anything that is not an optionally
/// signed decimal integer is rejected before any computation.
///
/// # Errors
///
/// Returns [`EngineError::InvalidOperand`] when `text` does not parse as a
/// signed integer.
pub fn parse_operand(text: &str) -> Result<BigInt, EngineError> {
    text.trim()
        .parse::<BigInt>()
        .map_err(|_| EngineError::InvalidOperand(text.to_owned()))
}
