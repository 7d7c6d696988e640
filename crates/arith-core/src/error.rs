use thiserror::Error;

/// Stable error taxonomy surfaced to callers before any computation runs.
///
/// Both variants are checked up front: a failing invocation produces no
/// partial step records. Encoding overflow is deliberately absent — a value
/// that does not fit its resolved width is an internal-logic fault guarded
/// by debug assertions in the codec, not a caller-visible error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum EngineError {
    /// Divisor was exactly zero; checked once before any iteration runs.
    #[error("division by zero")]
    DivisionByZero,
    /// Caller-supplied text is not a well-formed signed integer.
    #[error("operand `{0}` is not a well-formed integer")]
    InvalidOperand(String),
}
