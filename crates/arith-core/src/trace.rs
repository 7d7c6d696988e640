//! Step trace data model and ordered recorder.
//!
//! Each algorithm iteration appends exactly one immutable [`StepRecord`] to
//! a [`StepTrace`]. The recorder imposes no behavior beyond ordered
//! accumulation: records are emitted in the exact iteration order performed
//! and are never reordered or interleaved. Register values are carried as
//! fixed-width binary strings produced by the codec, ready for a renderer.

use std::fmt;

/// Classification of the arithmetic performed in one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum StepOperation {
    /// The divisor or multiplicand was subtracted from the accumulator.
    Subtract,
    /// The divisor or multiplicand was added to the accumulator.
    Add,
    /// No arithmetic was performed before the shift.
    None,
    /// A negative subtraction result was undone by adding the divisor back.
    Restore,
    /// The post-loop correction of a negative non-restoring remainder.
    FinalCorrection,
}

impl StepOperation {
    /// Stable lowercase label consumed by renderers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subtract => "subtract",
            Self::Add => "add",
            Self::None => "none",
            Self::Restore => "restore",
            Self::FinalCorrection => "final-correction",
        }
    }
}

impl fmt::Display for StepOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Immutable snapshot of one algorithm iteration.
///
/// Booth records carry the extra `Q₋₁` bit in `initial_q1` /
/// `after_shift_q1` and leave `new_bit` empty; division records do the
/// opposite, reporting the newly determined quotient bit. Division shifts
/// happen at the start of an iteration, so `after_op_a` and
/// `after_shift_a` coincide there.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct StepRecord {
    /// 1-based step index in iteration order.
    pub index: u64,
    /// Accumulator `A` before this iteration's operation.
    pub initial_a: String,
    /// Operand/quotient register `Q` before this iteration's operation.
    pub initial_q: String,
    /// Booth `Q₋₁` bit before this iteration, when the algorithm has one.
    pub initial_q1: Option<u8>,
    /// Classification of the arithmetic performed.
    pub operation: StepOperation,
    /// Accumulator `A` immediately after the operation.
    pub after_op_a: String,
    /// Accumulator `A` at the end of the iteration.
    pub after_shift_a: String,
    /// Register `Q` at the end of the iteration.
    pub after_shift_q: String,
    /// Booth `Q₋₁` bit at the end of the iteration, when present.
    pub after_shift_q1: Option<u8>,
    /// Quotient bit determined by this iteration, when the algorithm
    /// produces one.
    pub new_bit: Option<u8>,
}

/// Ordered, append-only accumulation of [`StepRecord`]s for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct StepTrace {
    records: Vec<StepRecord>,
}

impl StepTrace {
    /// Creates an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record in iteration order.
    pub fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    /// Records in the exact order they were appended.
    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when no steps have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in iteration order.
    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{StepOperation, StepRecord, StepTrace};

    fn record(index: u64, operation: StepOperation) -> StepRecord {
        StepRecord {
            index,
            initial_a: "0000".to_owned(),
            initial_q: "0000".to_owned(),
            initial_q1: None,
            operation,
            after_op_a: "0000".to_owned(),
            after_shift_a: "0000".to_owned(),
            after_shift_q: "0000".to_owned(),
            after_shift_q1: None,
            new_bit: None,
        }
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(StepOperation::Subtract.as_str(), "subtract");
        assert_eq!(StepOperation::Add.as_str(), "add");
        assert_eq!(StepOperation::None.as_str(), "none");
        assert_eq!(StepOperation::Restore.as_str(), "restore");
        assert_eq!(StepOperation::FinalCorrection.as_str(), "final-correction");
        assert_eq!(StepOperation::Restore.to_string(), "restore");
    }

    #[test]
    fn trace_preserves_append_order() {
        let mut trace = StepTrace::new();
        assert!(trace.is_empty());

        trace.push(record(1, StepOperation::Subtract));
        trace.push(record(2, StepOperation::Restore));
        trace.push(record(3, StepOperation::None));

        assert_eq!(trace.len(), 3);
        let indices: Vec<u64> = trace.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(trace.records()[1].operation, StepOperation::Restore);
    }
}
