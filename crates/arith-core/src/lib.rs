//! Core arithmetic trace engine.
//!
//! Implements signed-integer multiplication via Booth recoding and
//! signed-integer division via the restoring and non-restoring
//! shift-subtract algorithms, over operand-derived register widths, and
//! records every register transformation as an ordered step trace for
//! presentation layers to render.

/// Two's-complement encode/decode and masking primitives.
pub mod codec;
pub use codec::{decode, encode, mask_to, to_binary_string};

/// Operand-derived register width resolution.
pub mod width;
pub use width::{booth_width, magnitude_bit_length, signed_bit_length};

/// Step trace data model and ordered recorder.
pub mod trace;
pub use trace::{StepOperation, StepRecord, StepTrace};

/// Engine error taxonomy.
pub mod error;
pub use error::EngineError;

/// Operand parsing and host-visible result types.
pub mod api;
pub use api::{parse_operand, DivisionResult, MultiplicationResult};

/// Booth recoding multiplier.
pub mod booth;
pub use booth::multiply;

/// Restoring and non-restoring shift-subtract dividers.
pub mod divide;
pub use divide::{divide_non_restoring, divide_restoring};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
