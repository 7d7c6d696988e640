//! Rendering library for the arithmetic trace CLI.

use arith_core as _;
use num_bigint as _;

/// Plain-text rendering of engine results and step tables.
pub mod render;
