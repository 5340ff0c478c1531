// ============================================================================
// Numeric Module
// Arbitrary-precision arithmetic for the series computation
// ============================================================================
//
// This module provides:
// - BigFloat: binary fixed-point value at a caller-specified bit precision
// - Precision: the precision context threaded through all constructors
// - integer: factorial and power primitives over BigInt
// - NumericError: error types for arithmetic operations
//
// Design principles:
// - No floating-point operations anywhere in the core
// - All fallible arithmetic returns Result (no panics)
// - Precision is an explicit per-value context, never a process-wide global

mod big_float;
mod errors;
pub mod integer;

pub use big_float::{BigFloat, Precision};
pub use errors::{NumericError, NumericResult};
