// ============================================================================
// Engine Module
// Contains the Chudnovsky series summation core
// ============================================================================

mod chudnovsky;
mod direct;
mod incremental;

pub mod factory;

pub use chudnovsky::{pi_constant, ChudnovskyEngine};
pub use direct::DirectTerms;
pub use factory::{create_from_config, ChudnovskyEngineBuilder};
pub use incremental::IncrementalTerms;

/// Constant offset of the series' linear numerator factor.
pub(crate) const SERIES_A: u64 = 13_591_409;

/// Per-term increment of the series' linear numerator factor.
pub(crate) const SERIES_B: u64 = 545_140_134;

/// Base of the per-term power in the denominator.
pub(crate) const SERIES_BASE: u64 = 640_320;

/// 640320^3 / 24, the denominator constant of the incremental term-ratio
/// recurrence.
pub(crate) const SERIES_BASE_CUBED_OVER_24: u64 = 10_939_058_860_032_000;

/// Multiplier of the square root in the series constant C.
pub(crate) const CONSTANT_FACTOR: u64 = 426_880;

/// Argument of the square root in the series constant C.
pub(crate) const SQRT_ARGUMENT: u64 = 10_005;
