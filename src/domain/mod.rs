// ============================================================================
// Domain Module
// Run configuration and computation results
// ============================================================================

mod computation;
mod config;

pub use computation::PiComputation;
pub use config::{ComputeConfig, TermGenerationKind, REFERENCE_FRACTIONAL_DIGITS};
