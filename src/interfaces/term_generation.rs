// ============================================================================
// Term Generation Interface
// Defines the contract for producing successive Chudnovsky series terms
// ============================================================================

use crate::numeric::{BigFloat, NumericResult};

/// Strategy for generating successive series terms.
///
/// Implementations own the iteration counter k (starts at 0, increments by
/// one per call, never resets) and any state carried between iterations. Each
/// call yields the complete term for the current k:
///
/// ```text
/// (-1)^k * (6k)! / ((3k)! * (k!)^3) * (13591409 + 545140134*k) / 640320^(3k)
/// ```
///
/// so the engine can accumulate terms without knowing how they were built.
pub trait TermGeneration {
    /// Compute the term for the current k and advance to k + 1.
    fn next_term(&mut self) -> NumericResult<BigFloat>;

    /// Number of terms generated so far (equals the current k).
    fn terms_generated(&self) -> u64;
}
