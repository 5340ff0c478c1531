// ============================================================================
// Pi Computation Result
// The accumulated value plus the run metadata needed to interpret it
// ============================================================================

use std::time::Duration;

use crate::digits::{render, DigitString};
use crate::numeric::BigFloat;

/// Hundredths of decimal digits converged per completed series term.
///
/// Each Chudnovsky term contributes about 14.18 further correct fractional
/// digits. The derived count is an estimate that runs up to one digit hot for
/// the first few terms; callers comparing against the true expansion should
/// leave that margin.
pub(crate) const DIGITS_PER_TERM_X100: u64 = 1418;

/// The outcome of one series run: the final value together with how it was
/// reached.
///
/// The completed term count is what makes the rendered digits interpretable:
/// a time-bounded run guarantees nothing about precision by itself, so the
/// trustworthy digit count is derived from terms, not from the configured
/// precision.
pub struct PiComputation {
    value: BigFloat,
    completed_terms: u64,
    elapsed: Duration,
}

impl PiComputation {
    pub(crate) fn new(value: BigFloat, completed_terms: u64, elapsed: Duration) -> Self {
        Self {
            value,
            completed_terms,
            elapsed,
        }
    }

    /// The accumulated pi approximation.
    pub fn value(&self) -> &BigFloat {
        &self.value
    }

    /// Number of series terms folded into the accumulator.
    pub fn completed_terms(&self) -> u64 {
        self.completed_terms
    }

    /// Wall-clock time the series loop ran for.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Estimated converged fractional digit count: `floor(14.18 * terms)`.
    pub fn trusted_decimal_digits(&self) -> usize {
        (self
            .completed_terms
            .saturating_mul(DIGITS_PER_TERM_X100)
            / 100) as usize
    }

    /// Render the fixed-length digit string for this run.
    ///
    /// The output always carries exactly `fractional_digits` digits after the
    /// separator regardless of convergence; the trusted prefix length travels
    /// with the string so consumers can restrict themselves to it.
    pub fn digits(&self, fractional_digits: usize) -> DigitString {
        render(
            &self.value,
            fractional_digits,
            self.trusted_decimal_digits(),
        )
    }
}
