// ============================================================================
// Compute Configuration
// Precision, digit count, budget and strategy for one series run
// ============================================================================

use crate::interfaces::TimeBudget;
use crate::numeric::Precision;

/// Fractional digit count rendered by the reference behavior.
pub const REFERENCE_FRACTIONAL_DIGITS: usize = 1000;

/// Selects the term generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermGenerationKind {
    /// Recompute factorials and powers from k on every iteration
    /// (the reference behavior's shape; simple, asymptotically slower)
    Direct,

    /// Carry a running multiplier updated by the exact term-ratio recurrence
    /// (faster; the one piece of iteration-to-iteration state)
    Incremental,
}

/// Configuration for a series run.
///
/// Precision is fixed here, before any computation begins, and never changes
/// mid-run. Validation happens once up front; the engine itself assumes a
/// valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeConfig {
    /// Bits of significance carried by every big float in the run
    pub precision: Precision,

    /// Fixed fractional digit count of the rendered output
    pub fractional_digits: usize,

    /// Stopping policy for the series loop
    pub time_budget: TimeBudget,

    /// Term generation strategy
    pub term_generation: TermGenerationKind,
}

impl ComputeConfig {
    /// Create a configuration with explicit precision and digit count.
    /// The budget defaults to unbounded and term generation to direct.
    pub fn new(precision: Precision, fractional_digits: usize) -> Self {
        Self {
            precision,
            fractional_digits,
            time_budget: TimeBudget::Unbounded,
            term_generation: TermGenerationKind::Direct,
        }
    }

    /// The reference behavior's defaults: 1,000,000 bits of precision and
    /// 1000 rendered fractional digits.
    pub fn reference() -> Self {
        Self::new(Precision::REFERENCE, REFERENCE_FRACTIONAL_DIGITS)
    }

    /// A configuration sized for `digits` rendered fractional digits, with
    /// precision derived from the digit count.
    pub fn for_digits(digits: usize) -> Self {
        Self::new(Precision::for_decimal_digits(digits), digits)
    }

    /// Builder method: set the stopping policy.
    pub fn with_time_budget(mut self, budget: TimeBudget) -> Self {
        self.time_budget = budget;
        self
    }

    /// Builder method: set the term generation strategy.
    pub fn with_term_generation(mut self, kind: TermGenerationKind) -> Self {
        self.term_generation = kind;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fractional_digits == 0 {
            return Err("Fractional digit count must be positive".to_string());
        }

        let required = Precision::for_decimal_digits(self.fractional_digits);
        if self.precision.bits() < required.bits() {
            return Err(format!(
                "Precision of {} bits cannot render {} fractional digits (need at least {} bits)",
                self.precision.bits(),
                self.fractional_digits,
                required.bits()
            ));
        }

        Ok(())
    }
}
