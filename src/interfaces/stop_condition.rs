// ============================================================================
// Stop Condition Interface
// Defines the termination predicate consumed by the series engine
// ============================================================================

use std::time::Duration;

/// Termination predicate for the series loop.
///
/// The engine consults the predicate once per iteration, strictly before
/// starting the next term, so a long individual iteration can overshoot a
/// time budget by the duration of that single term. That overshoot is
/// expected; no timeout applies to an in-progress iteration.
pub trait StopCondition {
    /// Whether the engine should compute another term.
    ///
    /// `elapsed` is measured from loop start; `completed_terms` counts terms
    /// already accumulated.
    fn should_continue(&self, elapsed: Duration, completed_terms: u64) -> bool;
}

/// Wall-clock time budget, or "run forever".
///
/// Time is compared at whole-second granularity, matching the reference
/// behavior. The unbounded variant never stops on its own; obtaining operator
/// confirmation before starting such a run is the CLI shell's concern, not
/// the core's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBudget {
    /// Stop once this many whole seconds have elapsed
    Seconds(u64),
    /// Run until externally terminated
    Unbounded,
}

impl StopCondition for TimeBudget {
    fn should_continue(&self, elapsed: Duration, _completed_terms: u64) -> bool {
        match self {
            TimeBudget::Seconds(limit) => elapsed.as_secs() < *limit,
            TimeBudget::Unbounded => true,
        }
    }
}

impl From<Option<u64>> for TimeBudget {
    fn from(seconds: Option<u64>) -> Self {
        match seconds {
            Some(s) => TimeBudget::Seconds(s),
            None => TimeBudget::Unbounded,
        }
    }
}

/// Stop after a fixed number of completed terms.
///
/// Term counts map deterministically to converged digits, which makes this
/// the predicate of choice for tests and for callers that want a guaranteed
/// digit count instead of a wall-clock bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget {
    max_terms: u64,
}

impl IterationBudget {
    /// Create a budget that allows `max_terms` completed terms.
    pub fn new(max_terms: u64) -> Self {
        Self { max_terms }
    }
}

impl StopCondition for IterationBudget {
    fn should_continue(&self, _elapsed: Duration, completed_terms: u64) -> bool {
        completed_terms < self.max_terms
    }
}
