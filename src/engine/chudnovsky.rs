// ============================================================================
// Chudnovsky Engine
// Time-bounded accumulation of series terms into a pi approximation
// ============================================================================

use num_bigint::BigInt;
use std::sync::Arc;
use std::time::Instant;

use crate::domain::PiComputation;
use crate::engine::{CONSTANT_FACTOR, SQRT_ARGUMENT};
use crate::interfaces::{IterationObserver, StopCondition, TermGeneration};
use crate::numeric::{BigFloat, NumericResult, Precision};

/// The series constant `C = 426880 * sqrt(10005)` at the given precision.
pub fn pi_constant(precision: Precision) -> NumericResult<BigFloat> {
    let root = BigFloat::from_u64(SQRT_ARGUMENT, precision).sqrt()?;
    Ok(root.mul_bigint(&BigInt::from(CONSTANT_FACTOR)))
}

/// Series summation engine with pluggable term generation and stop predicate.
///
/// The engine runs a single synchronous loop: one term per stop-predicate
/// check, each term folded into the accumulator by a single addition. At loop
/// exit the final value is `C / sum`. An engine is one-shot; `run` consumes
/// it along with the term generator's iteration state.
pub struct ChudnovskyEngine {
    /// Working precision shared by every big float in the run
    precision: Precision,

    /// Pluggable term generation strategy
    terms: Box<dyn TermGeneration>,

    /// Observer for per-iteration progress
    observer: Arc<dyn IterationObserver>,
}

impl ChudnovskyEngine {
    /// Create a new engine
    pub fn new(
        precision: Precision,
        terms: Box<dyn TermGeneration>,
        observer: Arc<dyn IterationObserver>,
    ) -> Self {
        Self {
            precision,
            terms,
            observer,
        }
    }

    /// The precision this engine computes at.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Accumulate terms until the stop condition says otherwise, then derive
    /// the pi approximation.
    ///
    /// The predicate is consulted strictly before each iteration, except that
    /// the first term is always computed: this keeps the accumulator nonzero
    /// at loop exit, so the final division cannot hit a zero denominator even
    /// with a zero time budget (which therefore yields the one-term
    /// approximation).
    ///
    /// # Errors
    /// Propagates arithmetic failures from term generation or accumulation;
    /// these indicate programming defects, not recoverable conditions.
    pub fn run(mut self, stop: &dyn StopCondition) -> NumericResult<PiComputation> {
        let started = Instant::now();

        let constant = pi_constant(self.precision)?;
        let mut sum = BigFloat::zero(self.precision);
        let mut completed: u64 = 0;

        while completed == 0 || stop.should_continue(started.elapsed(), completed) {
            let term = self.terms.next_term()?;
            sum = sum.add(&term)?;
            completed += 1;
            self.observer.on_term(completed, started.elapsed());
        }

        let elapsed = started.elapsed();
        self.observer.on_complete(completed, elapsed);

        let pi = constant.div(&sum)?;
        Ok(PiComputation::new(pi, completed, elapsed))
    }
}
