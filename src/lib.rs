// ============================================================================
// Pifind Library
// Time-bounded Chudnovsky pi computation with digit sequence search
// ============================================================================

//! # Pifind
//!
//! Computes decimal digits of pi with the Chudnovsky series under a
//! wall-clock time budget, then searches the rendered digit string for a
//! literal numeric subsequence.
//!
//! ## Features
//!
//! - **Arbitrary-precision arithmetic** over `num-bigint`, with precision an
//!   explicit per-value context instead of a process-wide global
//! - **Pluggable term generation** (from-scratch evaluation, or the
//!   running-multiplier recurrence)
//! - **Pluggable stop conditions** (time budget, unbounded, term count)
//! - **Convergence tracking**: every rendered digit string carries the length
//!   of its trustworthy prefix, derived from completed terms
//!
//! ## Example
//!
//! ```rust
//! use pifind::prelude::*;
//! use std::sync::Arc;
//!
//! // Three terms yield roughly forty trustworthy fractional digits
//! let config = ComputeConfig::for_digits(60);
//! let engine = create_from_config(&config, Arc::new(NoOpObserver)).unwrap();
//! let result = engine.run(&IterationBudget::new(3)).unwrap();
//!
//! let digits = result.digits(60);
//! assert!(digits.as_str().starts_with("3.14159265358979"));
//!
//! // "358979" begins at the ninth fractional digit
//! let outcome = find_sequence(&digits, "358979", SearchScope::Full).unwrap();
//! assert_eq!(outcome, SearchOutcome::Found { decimal_place: 9 });
//! ```

pub mod digits;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::digits::{find_sequence, DigitString, SearchError, SearchOutcome, SearchScope};
    pub use crate::domain::{
        ComputeConfig, PiComputation, TermGenerationKind, REFERENCE_FRACTIONAL_DIGITS,
    };
    pub use crate::engine::{
        create_from_config, ChudnovskyEngine, ChudnovskyEngineBuilder, DirectTerms,
        IncrementalTerms,
    };
    pub use crate::interfaces::{
        IterationBudget, IterationObserver, LoggingObserver, NoOpObserver, StopCondition,
        TimeBudget,
    };
    pub use crate::numeric::{BigFloat, NumericError, NumericResult, Precision};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    fn run_terms(terms: u64, digits: usize) -> PiComputation {
        let config =
            ComputeConfig::for_digits(digits).with_term_generation(TermGenerationKind::Incremental);
        create_from_config(&config, Arc::new(NoOpObserver))
            .unwrap()
            .run(&IterationBudget::new(terms))
            .unwrap()
    }

    #[test]
    fn test_end_to_end_sequence_found() {
        let result = run_terms(3, 60);
        assert!(result.completed_terms() >= 2);

        let digits = result.digits(60);
        let outcome = find_sequence(&digits, "358979", SearchScope::Full).unwrap();
        assert_eq!(outcome, SearchOutcome::Found { decimal_place: 9 });

        let outcome = find_sequence(&digits, "14159", SearchScope::Full).unwrap();
        assert_eq!(outcome, SearchOutcome::Found { decimal_place: 1 });
    }

    #[test]
    fn test_end_to_end_sequence_not_found() {
        let result = run_terms(3, 60);
        // A second separator cannot occur, so this can never match
        let outcome = find_sequence(&result.digits(60), "3.3", SearchScope::Full).unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound);
    }

    #[test]
    fn test_end_to_end_time_budget() {
        // A one-second budget must complete at least a handful of terms on
        // any machine; assert the term count, not just the elapsed time.
        let config = ComputeConfig::for_digits(1000)
            .with_time_budget(TimeBudget::Seconds(1))
            .with_term_generation(TermGenerationKind::Incremental);
        let result = create_from_config(&config, Arc::new(NoOpObserver))
            .unwrap()
            .run(&config.time_budget)
            .unwrap();

        assert!(result.completed_terms() >= 2);
        assert!(result.elapsed().as_secs() <= 60);

        let digits = result.digits(config.fractional_digits);
        assert_eq!(digits.len(), 1002);
        let outcome = find_sequence(&digits, "14159", SearchScope::TrustedOnly).unwrap();
        assert_eq!(outcome, SearchOutcome::Found { decimal_place: 1 });
    }

    #[test]
    fn test_full_pipeline_thousand_digits() {
        // 72 terms converge beyond 1000 fractional digits
        let result = run_terms(72, 1000);
        let digits = result.digits(1000);
        assert_eq!(digits.trusted_digits(), 1000);

        // Feynman point: six nines starting at fractional digit 762
        let outcome = find_sequence(&digits, "999999", SearchScope::TrustedOnly).unwrap();
        assert_eq!(outcome, SearchOutcome::Found { decimal_place: 762 });
    }
}
