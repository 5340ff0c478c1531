// ============================================================================
// Engine Factory
// Creates series engines with proper configuration
// ============================================================================

use std::sync::Arc;

use crate::domain::{ComputeConfig, TermGenerationKind};
use crate::engine::{ChudnovskyEngine, DirectTerms, IncrementalTerms};
use crate::interfaces::{IterationObserver, TermGeneration};
use crate::numeric::Precision;

/// Creates a series engine from configuration
///
/// # Arguments
/// * `config` - Run configuration (precision, digits, budget, strategy)
/// * `observer` - Observer for per-iteration progress
///
/// # Errors
/// Returns the validation message if the configuration is invalid.
///
/// # Example
/// ```
/// use pifind::prelude::*;
/// use std::sync::Arc;
///
/// let config = ComputeConfig::for_digits(100);
/// let engine = create_from_config(&config, Arc::new(NoOpObserver)).unwrap();
/// assert_eq!(engine.precision(), config.precision);
/// ```
pub fn create_from_config(
    config: &ComputeConfig,
    observer: Arc<dyn IterationObserver>,
) -> Result<ChudnovskyEngine, String> {
    config.validate()?;

    let terms = create_term_generation(config.term_generation, config.precision);

    Ok(ChudnovskyEngine::new(config.precision, terms, observer))
}

/// Creates the appropriate term generation strategy from configuration
fn create_term_generation(
    kind: TermGenerationKind,
    precision: Precision,
) -> Box<dyn TermGeneration> {
    match kind {
        TermGenerationKind::Direct => Box::new(DirectTerms::new(precision)),
        TermGenerationKind::Incremental => Box::new(IncrementalTerms::new(precision)),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating series engines with a fluent API
///
/// # Example
/// ```
/// use pifind::prelude::*;
/// use std::sync::Arc;
///
/// let engine = ChudnovskyEngineBuilder::new()
///     .digits(200)
///     .incremental_terms()
///     .build(Arc::new(NoOpObserver))
///     .unwrap();
/// ```
pub struct ChudnovskyEngineBuilder {
    config: ComputeConfig,
}

impl ChudnovskyEngineBuilder {
    /// Create a new builder with the reference defaults.
    pub fn new() -> Self {
        Self {
            config: ComputeConfig::reference(),
        }
    }

    /// Size precision and output for the given fractional digit count.
    pub fn digits(mut self, fractional_digits: usize) -> Self {
        self.config.precision = Precision::for_decimal_digits(fractional_digits);
        self.config.fractional_digits = fractional_digits;
        self
    }

    /// Override the working precision.
    pub fn precision(mut self, precision: Precision) -> Self {
        self.config.precision = precision;
        self
    }

    /// Use from-scratch term evaluation (the reference behavior's shape).
    pub fn direct_terms(mut self) -> Self {
        self.config.term_generation = TermGenerationKind::Direct;
        self
    }

    /// Use the running-multiplier recurrence.
    pub fn incremental_terms(mut self) -> Self {
        self.config.term_generation = TermGenerationKind::Incremental;
        self
    }

    /// The configuration as accumulated so far.
    pub fn config(&self) -> &ComputeConfig {
        &self.config
    }

    /// Validate and build the engine.
    ///
    /// # Errors
    /// Returns the validation message if the configuration is invalid.
    pub fn build(self, observer: Arc<dyn IterationObserver>) -> Result<ChudnovskyEngine, String> {
        create_from_config(&self.config, observer)
    }
}

impl Default for ChudnovskyEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
