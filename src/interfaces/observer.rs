// ============================================================================
// Iteration Observer Interface
// Defines the contract for observing series progress
// ============================================================================

use std::time::Duration;

/// Observer trait for per-iteration progress
/// Implementations can handle logging, metrics, progress reporting, etc.
pub trait IterationObserver: Send + Sync {
    /// Called after each term has been accumulated
    fn on_term(&self, completed_terms: u64, elapsed: Duration);

    /// Called once when the loop exits
    fn on_complete(&self, completed_terms: u64, elapsed: Duration) {
        let _ = (completed_terms, elapsed);
    }
}

/// No-op observer for benchmarks and tests
pub struct NoOpObserver;

impl IterationObserver for NoOpObserver {
    fn on_term(&self, _completed_terms: u64, _elapsed: Duration) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl IterationObserver for LoggingObserver {
    fn on_term(&self, completed_terms: u64, elapsed: Duration) {
        tracing::debug!(
            terms = completed_terms,
            elapsed_ms = elapsed.as_millis() as u64,
            "term accumulated"
        );
    }

    fn on_complete(&self, completed_terms: u64, elapsed: Duration) {
        tracing::info!(
            terms = completed_terms,
            elapsed_secs = elapsed.as_secs(),
            "series loop finished"
        );
    }
}
