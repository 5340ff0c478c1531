// ============================================================================
// Interfaces Module
// Traits at the seams of the series engine
// ============================================================================

mod observer;
mod stop_condition;
mod term_generation;

pub use observer::{IterationObserver, LoggingObserver, NoOpObserver};
pub use stop_condition::{IterationBudget, StopCondition, TimeBudget};
pub use term_generation::TermGeneration;
