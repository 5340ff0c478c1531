// ============================================================================
// Digits Module
// Rendering the accumulated value and searching the result
// ============================================================================

mod render;
mod search;

pub use render::{render, DigitString};
pub use search::{find_sequence, SearchError, SearchOutcome, SearchScope};
