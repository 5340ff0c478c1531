// ============================================================================
// Sequence Searcher
// First-occurrence substring scan over the rendered digit string
// ============================================================================

use std::fmt;

use super::render::DigitString;

/// Errors surfaced by the searcher before any scan happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchError {
    /// The pattern was empty; an empty pattern matches everywhere, so it is
    /// rejected explicitly rather than reported at offset -1
    EmptyPattern,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyPattern => write!(f, "search pattern must not be empty"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Which slice of the digit string the scan covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// The whole rendered string, converged or not (reference behavior);
    /// matches beyond the trusted prefix may be numerically meaningless
    Full,
    /// Only the trusted prefix, so a match is backed by completed terms
    TrustedOnly,
}

/// Result of a scan: the decimal place of the first match, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// First match found. `decimal_place` is the match's character index
    /// minus one, which equals the 1-based position of its first character
    /// counting from the first fractional digit. A pattern matching the
    /// leading integer digit or straddling the separator gets 0 or -1 by the
    /// same formula; there is no special-casing.
    Found { decimal_place: i64 },
    /// The pattern does not occur in the scanned window
    NotFound,
}

/// Scan the digit string for the first occurrence of a literal pattern.
///
/// The pattern is matched as a contiguous substring; it may contain the
/// separator character. A `TrustedOnly` scope confines both the match start
/// and end to the converged prefix.
///
/// # Errors
/// Returns `EmptyPattern` for an empty pattern.
pub fn find_sequence(
    digits: &DigitString,
    pattern: &str,
    scope: SearchScope,
) -> Result<SearchOutcome, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    let haystack = match scope {
        SearchScope::Full => digits.as_str(),
        SearchScope::TrustedOnly => digits.trusted_prefix(),
    };

    match haystack.find(pattern) {
        Some(index) => Ok(SearchOutcome::Found {
            decimal_place: index as i64 - 1,
        }),
        None => Ok(SearchOutcome::NotFound),
    }
}
