// ============================================================================
// Incremental Term Generation
// Carries a running multiplier updated by the exact term-ratio recurrence
// ============================================================================

use num_bigint::BigInt;

use crate::engine::{SERIES_A, SERIES_B, SERIES_BASE_CUBED_OVER_24};
use crate::interfaces::TermGeneration;
use crate::numeric::{BigFloat, NumericResult, Precision};

/// Term generation via the running multiplier recurrence.
///
/// The multiplier is the one piece of iteration-to-iteration state. Seeded to
/// 1, it always equals `(-1)^k * (6k)! / ((3k)! * (k!)^3 * 640320^(3k))`, so
/// the term for k is just `multiplier * (13591409 + 545140134*k)`. Advancing
/// from k to k + 1 multiplies by the exact ratio
///
/// ```text
/// -(6k+1)(2k+1)(6k+5) / ((k+1)^3 * (640320^3 / 24))
/// ```
///
/// which replaces the per-iteration factorial recomputation of
/// [`super::DirectTerms`] with three small multiplications and one division.
pub struct IncrementalTerms {
    k: u64,
    multiplier: BigFloat,
}

impl IncrementalTerms {
    /// Create a generator starting at k = 0 with the multiplier seeded to 1.
    pub fn new(precision: Precision) -> Self {
        Self {
            k: 0,
            multiplier: BigFloat::one(precision),
        }
    }
}

impl TermGeneration for IncrementalTerms {
    fn next_term(&mut self) -> NumericResult<BigFloat> {
        let k = self.k;

        let linear = BigInt::from(SERIES_A) + BigInt::from(SERIES_B) * k;
        let term = self.multiplier.mul_bigint(&linear);

        // Advance the multiplier to k + 1
        let numerator = BigInt::from(6 * k + 1) * (2 * k + 1) * (6 * k + 5);
        let next = BigInt::from(k + 1);
        let denominator = &next * &next * &next * BigInt::from(SERIES_BASE_CUBED_OVER_24);
        self.multiplier = self
            .multiplier
            .mul_bigint(&-numerator)
            .div_bigint(&denominator)?;

        self.k += 1;
        Ok(term)
    }

    fn terms_generated(&self) -> u64 {
        self.k
    }
}
