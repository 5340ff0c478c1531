// ============================================================================
// Direct Term Generation
// Recomputes every factorial and power from k on each iteration
// ============================================================================

use num_bigint::BigInt;
use num_traits::One;

use crate::engine::{SERIES_A, SERIES_B, SERIES_BASE};
use crate::interfaces::TermGeneration;
use crate::numeric::{integer, BigFloat, NumericResult, Precision};

/// Term generation by independent evaluation at each k.
///
/// Every term is rebuilt from scratch: three factorials, a cube, and the
/// `640320^(3k)` power, with no state carried between iterations. This is
/// the simple shape of the reference behavior; [`super::IncrementalTerms`]
/// trades it for asymptotically better throughput.
pub struct DirectTerms {
    k: u64,
    precision: Precision,
}

impl DirectTerms {
    /// Create a generator starting at k = 0.
    pub fn new(precision: Precision) -> Self {
        Self { k: 0, precision }
    }
}

impl TermGeneration for DirectTerms {
    fn next_term(&mut self) -> NumericResult<BigFloat> {
        let k = self.k;

        let a = integer::factorial(6 * k); // (6k)!
        let b = integer::factorial(3 * k); // (3k)!
        let c = integer::factorial(k); // k!
        let d = &c * &c * &c; // (k!)^3

        let e = if k == 0 {
            BigInt::one()
        } else {
            integer::pow(SERIES_BASE, 3 * k) // 640320^(3k)
        };

        // (6k)! / (k!)^3 is exactly divisible: it is (3k)! times the
        // multinomial coefficient (6k; k, k, k, 3k)
        let mut f = &a / &d;
        f *= BigInt::from(SERIES_A) + BigInt::from(SERIES_B) * k;
        if k % 2 == 1 {
            f = -f;
        }

        let g = &b * &e;

        let numerator = BigFloat::from_bigint(f, self.precision);
        let denominator = BigFloat::from_bigint(g, self.precision);
        let term = numerator.div(&denominator)?;

        self.k += 1;
        Ok(term)
    }

    fn terms_generated(&self) -> u64 {
        self.k
    }
}
