// ============================================================================
// Digit String Renderer
// Fixed-length decimal rendering of a big-float value
// ============================================================================

use std::fmt;
use std::fmt::Write as _;

use crate::numeric::BigFloat;

/// An immutable fixed-length decimal rendering: the integer digits, a `.`
/// separator, and exactly the requested count of fractional digits.
///
/// The string is always full length regardless of how far the series
/// converged; `trusted_digits` records how many fractional digits are backed
/// by completed terms. Digits beyond that prefix are present but not
/// guaranteed correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitString {
    text: String,
    trusted_digits: usize,
}

impl DigitString {
    pub(crate) fn new(text: String, trusted_digits: usize) -> Self {
        Self {
            text,
            trusted_digits,
        }
    }

    /// The full rendered string.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Total character length, separator included.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of fractional digits backed by completed series terms.
    pub fn trusted_digits(&self) -> usize {
        self.trusted_digits
    }

    /// The leading slice of the string covering the integer digits, the
    /// separator, and the trusted fractional digits.
    pub fn trusted_prefix(&self) -> &str {
        let frac_start = match self.text.find('.') {
            Some(sep) => sep + 1,
            None => self.text.len(),
        };
        let end = (frac_start + self.trusted_digits).min(self.text.len());
        &self.text[..end]
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render a non-negative value as a fixed-length decimal string.
///
/// Deterministic and pure: the output depends only on the value, the digit
/// count, and the trusted length it is annotated with. The final digit is
/// truncated, not rounded. The backing buffer is allocated once at full
/// capacity.
pub fn render(value: &BigFloat, fractional_digits: usize, trusted_digits: usize) -> DigitString {
    let integer = value.integer_part().to_string();
    let fraction = value.fraction_scaled(fractional_digits);

    let mut text = String::with_capacity(integer.len() + 1 + fractional_digits);
    let _ = write!(
        text,
        "{}.{:0>width$}",
        integer,
        fraction,
        width = fractional_digits
    );

    DigitString::new(text, trusted_digits.min(fractional_digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Precision;
    use num_bigint::BigInt;

    fn value(numerator: u64, denominator: u64) -> BigFloat {
        BigFloat::from_u64(numerator, Precision::for_decimal_digits(30))
            .div_bigint(&BigInt::from(denominator))
            .unwrap()
    }

    #[test]
    fn test_fixed_length_output() {
        let digits = render(&value(22, 7), 10, 5);
        assert_eq!(digits.as_str(), "3.1428571428");
        assert_eq!(digits.len(), 12);
    }

    #[test]
    fn test_fraction_left_padding() {
        // 33/16 = 2.0625: the leading fractional zero must survive
        let digits = render(&value(33, 16), 8, 8);
        assert_eq!(digits.as_str(), "2.06250000");
    }

    #[test]
    fn test_integer_value_renders_zero_fraction() {
        let digits = render(&value(7, 1), 6, 6);
        assert_eq!(digits.as_str(), "7.000000");
    }

    #[test]
    fn test_trusted_prefix_slicing() {
        let digits = render(&value(22, 7), 10, 4);
        assert_eq!(digits.trusted_digits(), 4);
        assert_eq!(digits.trusted_prefix(), "3.1428");
    }

    #[test]
    fn test_trusted_capped_at_rendered_length() {
        let digits = render(&value(22, 7), 6, 100);
        assert_eq!(digits.trusted_digits(), 6);
        assert_eq!(digits.trusted_prefix(), digits.as_str());
    }

    #[test]
    fn test_display_forwards() {
        let digits = render(&value(1, 4), 4, 4);
        assert_eq!(digits.to_string(), "0.2500");
    }
}
