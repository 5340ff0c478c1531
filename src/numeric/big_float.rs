// ============================================================================
// Big Float
// Arbitrary-precision binary fixed-point arithmetic over BigInt mantissas
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::numeric::integer;

/// Working precision in bits of significance.
///
/// A `Precision` is fixed before any computation begins and threaded through
/// every `BigFloat` constructor, so distinct precisions can coexist safely
/// within one process (e.g. in tests). Operations on values with different
/// precisions fail with `ScaleMismatch` instead of silently rescaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Precision(u32);

impl Precision {
    /// Precision used by the reference computation (1,000,000 bits).
    pub const REFERENCE: Self = Precision(1_000_000);

    /// Smallest precision worth carrying; below this the integer part of pi
    /// itself is at risk.
    const MIN_BITS: u32 = 32;

    /// Create a precision of at least `MIN_BITS` bits.
    pub fn new(bits: u32) -> Self {
        Precision(bits.max(Self::MIN_BITS))
    }

    /// Precision sufficient to render `digits` correct fractional decimal
    /// digits, with guard bits for accumulated truncation error.
    ///
    /// Each decimal digit needs log2(10) ~= 3.322 bits.
    pub fn for_decimal_digits(digits: usize) -> Self {
        let bits = (digits as u64)
            .saturating_mul(3322)
            .saturating_div(1000)
            .saturating_add(64)
            .min(u32::MAX as u64) as u32;
        Self::new(bits)
    }

    /// The number of bits of significance.
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// Arbitrary-precision fixed-point value: `mantissa / 2^precision`.
///
/// The representation is a signed `BigInt` mantissa scaled by the precision's
/// bit count. Addition and integer multiplication are exact; `mul`, `div` and
/// `sqrt` truncate to the carried precision. All fallible operations return
/// [`NumericResult`]; nothing panics on bad operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigFloat {
    mantissa: BigInt,
    precision: Precision,
}

impl BigFloat {
    /// Zero at the given precision.
    pub fn zero(precision: Precision) -> Self {
        Self {
            mantissa: BigInt::zero(),
            precision,
        }
    }

    /// One at the given precision.
    pub fn one(precision: Precision) -> Self {
        Self::from_u64(1, precision)
    }

    /// Create from an unsigned integer.
    pub fn from_u64(value: u64, precision: Precision) -> Self {
        Self::from_bigint(BigInt::from(value), precision)
    }

    /// Create from an arbitrary-precision integer.
    pub fn from_bigint(value: BigInt, precision: Precision) -> Self {
        Self {
            mantissa: value << (precision.bits() as usize),
            precision,
        }
    }

    /// The precision this value carries.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Check if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Check if the value is negative.
    pub fn is_negative(&self) -> bool {
        self.mantissa.sign() == num_bigint::Sign::Minus
    }

    /// Negate.
    pub fn neg(&self) -> Self {
        Self {
            mantissa: -&self.mantissa,
            precision: self.precision,
        }
    }

    /// Add two values of the same precision.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the operands carry different precisions.
    pub fn add(&self, rhs: &Self) -> NumericResult<Self> {
        self.check_scale(rhs)?;
        Ok(Self {
            mantissa: &self.mantissa + &rhs.mantissa,
            precision: self.precision,
        })
    }

    /// Multiply two values of the same precision, truncating to precision.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the operands carry different precisions.
    pub fn mul(&self, rhs: &Self) -> NumericResult<Self> {
        self.check_scale(rhs)?;
        Ok(Self {
            mantissa: (&self.mantissa * &rhs.mantissa) >> (self.precision.bits() as usize),
            precision: self.precision,
        })
    }

    /// Multiply by an integer. Exact; no rescaling needed.
    pub fn mul_bigint(&self, rhs: &BigInt) -> Self {
        Self {
            mantissa: &self.mantissa * rhs,
            precision: self.precision,
        }
    }

    /// Divide two values of the same precision, truncating to precision.
    ///
    /// # Errors
    /// - `ScaleMismatch` if the operands carry different precisions
    /// - `DivisionByZero` if `rhs` is zero
    pub fn div(&self, rhs: &Self) -> NumericResult<Self> {
        self.check_scale(rhs)?;
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self {
            mantissa: (&self.mantissa << (self.precision.bits() as usize)) / &rhs.mantissa,
            precision: self.precision,
        })
    }

    /// Divide by an integer, truncating to precision.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div_bigint(&self, rhs: &BigInt) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self {
            mantissa: &self.mantissa / rhs,
            precision: self.precision,
        })
    }

    /// Square root, truncating to precision.
    ///
    /// # Errors
    /// Returns `NegativeSquareRoot` for negative values.
    pub fn sqrt(&self) -> NumericResult<Self> {
        if self.is_negative() {
            return Err(NumericError::NegativeSquareRoot);
        }
        // sqrt(m / 2^p) = sqrt(m * 2^p) / 2^p
        let widened = &self.mantissa << (self.precision.bits() as usize);
        Ok(Self {
            mantissa: widened.sqrt(),
            precision: self.precision,
        })
    }

    /// Integer part, truncated toward negative infinity.
    pub fn integer_part(&self) -> BigInt {
        &self.mantissa >> (self.precision.bits() as usize)
    }

    /// Fractional part of a non-negative value, scaled to `digits` decimal
    /// digits and truncated. The result is in `0..10^digits`; the renderer is
    /// responsible for left-padding with zeros.
    pub fn fraction_scaled(&self, digits: usize) -> BigInt {
        let bits = self.precision.bits() as usize;
        let frac = &self.mantissa - (self.integer_part() << bits);
        (frac * integer::pow(10, digits as u64)) >> bits
    }

    fn check_scale(&self, rhs: &Self) -> NumericResult<()> {
        if self.precision != rhs.precision {
            return Err(NumericError::ScaleMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P64: Precision = Precision(64);

    #[test]
    fn test_precision_for_decimal_digits() {
        let p = Precision::for_decimal_digits(1000);
        // 1000 digits need ~3322 bits plus guard bits
        assert!(p.bits() >= 3322);
        assert!(p.bits() < 3500);

        // Tiny requests are clamped to the floor
        assert!(Precision::for_decimal_digits(0).bits() >= 32);
    }

    #[test]
    fn test_from_u64_and_integer_part() {
        let x = BigFloat::from_u64(42, P64);
        assert_eq!(x.integer_part(), BigInt::from(42));
        assert_eq!(x.fraction_scaled(6), BigInt::from(0));
        assert!(!x.is_zero());
        assert!(BigFloat::zero(P64).is_zero());
    }

    #[test]
    fn test_add() {
        let a = BigFloat::from_u64(3, P64);
        let b = BigFloat::from_u64(4, P64);
        assert_eq!(a.add(&b).unwrap().integer_part(), BigInt::from(7));
    }

    #[test]
    fn test_scale_mismatch() {
        let a = BigFloat::from_u64(1, Precision::new(64));
        let b = BigFloat::from_u64(1, Precision::new(128));
        assert_eq!(a.add(&b), Err(NumericError::ScaleMismatch));
        assert_eq!(a.mul(&b), Err(NumericError::ScaleMismatch));
        assert_eq!(a.div(&b), Err(NumericError::ScaleMismatch));
    }

    #[test]
    fn test_mul() {
        // 1.5 * 2.5 = 3.75
        let a = BigFloat::from_u64(3, P64).div_bigint(&BigInt::from(2)).unwrap();
        let b = BigFloat::from_u64(5, P64).div_bigint(&BigInt::from(2)).unwrap();
        let c = a.mul(&b).unwrap();
        assert_eq!(c.integer_part(), BigInt::from(3));
        assert_eq!(c.fraction_scaled(2), BigInt::from(75));
    }

    #[test]
    fn test_mul_bigint() {
        let a = BigFloat::from_u64(7, P64);
        let b = a.mul_bigint(&BigInt::from(6));
        assert_eq!(b.integer_part(), BigInt::from(42));
    }

    #[test]
    fn test_div() {
        let one = BigFloat::one(P64);
        let three = BigFloat::from_u64(3, P64);
        let third = one.div(&three).unwrap();
        assert_eq!(third.integer_part(), BigInt::from(0));
        assert_eq!(third.fraction_scaled(6), BigInt::from(333_333));
    }

    #[test]
    fn test_div_by_zero() {
        let one = BigFloat::one(P64);
        let zero = BigFloat::zero(P64);
        assert_eq!(one.div(&zero), Err(NumericError::DivisionByZero));
        assert_eq!(
            one.div_bigint(&BigInt::from(0)),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_sqrt() {
        let four = BigFloat::from_u64(4, P64);
        assert_eq!(four.sqrt().unwrap().integer_part(), BigInt::from(2));

        let two = BigFloat::from_u64(2, P64);
        let root = two.sqrt().unwrap();
        assert_eq!(root.integer_part(), BigInt::from(1));
        assert_eq!(root.fraction_scaled(6), BigInt::from(414_213));
    }

    #[test]
    fn test_sqrt_negative() {
        let neg = BigFloat::from_u64(2, P64).neg();
        assert_eq!(neg.sqrt(), Err(NumericError::NegativeSquareRoot));
    }

    #[test]
    fn test_neg_roundtrip() {
        let x = BigFloat::from_u64(9, P64);
        assert!(x.neg().is_negative());
        assert_eq!(x.neg().neg(), x);
    }

    #[test]
    fn test_fraction_scaled_leading_zeros() {
        // 33/16 = 2.0625: fraction scaled to 4 digits is 625, the renderer
        // restores the leading zero via padding
        let x = BigFloat::from_u64(33, P64)
            .div_bigint(&BigInt::from(16))
            .unwrap();
        assert_eq!(x.integer_part(), BigInt::from(2));
        assert_eq!(x.fraction_scaled(4), BigInt::from(625));
    }
}
