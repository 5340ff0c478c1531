// ============================================================================
// Big Integer Helpers
// Factorial and integer power primitives for series term construction
// ============================================================================

use num_bigint::BigInt;
use num_traits::One;

/// Compute `n!` as a big integer. `0! == 1`.
pub fn factorial(n: u64) -> BigInt {
    let mut result = BigInt::one();
    for i in 2..=n {
        result *= i;
    }
    result
}

/// Compute `base^exp` as a big integer by repeated squaring.
///
/// The zero exponent is short-circuited to 1 before any multiplication
/// happens, so degenerate base/exponent combinations never reach the
/// squaring loop.
pub fn pow(base: u64, exp: u64) -> BigInt {
    if exp == 0 {
        return BigInt::one();
    }
    let mut result = BigInt::one();
    let mut square = BigInt::from(base);
    let mut remaining = exp;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= &square;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = &square * &square;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small() {
        assert_eq!(factorial(0), BigInt::from(1));
        assert_eq!(factorial(1), BigInt::from(1));
        assert_eq!(factorial(5), BigInt::from(120));
        assert_eq!(factorial(12), BigInt::from(479_001_600u64));
    }

    #[test]
    fn test_factorial_large() {
        // 30! = 265252859812191058636308480000000
        let expected: BigInt = "265252859812191058636308480000000".parse().unwrap();
        assert_eq!(factorial(30), expected);
    }

    #[test]
    fn test_pow_zero_exponent() {
        assert_eq!(pow(640_320, 0), BigInt::from(1));
        assert_eq!(pow(0, 0), BigInt::from(1));
    }

    #[test]
    fn test_pow_basic() {
        assert_eq!(pow(2, 10), BigInt::from(1024));
        assert_eq!(pow(10, 6), BigInt::from(1_000_000));
        assert_eq!(pow(0, 3), BigInt::from(0));
    }

    #[test]
    fn test_pow_chudnovsky_constant() {
        // 640320^3 = 262537412640768000, and /24 gives the multiplier
        // denominator used by the incremental recurrence
        let cubed = pow(640_320, 3);
        assert_eq!(cubed, BigInt::from(262_537_412_640_768_000u64));
        assert_eq!(&cubed / 24, BigInt::from(10_939_058_860_032_000u64));
    }
}
