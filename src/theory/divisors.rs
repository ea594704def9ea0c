// ============================================================================
// Divisors
// Greatest common divisor and least common multiple
// ============================================================================
//
// Sign convention: Rust's `%` truncates toward zero, so the gcd carries the
// sign of the last non-zero remainder. It is non-negative whenever both
// inputs are, and gcd(a, 0) == a for every a (including negative a).

use crate::numeric::{NumericError, NumericResult};

/// Greatest common divisor by Euclid's algorithm.
///
/// Terminates for every pair of `i32`, including `i32::MIN` paired with `-1`
/// (the remainder is computed with wrapping semantics).
///
/// # Example
/// ```
/// use numkit::theory::gcd;
///
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
pub fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        let remainder = a.wrapping_rem(b);
        a = b;
        b = remainder;
    }
    a
}

/// Least common multiple, `(a·b) / gcd(a, b)`.
///
/// Returns `0` when either operand is `0`. The product wraps silently past
/// `i32`; use [`checked_lcm`] when the caller needs to know.
pub fn lcm(a: i32, b: i32) -> i32 {
    if a == 0 || b == 0 {
        return 0;
    }
    a.wrapping_mul(b).wrapping_div(gcd(a, b))
}

/// [`lcm`] that reports `Overflow` instead of wrapping.
pub fn checked_lcm(a: i32, b: i32) -> NumericResult<i32> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    a.checked_div(gcd(a, b))
        .and_then(|quotient| quotient.checked_mul(b))
        .ok_or(NumericError::Overflow)
}

/// [`gcd`] folded left across `values`.
///
/// # Errors
/// `EmptyInput` when `values` is empty.
pub fn gcd_of_many(values: &[i32]) -> NumericResult<i32> {
    values.iter().copied().reduce(gcd).ok_or_else(|| {
        tracing::debug!("gcd_of_many called with no values");
        NumericError::EmptyInput
    })
}

/// [`lcm`] folded left across `values`.
///
/// # Errors
/// `EmptyInput` when `values` is empty.
pub fn lcm_of_many(values: &[i32]) -> NumericResult<i32> {
    values.iter().copied().reduce(lcm).ok_or_else(|| {
        tracing::debug!("lcm_of_many called with no values");
        NumericError::EmptyInput
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_gcd_sign_follows_last_remainder() {
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(gcd(4, -6), -2);
        assert_eq!(gcd(-5, 0), -5);
    }

    #[test]
    fn test_gcd_terminates_at_extremes() {
        assert_eq!(gcd(i32::MIN, -1), -1);
        assert_eq!(gcd(i32::MIN, i32::MIN), i32::MIN);
        assert_eq!(gcd(i32::MAX, i32::MIN), -1);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(21, 6), 42);
        assert_eq!(lcm(7, 0), 0);
        assert_eq!(lcm(0, 7), 0);
    }

    #[test]
    fn test_checked_lcm() {
        assert_eq!(checked_lcm(4, 6), Ok(12));
        assert_eq!(checked_lcm(0, 6), Ok(0));
        assert_eq!(checked_lcm(65_536, 65_537), Err(NumericError::Overflow));
        // The wrapping variant stays silent on the same input
        assert_eq!(lcm(65_536, 65_537), 65_536_i32.wrapping_mul(65_537));
    }

    #[test]
    fn test_gcd_and_lcm_of_many() {
        assert_eq!(gcd_of_many(&[12, 18, 24]), Ok(6));
        assert_eq!(lcm_of_many(&[2, 3, 4]), Ok(12));
        assert_eq!(gcd_of_many(&[42]), Ok(42));
        assert_eq!(lcm_of_many(&[5, 0, 3]), Ok(0));
    }

    #[test]
    fn test_many_rejects_empty_input() {
        assert_eq!(gcd_of_many(&[]), Err(NumericError::EmptyInput));
        assert_eq!(lcm_of_many(&[]), Err(NumericError::EmptyInput));
    }

    proptest! {
        #[test]
        fn prop_gcd_with_zero_is_identity(a: i32) {
            prop_assert_eq!(gcd(a, 0), a);
        }

        #[test]
        fn prop_lcm_with_zero_is_zero(a: i32) {
            prop_assert_eq!(lcm(a, 0), 0);
        }

        #[test]
        fn prop_gcd_divides_both(a in 1i32..100_000, b in 1i32..100_000) {
            let g = gcd(a, b);
            prop_assert!(g > 0);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }

        #[test]
        fn prop_gcd_times_lcm_is_product(a in 1i32..10_000, b in 1i32..10_000) {
            prop_assert_eq!(i64::from(gcd(a, b)) * i64::from(lcm(a, b)), i64::from(a) * i64::from(b));
        }
    }
}
