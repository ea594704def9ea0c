// ============================================================================
// Decimal Digits
// Base-10 decomposition, reversal and perfect squares
// ============================================================================

use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digit count of `|i64::MIN|` (`2^63`), the widest magnitude an `i64` can have.
pub const MAX_DIGITS: usize = 19;

/// Base-10 digits, most significant first, stored inline.
pub type Digits = ArrayVec<u8, MAX_DIGITS>;

/// Sum and count of the decimal digits of a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitSummary {
    /// Sum of the digits
    pub sum: u32,
    /// Number of digits
    pub count: u32,
}

/// Digits of `|n|`, most significant first.
///
/// # Example
/// ```
/// use numkit::digits::spread_digits;
///
/// assert_eq!(spread_digits(123).as_slice(), &[1, 2, 3]);
/// assert_eq!(spread_digits(-40).as_slice(), &[4, 0]);
/// assert_eq!(spread_digits(0).as_slice(), &[0]);
/// ```
pub fn spread_digits(n: i64) -> Digits {
    let mut digits = Digits::new();
    let mut rest = n.unsigned_abs();
    if rest == 0 {
        digits.push(0);
        return digits;
    }

    while rest > 0 {
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits.reverse();
    digits
}

/// Number formed by reading the digits of `n` backwards.
///
/// The sign is kept (`-123` becomes `-321`) because Rust's remainder
/// truncates toward zero. Trailing zeros become leading zeros and vanish,
/// so reversing twice strips them: `1200 -> 21 -> 12`. Values whose reversal
/// exceeds `i64` wrap silently.
pub fn reverse_digits(n: i64) -> i64 {
    let mut rest = n;
    let mut reversed: i64 = 0;
    while rest != 0 {
        reversed = reversed.wrapping_mul(10).wrapping_add(rest % 10);
        rest /= 10;
    }
    reversed
}

/// Sum and count of the digits of `n`.
///
/// Only positive inputs are decomposed: the loop runs while `n > 0`, so `0`
/// and every negative number yield `(0, 0)`. Kept as-is for compatibility
/// with existing callers; use `spread_digits` for a sign-agnostic view.
pub fn digits_sum_and_count(n: i64) -> DigitSummary {
    let mut rest = n;
    let mut summary = DigitSummary::default();
    while rest > 0 {
        summary.sum += (rest % 10) as u32;
        summary.count += 1;
        rest /= 10;
    }
    summary
}

/// `n` is the square of an integer. Negative numbers never are.
#[inline]
pub fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let root = n.isqrt();
    root * root == n
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strip_trailing_zeros(mut n: i64) -> i64 {
        while n != 0 && n % 10 == 0 {
            n /= 10;
        }
        n
    }

    #[test]
    fn test_spread_digits() {
        assert_eq!(spread_digits(123).as_slice(), &[1, 2, 3]);
        assert_eq!(spread_digits(0).as_slice(), &[0]);
        assert_eq!(spread_digits(-907).as_slice(), &[9, 0, 7]);
    }

    #[test]
    fn test_spread_digits_extremes() {
        assert_eq!(spread_digits(i64::MIN).len(), 19);
        assert_eq!(spread_digits(i64::MIN).first(), Some(&9));
        assert_eq!(spread_digits(i64::MIN).last(), Some(&8));
        assert_eq!(spread_digits(i64::MIN).len(), MAX_DIGITS);
        assert_eq!(spread_digits(i64::MAX).len(), MAX_DIGITS);
        assert_eq!(spread_digits(i64::MAX).last(), Some(&7));
    }

    #[test]
    fn test_reverse_digits() {
        assert_eq!(reverse_digits(123), 321);
        assert_eq!(reverse_digits(7), 7);
        assert_eq!(reverse_digits(0), 0);
        assert_eq!(reverse_digits(1200), 21);
    }

    #[test]
    fn test_reverse_digits_keeps_sign() {
        assert_eq!(reverse_digits(-123), -321);
        assert_eq!(reverse_digits(-10), -1);
    }

    #[test]
    fn test_reverse_twice_strips_trailing_zeros() {
        assert_eq!(reverse_digits(reverse_digits(1200)), 12);
        assert_eq!(reverse_digits(reverse_digits(4096)), 4096);
    }

    #[test]
    fn test_digits_sum_and_count() {
        assert_eq!(digits_sum_and_count(123), DigitSummary { sum: 6, count: 3 });
        assert_eq!(digits_sum_and_count(9_999), DigitSummary { sum: 36, count: 4 });
        assert_eq!(digits_sum_and_count(i64::MAX).count, 19);
    }

    #[test]
    fn test_digits_sum_and_count_non_positive_boundary() {
        assert_eq!(digits_sum_and_count(0), DigitSummary::default());
        assert_eq!(digits_sum_and_count(-123), DigitSummary { sum: 0, count: 0 });
    }

    #[test]
    fn test_is_perfect_square() {
        assert!(is_perfect_square(0));
        assert!(is_perfect_square(1));
        assert!(is_perfect_square(16));
        assert!(!is_perfect_square(15));
        assert!(!is_perfect_square(-16));
        assert!(is_perfect_square(3_037_000_499 * 3_037_000_499));
        assert!(!is_perfect_square(i64::MAX));
    }

    proptest! {
        #[test]
        fn prop_reverse_twice_equals_stripped(n in -1_000_000_000_000i64..1_000_000_000_000) {
            prop_assert_eq!(reverse_digits(reverse_digits(n)), strip_trailing_zeros(n));
        }

        #[test]
        fn prop_spread_digits_rebuilds_magnitude(n: i64) {
            let rebuilt = spread_digits(n)
                .iter()
                .fold(0_u64, |acc, &d| acc * 10 + u64::from(d));
            prop_assert_eq!(rebuilt, n.unsigned_abs());
        }

        #[test]
        fn prop_squares_are_perfect(root in 0i64..3_037_000_499) {
            prop_assert!(is_perfect_square(root * root));
            prop_assert!(root == 0 || !is_perfect_square(root * root + 1));
        }
    }
}
