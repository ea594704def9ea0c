// ============================================================================
// Predicates
// Parity, divisibility and sign checks
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[inline]
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Odd test that also holds for negative `n` (`-3 % 2 == -1`).
#[inline]
pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// `n` is an exact multiple of `divisor`.
///
/// # Errors
/// `DivisionByZero` when `divisor` is `0`.
pub fn is_divisible_by(n: i64, divisor: i64) -> NumericResult<bool> {
    if divisor == 0 {
        tracing::debug!(n, "divisibility check against zero");
        return Err(NumericError::DivisionByZero);
    }
    Ok(n.wrapping_rem(divisor) == 0)
}

#[inline]
pub fn is_power_of_two(n: i64) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// One operand is negative and the other is not (zero counts as positive).
#[inline]
pub fn have_opposite_signs(a: i64, b: i64) -> bool {
    (a ^ b) < 0
}
