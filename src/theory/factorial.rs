// ============================================================================
// Factorials & Combinations
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

/// Largest `n` whose factorial fits in an `i64`.
pub const MAX_EXACT_FACTORIAL: i32 = 20;

/// `n! = n · (n−1) · ... · 1`, with `0! = 1! = 1`.
///
/// Computed iteratively. Past [`MAX_EXACT_FACTORIAL`] the product wraps
/// silently (no big-integer support); from `66!` on the wrapped value is `0`.
/// Use [`checked_factorial`] to get `Overflow` instead.
///
/// # Errors
/// `Domain` for negative `n`.
///
/// # Example
/// ```
/// use numkit::theory::factorial;
///
/// assert_eq!(factorial(5), Ok(120));
/// ```
pub fn factorial(n: i32) -> NumericResult<i64> {
    if n < 0 {
        tracing::debug!(n, "factorial of a negative number");
        return Err(NumericError::Domain);
    }
    if n > MAX_EXACT_FACTORIAL {
        tracing::trace!(n, "factorial wraps past i64");
    }
    Ok((2..=i64::from(n)).fold(1_i64, |acc, k| acc.wrapping_mul(k)))
}

/// [`factorial`] that reports `Overflow` instead of wrapping.
pub fn checked_factorial(n: i32) -> NumericResult<i64> {
    if n < 0 {
        tracing::debug!(n, "checked_factorial of a negative number");
        return Err(NumericError::Domain);
    }
    (2..=i64::from(n)).try_fold(1_i64, |acc, k| acc.checked_mul(k).ok_or(NumericError::Overflow))
}

/// Number of ways to choose `r` items out of `n`: `n! / (r! · (n−r)!)`.
///
/// Inherits [`factorial`]'s ceiling: exact only while `n <= 20`. No bounds
/// checking of its own, so inputs outside `0 <= r <= n` surface the
/// factorial's `Domain` error.
///
/// # Errors
/// - `Domain` if `n`, `r` or `n − r` is negative
/// - `DivisionByZero` if the wrapped denominator collapses to `0`
pub fn combinations(n: i32, r: i32) -> NumericResult<i64> {
    let numerator = factorial(n)?;
    let r_fact = factorial(r)?;
    let rest_fact = factorial(n - r)?;

    numerator
        .checked_div(r_fact.wrapping_mul(rest_fact))
        .ok_or_else(|| {
            tracing::debug!(n, r, "combinations denominator wrapped to zero");
            NumericError::DivisionByZero
        })
}
