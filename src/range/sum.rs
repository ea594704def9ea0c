// ============================================================================
// Range Summation
// Closed-form sums over integer ranges and triangular numbers
// ============================================================================
//
// T(n) = n(n+1)/2 is evaluated in i64, so every i32 range sums without
// overflow: |T(±2^31)| < 2.4e18 < i64::MAX.

use crate::equations::solve_quadratic;
use crate::numeric::{NumericError, NumericResult};

/// Triangular number `n(n+1)/2` in i64.
#[inline]
const fn triangular(n: i64) -> i64 {
    n * (n + 1) / 2
}

/// Sum of every integer between `a` and `b`, inclusive, in either order.
///
/// Works for any sign combination:
/// - both non-negative: `min(a, b) + |T(a) - T(b)|`
/// - both negative: the negated sum of the mirrored positive range
/// - mixed: `T(positive) - T(|negative|)`
///
/// # Example
/// ```
/// use numkit::range::sum_range;
///
/// assert_eq!(sum_range(3, 5), 12);
/// assert_eq!(sum_range(5, 3), 12);
/// assert_eq!(sum_range(-5, 5), 0);
/// ```
pub fn sum_range(a: i32, b: i32) -> i64 {
    let (a, b) = (i64::from(a), i64::from(b));
    match dispatch_by_sign(a, b) {
        Ok(sum) => sum,
        // dispatch_by_sign only calls the helper whose precondition it just checked
        Err(err) => unreachable!("range sum misrouted for {a}..={b}: {err}"),
    }
}

fn dispatch_by_sign(a: i64, b: i64) -> NumericResult<i64> {
    match (a >= 0, b >= 0) {
        (true, true) => sum_non_negative(a, b),
        (false, false) => sum_negative(a, b),
        _ => sum_mixed(a, b),
    }
}

fn sum_non_negative(a: i64, b: i64) -> NumericResult<i64> {
    if a < 0 || b < 0 {
        tracing::debug!(a, b, "non-negative range sum given a negative bound");
        return Err(NumericError::InvalidArgument);
    }
    Ok(a.min(b) + (triangular(a) - triangular(b)).abs())
}

fn sum_negative(a: i64, b: i64) -> NumericResult<i64> {
    if a >= 0 || b >= 0 {
        tracing::debug!(a, b, "negative range sum given a non-negative bound");
        return Err(NumericError::InvalidArgument);
    }
    Ok(-sum_non_negative(-a, -b)?)
}

fn sum_mixed(a: i64, b: i64) -> NumericResult<i64> {
    if (a < 0) == (b < 0) {
        tracing::debug!(a, b, "mixed range sum given bounds of the same sign");
        return Err(NumericError::InvalidArgument);
    }
    let (negative, positive) = if a < 0 { (a, b) } else { (b, a) };
    Ok(triangular(positive) - triangular(-negative))
}

/// Sum `0 + 1 + ... + n`.
///
/// Only meaningful for `n >= 0`. A negative `n` is fed through the same
/// formula unchanged (`sum_one_to_n(-3) == 3`), which is not a range sum.
#[inline]
pub fn sum_one_to_n(n: i32) -> i64 {
    triangular(i64::from(n))
}

/// Sum `1² + 2² + ... + n²` via `n(n+1)(2n+1)/6`.
///
/// Evaluated in i128 and narrowed with wrapping semantics; results past
/// `i64::MAX` (n above roughly 3.8 million) are silently truncated.
pub fn sum_of_squares_one_to_n(n: i32) -> i64 {
    let n = i128::from(n);
    let exact = n * (n + 1) * (2 * n + 1) / 6;
    if exact > i128::from(i64::MAX) || exact < i128::from(i64::MIN) {
        tracing::trace!(%exact, "sum of squares wrapped past i64");
    }
    exact as i64
}

/// Real `N` such that `N(N+1)/2 == sum`.
///
/// This is the positive root of `N² + N − 2·sum = 0`. The result is
/// fractional when `sum` is not a triangular number; rounding is up to the
/// caller. Returns `NaN` for `sum < -1/8`.
///
/// # Example
/// ```
/// use numkit::range::inverse_triangular_n;
///
/// assert_eq!(inverse_triangular_n(55.0), 10.0);
/// assert!(inverse_triangular_n(56.0) > 10.0);
/// ```
pub fn inverse_triangular_n(sum: f64) -> f64 {
    solve_quadratic(1.0, 1.0, -2.0 * sum).first
}
