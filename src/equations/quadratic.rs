// ============================================================================
// Quadratic Equations
// Discriminant and real roots of ax² + bx + c = 0
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two roots produced by [`solve_quadratic`].
///
/// `first` is the `+√D` root and `second` the `−√D` root. When the
/// discriminant is negative both are `NaN`; the solver never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadraticRoots {
    /// Root using the `+` branch of the quadratic formula
    pub first: f64,
    /// Root using the `−` branch of the quadratic formula
    pub second: f64,
}

impl QuadraticRoots {
    /// Both roots are finite real numbers.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.first.is_finite() && self.second.is_finite()
    }

    /// Larger of the two roots.
    ///
    /// `f64::max` ignores a lone `NaN`, so this is `NaN` only when both
    /// roots are.
    #[inline]
    pub fn max(&self) -> f64 {
        self.first.max(self.second)
    }

    /// Smaller of the two roots, `NaN` only when both roots are.
    #[inline]
    pub fn min(&self) -> f64 {
        self.first.min(self.second)
    }
}

/// Discriminant `b² − 4ac`.
///
/// - `> 0`: two distinct real roots
/// - `== 0`: one repeated real root
/// - `< 0`: no real roots
#[inline]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solve `ax² + bx + c = 0` with the quadratic formula.
///
/// No validation happens here: a negative discriminant yields `NaN` roots and
/// `a == 0` yields infinities or `NaN`. Callers that care check
/// [`QuadraticRoots::is_real`].
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticRoots {
    let d = discriminant(a, b, c);
    if d < 0.0 {
        tracing::trace!(a, b, c, d, "negative discriminant, roots are NaN");
    }
    let sqrt_d = d.sqrt();
    let denom = 2.0 * a;

    QuadraticRoots {
        first: (-b + sqrt_d) / denom,
        second: (-b - sqrt_d) / denom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminant() {
        assert_eq!(discriminant(1.0, -3.0, 2.0), 1.0);
        assert_eq!(discriminant(1.0, 2.0, 1.0), 0.0);
        assert_eq!(discriminant(1.0, 0.0, 1.0), -4.0);
    }

    #[test]
    fn test_two_distinct_roots() {
        // x² - 3x + 2 = (x - 1)(x - 2)
        let roots = solve_quadratic(1.0, -3.0, 2.0);
        assert_eq!(roots.first, 2.0);
        assert_eq!(roots.second, 1.0);
        assert!(roots.is_real());
        assert_eq!(roots.max(), 2.0);
        assert_eq!(roots.min(), 1.0);
    }

    #[test]
    fn test_repeated_root() {
        let roots = solve_quadratic(1.0, 2.0, 1.0);
        assert_eq!(roots.first, -1.0);
        assert_eq!(roots.second, -1.0);
    }

    #[test]
    fn test_negative_discriminant_is_nan() {
        let roots = solve_quadratic(1.0, 0.0, 1.0);
        assert!(roots.first.is_nan());
        assert!(roots.second.is_nan());
        assert!(!roots.is_real());
        assert!(roots.max().is_nan());
        assert!(roots.min().is_nan());
    }

    #[test]
    fn test_extremes_skip_a_lone_nan() {
        let roots = QuadraticRoots { first: f64::NAN, second: 3.0 };
        assert_eq!(roots.max(), 3.0);
        assert_eq!(roots.min(), 3.0);
        assert!(!roots.is_real());
    }

    #[test]
    fn test_zero_leading_coefficient_is_not_real() {
        let roots = solve_quadratic(0.0, 2.0, 1.0);
        assert!(!roots.is_real());
    }
}
