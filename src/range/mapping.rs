// ============================================================================
// Range Mapping
// Projecting, clamping and percentage helpers over integer ranges
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Range Mapping Configuration
// ============================================================================

/// Linear projection of values from a source range onto a target range.
///
/// The target may run backwards (`100..=0`) to invert a scale. The source
/// must be ascending and span more than one value.
///
/// # Example
/// ```
/// use numkit::range::RangeMapping;
///
/// let mapping = RangeMapping::new(1..=100, 200..=300);
/// assert_eq!(mapping.map(1), Ok(200));
/// assert_eq!(mapping.map(100), Ok(300));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangeMapping {
    /// Range the input values are expected to fall in
    pub source: RangeInclusive<i32>,

    /// Range the outputs are projected onto
    pub target: RangeInclusive<i32>,

    /// Clamp out-of-source inputs onto the source bounds instead of rejecting them
    pub clamp_input: bool,
}

impl RangeMapping {
    /// Create a mapping that rejects inputs outside `source`
    pub fn new(source: RangeInclusive<i32>, target: RangeInclusive<i32>) -> Self {
        Self {
            source,
            target,
            clamp_input: false,
        }
    }

    /// Builder method: clamp inputs onto the source range
    pub fn with_clamped_input(mut self, clamp: bool) -> Self {
        self.clamp_input = clamp;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// - `InvalidArgument` if the source range is descending
    /// - `DivisionByZero` if the source range holds a single value
    pub fn validate(&self) -> NumericResult<()> {
        let (start, end) = (*self.source.start(), *self.source.end());
        if start > end {
            tracing::debug!(start, end, "mapping source range is descending");
            return Err(NumericError::InvalidArgument);
        }
        if start == end {
            tracing::debug!(start, "mapping source range holds a single value");
            return Err(NumericError::DivisionByZero);
        }
        Ok(())
    }

    /// Project `value` from the source range onto the target range.
    ///
    /// Integer division truncates toward zero, as in `(v − s0)(t1 − t0)/(s1 − s0) + t0`.
    /// Both factors of the product can reach `2^32 − 1`, so it is formed in
    /// i128. The result always lies between the target bounds.
    ///
    /// # Errors
    /// Any [`validate`](Self::validate) failure, or `InvalidArgument` when
    /// `value` lies outside the source range and clamping is off.
    pub fn map(&self, value: i32) -> NumericResult<i32> {
        self.validate()?;

        let value = if self.source.contains(&value) {
            value
        } else if self.clamp_input {
            force_in_range(value, *self.source.start(), *self.source.end())
        } else {
            tracing::debug!(value, source = ?self.source, "value outside mapping source");
            return Err(NumericError::InvalidArgument);
        };

        let (s0, s1) = (i128::from(*self.source.start()), i128::from(*self.source.end()));
        let (t0, t1) = (i128::from(*self.target.start()), i128::from(*self.target.end()));
        let projected = (i128::from(value) - s0) * (t1 - t0) / (s1 - s0) + t0;

        i32::try_from(projected).map_err(|_| NumericError::Overflow)
    }
}

/// One-shot form of [`RangeMapping::map`].
pub fn map_range(
    value: i32,
    source: RangeInclusive<i32>,
    target: RangeInclusive<i32>,
) -> NumericResult<i32> {
    RangeMapping::new(source, target).map(value)
}

// ============================================================================
// Bounds Helpers
// ============================================================================

/// `value` if it lies in `range`, otherwise `default`.
#[inline]
pub fn discard_outside(value: i32, range: RangeInclusive<i32>, default: i32) -> i32 {
    if range.contains(&value) {
        value
    } else {
        default
    }
}

/// Clamp `value` to `[start, end]`. Works for any partially ordered type,
/// including floats (a `NaN` value is returned unchanged).
#[inline]
pub fn force_in_range<T: PartialOrd>(value: T, start: T, end: T) -> T {
    if value < start {
        start
    } else if value > end {
        end
    } else {
        value
    }
}

/// `value` equals `target` within `± tolerance`.
#[inline]
pub fn is_around(value: i32, target: i32, tolerance: i32) -> bool {
    let (value, target, tolerance) = (i64::from(value), i64::from(target), i64::from(tolerance));
    (target - tolerance..=target + tolerance).contains(&value)
}

// ============================================================================
// Percentages
// ============================================================================

/// Progress of `value` from `first` toward `last`, as a fraction.
///
/// `percentage_between(50, 0, 100) == 0.5`.
///
/// # Errors
/// - `InvalidArgument` if any argument is negative
/// - `DivisionByZero` if `first == last`
pub fn percentage_between(value: i32, first: i32, last: i32) -> NumericResult<f32> {
    if value < 0 || first < 0 || last < 0 {
        tracing::debug!(value, first, last, "percentage_between takes non-negative inputs");
        return Err(NumericError::InvalidArgument);
    }
    let span = (i64::from(first) - i64::from(last)).abs();
    if span == 0 {
        tracing::debug!(first, last, "percentage_between over an empty span");
        return Err(NumericError::DivisionByZero);
    }
    Ok((i64::from(value) - i64::from(first)) as f32 / span as f32)
}

/// `percentage`% of `value`, truncated toward zero.
///
/// # Errors
/// `InvalidArgument` for a negative percentage.
pub fn percent_of(value: i32, percentage: i32) -> NumericResult<i32> {
    if percentage < 0 {
        tracing::debug!(value, percentage, "negative percentage");
        return Err(NumericError::InvalidArgument);
    }
    let share = i64::from(value) * i64::from(percentage) / 100;
    i32::try_from(share).map_err(|_| NumericError::Overflow)
}

/// `value` increased by `percentage`% of itself.
pub fn inc_by_percentage(value: i32, percentage: i32) -> NumericResult<i32> {
    value
        .checked_add(percent_of(value, percentage)?)
        .ok_or(NumericError::Overflow)
}

/// `value` decreased by `percentage`% of itself.
pub fn dec_by_percentage(value: i32, percentage: i32) -> NumericResult<i32> {
    value
        .checked_sub(percent_of(value, percentage)?)
        .ok_or(NumericError::Overflow)
}
