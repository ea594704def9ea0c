// ============================================================================
// Extremum Scans
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

/// Smallest and largest value, found in a single pass.
///
/// # Errors
/// `EmptyCollection` when `values` is empty.
pub fn min_max(values: &[i32]) -> NumericResult<(i32, i32)> {
    let (&first, rest) = values
        .split_first()
        .ok_or(NumericError::EmptyCollection)?;

    Ok(rest
        .iter()
        .fold((first, first), |(min, max), &value| (min.min(value), max.max(value))))
}

/// Largest value, ignoring the element at `skip`.
///
/// `None` when nothing is left to compare (empty slice, or a single element
/// that is skipped). An out-of-range `skip` ignores nothing.
pub fn max_except_index(values: &[i32], skip: usize) -> Option<i32> {
    values
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != skip)
        .map(|(_, &value)| value)
        .max()
}

/// Smallest value, ignoring the element at `skip`.
pub fn min_except_index(values: &[i32], skip: usize) -> Option<i32> {
    values
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != skip)
        .map(|(_, &value)| value)
        .min()
}
