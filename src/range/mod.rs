// ============================================================================
// Range Module
// Arithmetic over closed integer intervals
// ============================================================================
//
// This module provides:
// - Closed-form range sums and triangular numbers (any sign, any order)
// - The inverse triangular solver built on the quadratic formula
// - RangeMapping: validated linear projection between two ranges
// - Clamping and percentage helpers

mod mapping;
mod sum;

pub use mapping::{
    dec_by_percentage, discard_outside, force_in_range, inc_by_percentage, is_around, map_range,
    percent_of, percentage_between, RangeMapping,
};
pub use sum::{inverse_triangular_n, sum_of_squares_one_to_n, sum_one_to_n, sum_range};
