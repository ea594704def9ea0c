// ============================================================================
// Digits Module
// Decimal and binary decomposition of integers
// ============================================================================
//
// Note: digits_sum_and_count and count_binary_bits only decompose positive
// inputs; zero and negatives come back as (0, 0).

mod binary;
mod decimal;

pub use binary::{count_binary_bits, log2, log_base, BitCounts};
pub use decimal::{
    digits_sum_and_count, is_perfect_square, reverse_digits, spread_digits, DigitSummary, Digits,
    MAX_DIGITS,
};
