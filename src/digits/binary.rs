// ============================================================================
// Binary Digits
// Bit counts and integer logarithms
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zero and one bits in the significant binary digits of a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitCounts {
    pub zeros: u32,
    pub ones: u32,
}

/// Count the 0 and 1 bits of `n`, from its lowest bit up to its highest set bit.
///
/// Mirrors shifting `n` right until it reaches zero, so only positive inputs
/// have digits: `0` and every negative number yield `(0, 0)`.
///
/// `count_binary_bits(10)` (`0b1010`) is `(2, 2)`.
pub fn count_binary_bits(n: i64) -> BitCounts {
    if n <= 0 {
        return BitCounts::default();
    }
    let width = i64::BITS - n.leading_zeros();
    let ones = n.count_ones();
    BitCounts {
        zeros: width - ones,
        ones,
    }
}

/// `floor(log_base(x))`, computed exactly on integers.
///
/// # Errors
/// `Domain` if `x <= 0` or `base < 2`.
pub fn log_base(x: i64, base: i64) -> NumericResult<u32> {
    if x <= 0 || base < 2 {
        tracing::debug!(x, base, "logarithm outside its domain");
        return Err(NumericError::Domain);
    }
    Ok(x.ilog(base))
}

/// `floor(log2(x))`.
///
/// # Errors
/// `Domain` if `x <= 0`.
pub fn log2(x: i64) -> NumericResult<u32> {
    log_base(x, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shift_count(mut n: i64) -> BitCounts {
        let mut counts = BitCounts::default();
        while n > 0 {
            if n & 1 == 1 {
                counts.ones += 1;
            } else {
                counts.zeros += 1;
            }
            n >>= 1;
        }
        counts
    }

    #[test]
    fn test_count_binary_bits() {
        assert_eq!(count_binary_bits(1), BitCounts { zeros: 0, ones: 1 });
        assert_eq!(count_binary_bits(10), BitCounts { zeros: 2, ones: 2 });
        assert_eq!(count_binary_bits(255), BitCounts { zeros: 0, ones: 8 });
        assert_eq!(count_binary_bits(256), BitCounts { zeros: 8, ones: 1 });
        assert_eq!(count_binary_bits(i64::MAX), BitCounts { zeros: 0, ones: 63 });
    }

    #[test]
    fn test_count_binary_bits_non_positive_boundary() {
        assert_eq!(count_binary_bits(0), BitCounts::default());
        assert_eq!(count_binary_bits(-5), BitCounts::default());
    }

    #[test]
    fn test_log_base() {
        assert_eq!(log_base(1, 10), Ok(0));
        assert_eq!(log_base(999, 10), Ok(2));
        assert_eq!(log_base(1000, 10), Ok(3));
        assert_eq!(log_base(80, 3), Ok(3));
        assert_eq!(log_base(81, 3), Ok(4));
    }

    #[test]
    fn test_log_base_domain() {
        assert_eq!(log_base(0, 10), Err(NumericError::Domain));
        assert_eq!(log_base(-8, 2), Err(NumericError::Domain));
        assert_eq!(log_base(8, 1), Err(NumericError::Domain));
    }

    #[test]
    fn test_log2() {
        assert_eq!(log2(1), Ok(0));
        assert_eq!(log2(1024), Ok(10));
        assert_eq!(log2(1023), Ok(9));
        assert_eq!(log2(0), Err(NumericError::Domain));
    }

    proptest! {
        #[test]
        fn prop_bit_counts_match_shifting(n: i64) {
            prop_assert_eq!(count_binary_bits(n), shift_count(n));
        }
    }
}
