// ============================================================================
// numkit Library
// Stateless integer, digit, cyclic-index and quadratic helpers
// ============================================================================

//! # numkit
//!
//! Small, pure numeric helpers grouped by concern.
//!
//! ## Modules
//!
//! - [`range`]: closed-form range sums, triangular numbers, range mapping
//! - [`theory`]: gcd/lcm, factorial, combinations, primality, Fibonacci
//! - [`digits`]: decimal and binary decomposition, perfect squares
//! - [`indexing`]: cyclic (ring) indexing and bounds-checked lookups
//! - [`equations`]: quadratic discriminant and roots
//! - [`numeric`]: the shared [`NumericError`](numeric::NumericError)
//!
//! Every function is a free function with no shared state, so all of them
//! can be called concurrently without coordination.
//!
//! ## Example
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! assert_eq!(sum_range(-3, 5), 9);
//! assert_eq!(gcd_of_many(&[12, 18, 24]), Ok(6));
//! assert_eq!(cyclic_index(-7, 5), Ok(3));
//!
//! // Which N gives a triangular sum of 5050?
//! assert_eq!(inverse_triangular_n(5050.0), 100.0);
//! ```

pub mod digits;
pub mod equations;
pub mod indexing;
pub mod numeric;
pub mod range;
pub mod theory;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::digits::{
        count_binary_bits, digits_sum_and_count, is_perfect_square, reverse_digits,
        spread_digits, BitCounts, DigitSummary,
    };
    pub use crate::equations::{discriminant, solve_quadratic, QuadraticRoots};
    pub use crate::indexing::{cyclic_index, element_at_cyclic_index, safe_index};
    pub use crate::numeric::{NumericError, NumericResult};
    pub use crate::range::{
        inverse_triangular_n, sum_of_squares_one_to_n, sum_one_to_n, sum_range, RangeMapping,
    };
    pub use crate::theory::{
        combinations, factorial, fibonacci, gcd, gcd_of_many, is_prime, lcm, lcm_of_many,
    };
}
