// ============================================================================
// Number Theory Module
// Divisors, factorials, primality, Fibonacci and integer predicates
// ============================================================================
//
// Functions whose results outgrow their return type (lcm, factorial,
// combinations, fibonacci) wrap silently; the limits are exported as
// constants and checked_* variants report Overflow instead.

mod divisors;
mod factorial;
mod predicates;
mod primes;

pub use divisors::{checked_lcm, gcd, gcd_of_many, lcm, lcm_of_many};
pub use factorial::{checked_factorial, combinations, factorial, MAX_EXACT_FACTORIAL};
pub use predicates::{have_opposite_signs, is_divisible_by, is_even, is_odd, is_power_of_two};
pub use primes::{fibonacci, is_prime, MAX_EXACT_FIBONACCI};
