// ============================================================================
// Primality & Fibonacci
// ============================================================================

/// Trial-division primality test.
///
/// `false` for `n <= 1`. Evens other than `2` are rejected up front, then
/// odd divisors are tried up to `floor(sqrt(n))`.
///
/// # Example
/// ```
/// use numkit::theory::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(100));
/// ```
pub fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    // `divisor <= n / divisor` is `divisor² <= n` without the i32 overflow
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_EXACT_FIBONACCI: u32 = 93;

/// `n`-th Fibonacci number, 0-indexed: `fib(0) = 0`, `fib(1) = 1`.
///
/// O(n) time, O(1) space. Wraps silently past [`MAX_EXACT_FIBONACCI`].
pub fn fibonacci(n: u32) -> u64 {
    if n < 2 {
        return u64::from(n);
    }
    if n > MAX_EXACT_FIBONACCI {
        tracing::trace!(n, "fibonacci wraps past u64");
    }

    let (mut previous, mut current) = (0_u64, 1_u64);
    for _ in 2..=n {
        let next = previous.wrapping_add(current);
        previous = current;
        current = next;
    }
    current
}
