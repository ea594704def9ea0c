// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to also see
// the debug events emitted when inputs are rejected.

use numkit::indexing::min_max;
use numkit::prelude::*;
use numkit::range::map_range;

#[cfg(feature = "logging")]
fn init_logging() {
    if let Err(err) = numkit::utils::init_tracing(tracing::Level::DEBUG) {
        eprintln!("tracing already initialized: {err}");
    }
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn main() -> Result<(), NumericError> {
    init_logging();

    println!("=== numkit Example ===\n");

    // Range sums
    println!("sum of -3..=5         = {}", sum_range(-3, 5));
    println!("sum of 1..=100        = {}", sum_one_to_n(100));
    println!("sum of squares 1..=10 = {}", sum_of_squares_one_to_n(10));

    let n = inverse_triangular_n(5_000.0);
    println!("first N with T(N) >= 5000 is {}", n.ceil());

    // Number theory
    println!("\ngcd(48, 18)          = {}", gcd(48, 18));
    println!("lcm of [4, 6, 10]    = {}", lcm_of_many(&[4, 6, 10])?);
    println!("10!                  = {}", factorial(10)?);
    println!("C(20, 10)            = {}", combinations(20, 10)?);
    println!("fib(50)              = {}", fibonacci(50));

    let primes: Vec<i32> = (1..50).filter(|&n| is_prime(n)).collect();
    println!("primes below 50      = {:?}", primes);

    // Digits
    let digits = spread_digits(-90_210);
    println!("\ndigits of -90210     = {:?}", digits.as_slice());
    println!("reverse of 1200      = {}", reverse_digits(1200));
    println!("digit summary of 987 = {:?}", digits_sum_and_count(987));
    println!("bits of 10           = {:?}", count_binary_bits(10));

    // Cyclic indexing
    let weekdays = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    println!("\n3 days before Mon    = {}", element_at_cyclic_index(&weekdays, -3)?);
    println!("100 days after Mon   = {}", element_at_cyclic_index(&weekdays, 100)?);
    println!("weekday #9 (no wrap) = {:?}", safe_index(&weekdays, 9));

    // Quadratics
    let roots = solve_quadratic(1.0, -3.0, 2.0);
    println!("\nx² - 3x + 2 = 0 -> {:?}", roots);

    // Supplementary helpers
    println!("\n75 on 0..=100 as 0..=255 = {}", map_range(75, 0..=100, 0..=255)?);
    println!("min/max of readings      = {:?}", min_max(&[12, -4, 33, 7])?);

    // Rejected input
    if let Err(err) = gcd_of_many(&[]) {
        println!("\ngcd of nothing: {err}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
