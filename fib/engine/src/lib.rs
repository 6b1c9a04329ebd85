//! Iterative Fibonacci computation over a pluggable numeric representation.
//!
//! ```
//! use fib_engine::{fibonacci, FibValue, NumericKind};
//!
//! assert_eq!(fibonacci(60, NumericKind::FixedWidth64), FibValue::Fixed(1548008755920));
//! assert_eq!(fibonacci(100, NumericKind::ArbitraryPrecision).to_string(), "354224848179261915075");
//! ```

pub mod fastfib;
pub mod numeric;

pub use fastfib::{fastfib, fastfib_with};
pub use num_bigint::BigUint;
pub use numeric::{Accumulator, FibValue, Multiply, NumericKind, MAX_EXACT_FIXED_WIDTH_INDEX};

/// Computes F(n) in the representation `N` with a single bounded loop.
///
/// `n == 1` and `n == 2` return 1 without entering the loop, and
/// `n == 0` returns 0. Overflow follows `N`.
pub fn fibonacci_with<N: Accumulator>(n: u64) -> N {
    match n {
        0 => return N::zero(),
        1 | 2 => return N::one(),
        _ => {}
    }

    let mut a = N::one();
    let mut b = N::one();
    for _ in 3..=n {
        let mut next = a;
        next.add_assign_ref(&b);
        a = b;
        b = next;
    }

    b
}

/// Computes F(n) in the representation selected by `kind`.
pub fn fibonacci(n: u64, kind: NumericKind) -> FibValue {
    match kind.resolve(n) {
        NumericKind::ArbitraryPrecision => FibValue::Arbitrary(fibonacci_with(n)),
        _ => FibValue::Fixed(fibonacci_with(n)),
    }
}
