//! Fibonacci by fast exponentiation of the 2x2 matrix `|0 1|`, `|1 1|`.
//!
//! Independent of the iterative loop, so it serves as a cross-check. Under
//! `u64` every product and sum wraps, and the result still agrees with the
//! iterative engine modulo 2^64.

use crate::numeric::{FibValue, Multiply, NumericKind};

// [0, 1, 2, 3] = |0 1|
//                |2 3|
type Matrix2x2<N> = [N; 4];

fn dot<N: Multiply>(x0: &N, y0: &N, x1: &N, y1: &N) -> N {
    let mut sum = x0.mul_ref(y0);
    sum.add_assign_ref(&x1.mul_ref(y1));
    sum
}

fn matmul<N: Multiply>(a: &Matrix2x2<N>, b: &Matrix2x2<N>) -> Matrix2x2<N> {
    [
        dot(&a[0], &b[0], &a[1], &b[2]),
        dot(&a[0], &b[1], &a[1], &b[3]),
        dot(&a[2], &b[0], &a[3], &b[2]),
        dot(&a[2], &b[1], &a[3], &b[3]),
    ]
}

fn fast_matexp<N: Multiply>(mut b: Matrix2x2<N>, mut e: u64) -> Matrix2x2<N> {
    let mut acc = [N::one(), N::zero(), N::zero(), N::one()]; // identity matrix

    while e > 0 {
        if e % 2 == 1 {
            acc = matmul(&acc, &b);
        }
        e /= 2;
        if e > 0 {
            b = matmul(&b, &b);
        }
    }
    acc
}

/// F(n) in the representation `N`, in O(log n) matrix products.
pub fn fastfib_with<N: Multiply>(n: u64) -> N {
    // M^n = |F(n-1) F(n)  |
    //       |F(n)   F(n+1)|
    let [_, fib_n, _, _] = fast_matexp([N::zero(), N::one(), N::one(), N::one()], n);
    fib_n
}

/// F(n) in the representation selected by `kind`.
pub fn fastfib(n: u64, kind: NumericKind) -> FibValue {
    match kind.resolve(n) {
        NumericKind::ArbitraryPrecision => FibValue::Arbitrary(fastfib_with(n)),
        _ => FibValue::Fixed(fastfib_with(n)),
    }
}
