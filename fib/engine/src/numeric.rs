use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Serialize, Serializer};

/// The largest index whose Fibonacci number fits in a `u64`.
pub const MAX_EXACT_FIXED_WIDTH_INDEX: u64 = 93;

/// A numeric representation the engine can accumulate Fibonacci terms in.
///
/// Overflow behaviour belongs to the implementor: `u64` wraps modulo 2^64,
/// `BigUint` grows without bound.
pub trait Accumulator: Clone {
    fn zero() -> Self;

    fn one() -> Self;

    /// `self += other` under the representation's overflow semantics.
    fn add_assign_ref(&mut self, other: &Self);
}

/// Multiplication, needed only by the matrix-exponentiation oracle.
pub trait Multiply: Accumulator {
    fn mul_ref(&self, other: &Self) -> Self;
}

impl Accumulator for u64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn add_assign_ref(&mut self, other: &Self) {
        // Naturally overflow at 64 bits
        *self = self.wrapping_add(*other);
    }
}

impl Multiply for u64 {
    fn mul_ref(&self, other: &Self) -> Self {
        self.wrapping_mul(*other)
    }
}

impl Accumulator for BigUint {
    fn zero() -> Self {
        <BigUint as Zero>::zero()
    }

    fn one() -> Self {
        <BigUint as One>::one()
    }

    fn add_assign_ref(&mut self, other: &Self) {
        *self += other;
    }
}

impl Multiply for BigUint {
    fn mul_ref(&self, other: &Self) -> Self {
        self * other
    }
}

/// Which representation a computation runs in, chosen at call time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum NumericKind {
    /// `u64`, wrapping silently modulo 2^64.
    #[default]
    #[serde(rename = "fixed")]
    FixedWidth64,
    /// `BigUint`, exact for every index.
    #[serde(rename = "arbitrary")]
    ArbitraryPrecision,
    /// `FixedWidth64` while the result fits, `ArbitraryPrecision` beyond.
    #[serde(rename = "auto")]
    Auto,
}

impl NumericKind {
    /// Resolves `Auto` against the requested index. Never returns `Auto`.
    pub fn resolve(self, n: u64) -> NumericKind {
        match self {
            NumericKind::Auto if n <= MAX_EXACT_FIXED_WIDTH_INDEX => NumericKind::FixedWidth64,
            NumericKind::Auto => NumericKind::ArbitraryPrecision,
            kind => kind,
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumericKind::FixedWidth64 => "fixed",
            NumericKind::ArbitraryPrecision => "arbitrary",
            NumericKind::Auto => "auto",
        })
    }
}

impl FromStr for NumericKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(NumericKind::FixedWidth64),
            "arbitrary" => Ok(NumericKind::ArbitraryPrecision),
            "auto" => Ok(NumericKind::Auto),
            other => Err(format!(
                "unknown representation `{other}`, expected one of: fixed, arbitrary, auto"
            )),
        }
    }
}

/// A Fibonacci term tagged with the representation it was computed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FibValue {
    Fixed(u64),
    Arbitrary(BigUint),
}

impl FibValue {
    pub fn kind(&self) -> NumericKind {
        match self {
            FibValue::Fixed(_) => NumericKind::FixedWidth64,
            FibValue::Arbitrary(_) => NumericKind::ArbitraryPrecision,
        }
    }

    /// Number of decimal digits in the printed value.
    pub fn decimal_digits(&self) -> usize {
        match self {
            FibValue::Fixed(v) => v.checked_ilog10().map_or(1, |d| d as usize + 1),
            FibValue::Arbitrary(v) => v.to_str_radix(10).len(),
        }
    }
}

impl Default for FibValue {
    fn default() -> Self {
        FibValue::Fixed(0)
    }
}

impl fmt::Display for FibValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FibValue::Fixed(v) => write!(f, "{v}"),
            FibValue::Arbitrary(v) => write!(f, "{v}"),
        }
    }
}

/// Serialized as a decimal string so arbitrary-precision values survive JSON.
impl Serialize for FibValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn u64_addition_wraps() {
        let mut a = u64::MAX;
        a.add_assign_ref(&2);
        assert_eq!(a, 1);
    }

    #[test]
    fn biguint_addition_grows() {
        let mut a = BigUint::from(u64::MAX);
        a.add_assign_ref(&BigUint::from(2u8));
        assert_eq!(a, BigUint::from(u64::MAX) + 2u8);
    }

    #[test]
    fn auto_resolves_by_index() {
        assert_eq!(NumericKind::Auto.resolve(0), NumericKind::FixedWidth64);
        assert_eq!(NumericKind::Auto.resolve(93), NumericKind::FixedWidth64);
        assert_eq!(
            NumericKind::Auto.resolve(94),
            NumericKind::ArbitraryPrecision
        );
        assert_eq!(
            NumericKind::FixedWidth64.resolve(1000),
            NumericKind::FixedWidth64
        );
    }

    #[test]
    fn kind_names_parse_back() {
        for kind in [
            NumericKind::FixedWidth64,
            NumericKind::ArbitraryPrecision,
            NumericKind::Auto,
        ] {
            assert_eq!(kind.to_string().parse::<NumericKind>(), Ok(kind));
        }
        assert!("u128".parse::<NumericKind>().is_err());
        assert!("bigint".parse::<NumericKind>().is_err());
    }

    #[test]
    fn decimal_digits() {
        assert_eq!(FibValue::Fixed(0).decimal_digits(), 1);
        assert_eq!(FibValue::Fixed(9).decimal_digits(), 1);
        assert_eq!(FibValue::Fixed(10).decimal_digits(), 2);
        assert_eq!(FibValue::Fixed(u64::MAX).decimal_digits(), 20);
        assert_eq!(
            FibValue::Arbitrary(BigUint::from(u64::MAX) + 1u8).decimal_digits(),
            20
        );
    }

    #[test]
    fn values_serialize_as_strings() {
        let big = FibValue::Arbitrary(BigUint::from(u64::MAX) * 10u8);
        assert_eq!(
            serde_json::to_string(&big).unwrap(),
            "\"184467440737095516150\""
        );
        assert_eq!(
            serde_json::to_string(&FibValue::Fixed(55)).unwrap(),
            "\"55\""
        );
    }
}
