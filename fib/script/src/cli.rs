use clap::{Parser, ValueEnum};
use fib_engine::NumericKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReprArg {
    /// 64-bit unsigned, wraps past fib(93)
    Fixed,
    /// Arbitrary precision, exact for any index
    Arbitrary,
    /// Fixed while the result fits in 64 bits, arbitrary beyond
    Auto,
}

impl From<ReprArg> for NumericKind {
    fn from(repr: ReprArg) -> Self {
        match repr {
            ReprArg::Fixed => NumericKind::FixedWidth64,
            ReprArg::Arbitrary => NumericKind::ArbitraryPrecision,
            ReprArg::Auto => NumericKind::Auto,
        }
    }
}

/// Computes the n-th Fibonacci number iteratively and prints it.
#[derive(Debug, Parser)]
#[command(name = "fib", version, long_about = None)]
pub struct Cli {
    /// Index of the term to compute [env: FIB_ARG] [default: 60]
    pub n: Option<u64>,

    /// How many times to repeat the computation [env: FIB_RUNS] [default: 1]
    pub runs: Option<u64>,

    /// Numeric representation [env: FIB_REPR] [default: fixed]
    #[arg(long, value_enum)]
    pub repr: Option<ReprArg>,

    /// Cross-check the result against matrix exponentiation
    #[arg(long)]
    #[arg(default_value_t = false)]
    pub verify: bool,

    /// Print timing statistics as JSON on stderr
    #[arg(long)]
    #[arg(default_value_t = false)]
    pub stats: bool,

    /// Suppress all stderr output
    #[arg(short, long)]
    #[arg(default_value_t = false)]
    pub quiet: bool,
}
