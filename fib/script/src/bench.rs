use std::time::Instant;

use fib_engine::{fastfib, fibonacci, FibValue, NumericKind};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Error;

#[derive(Debug, Serialize)]
pub struct Stats {
    program: &'static str,
    representation: NumericKind,
    n: u64,
    runs: u64,
    digits: usize,
    compute_secs: f32,
    verify_secs: Option<f32>,
}

#[derive(Debug)]
pub struct Outcome {
    pub value: FibValue,
    /// Only collected when the config asks for stats.
    pub stats: Option<Stats>,
}

/// Computes fib(n) `runs` times and keeps the last result.
/// Zero runs yield 0.
pub fn run(config: &Config) -> Result<Outcome, Error> {
    let Config { n, runs, .. } = *config;
    let kind = config.kind.resolve(n);
    debug!(n, runs, %kind, "starting");

    // compute
    let it = Instant::now();
    let mut value = FibValue::default();
    for _ in 0..runs {
        value = fibonacci(n, kind);
    }
    let compute_secs = it.elapsed().as_secs_f32();

    info!("fib({n}) = {value}");

    // verify
    let verify_secs = if !config.verify {
        None
    } else if runs == 0 {
        warn!("nothing was computed, skipping verification");
        None
    } else {
        let it = Instant::now();
        check(n, &value, fastfib(n, kind))?;
        let verify_secs = it.elapsed().as_secs_f32();
        debug!(verify_secs, "verified");
        Some(verify_secs)
    };

    let stats = config.stats.then(|| Stats {
        program: "fib",
        representation: kind,
        n,
        runs,
        digits: value.decimal_digits(),
        compute_secs,
        verify_secs,
    });

    Ok(Outcome { value, stats })
}

fn check(n: u64, computed: &FibValue, expected: FibValue) -> Result<(), Error> {
    if *computed == expected {
        Ok(())
    } else {
        Err(Error::VerificationFailed {
            n,
            computed: computed.clone(),
            expected,
        })
    }
}
