//! Run configuration: command-line values first, then environment, then defaults.

use std::env::VarError;
use std::fmt::Display;
use std::str::FromStr;

use fib_engine::NumericKind;

use crate::cli::Cli;
use crate::error::ConfigError;

pub const DEFAULT_N: u64 = 60;
pub const DEFAULT_RUNS: u64 = 1;

/// Reads `var` through `env`, falling back to `def` when unset.
/// A set but malformed value is an error rather than a silent default.
fn env_or<T, E>(env: &E, var: &str, def: T) -> Result<T, ConfigError>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
    E: Fn(&str) -> Result<String, VarError>,
{
    match env(var) {
        Ok(s) => s.trim().parse::<T>().map_err(|e| ConfigError::Parse {
            var: var.to_string(),
            reason: e.to_string(),
            value: s,
        }),
        Err(VarError::NotPresent) => Ok(def),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
            var: var.to_string(),
        }),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub n: u64,
    pub runs: u64,
    pub kind: NumericKind,
    pub verify: bool,
    pub stats: bool,
}

impl Config {
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve_with(cli, |var: &str| std::env::var(var))
    }

    fn resolve_with<E>(cli: &Cli, env: E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Result<String, VarError>,
    {
        let n = match cli.n {
            Some(n) => n,
            None => env_or(&env, "FIB_ARG", DEFAULT_N)?,
        };
        let runs = match cli.runs {
            Some(runs) => runs,
            None => env_or(&env, "FIB_RUNS", DEFAULT_RUNS)?,
        };
        let kind = match cli.repr {
            Some(repr) => repr.into(),
            None => env_or(&env, "FIB_REPR", NumericKind::default())?,
        };

        Ok(Config {
            n,
            runs,
            kind,
            verify: cli.verify,
            stats: cli.stats && !cli.quiet,
        })
    }
}
