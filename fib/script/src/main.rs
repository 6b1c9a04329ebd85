mod bench;
mod cli;
mod config;
mod error;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::bench::Outcome;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Timing harnesses read stdout only; keep diagnostics on stderr.
    if !cli.quiet {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = Config::resolve(cli)?;
    let Outcome { value, stats } = bench::run(&config)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{value}")?;
    stdout.flush()?;

    if let Some(stats) = stats {
        writeln!(io::stderr(), "{}", serde_json::to_string(&stats)?)?;
    }

    Ok(())
}
