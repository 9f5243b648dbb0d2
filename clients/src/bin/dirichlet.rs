//! `dirichlet` — Evaluate arithmetic functions from the command line.
//!
//! **Usage:**
//! ```text
//! dirichlet [--config <path>] [-v] eval <func> <n>
//! dirichlet prime <func> <k>
//! dirichlet render <func> <len> [--real]
//! dirichlet lseries <func> --re <re> [--im <im>] [--terms <N>]
//! dirichlet list
//! ```
//!
//! Results are printed to stdout as JSON; logs go to stderr.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dirichlet::{PrimeTable, SmallPrimes};
use dirichlet_clients::report::{Point, PrimePoint, Sequence, Series};
use dirichlet_clients::{ClientConfig, FuncSpec, CATALOG};
use num_complex::Complex64;
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Evaluate arithmetic functions and their Dirichlet algebra.
#[derive(Parser)]
#[command(name = "dirichlet", about = "Evaluate arithmetic functions")]
struct Cli {
    /// TOML configuration file (default: ./dirichlet.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate f(n).
    Eval {
        /// Function spec, e.g. `mobius` or `sigma_k:2`.
        func: FuncSpec,
        /// Argument, n >= 1.
        n: u64,
    },
    /// Evaluate f at the k-th prime (1 <= k <= 168).
    Prime {
        /// Function spec.
        func: FuncSpec,
        /// 1-based prime index.
        k: usize,
    },
    /// Render f(1), ..., f(len).
    Render {
        /// Function spec.
        func: FuncSpec,
        /// Number of values.
        len: usize,
        /// Print only real parts.
        #[arg(long)]
        real: bool,
    },
    /// Sum the truncated L-series of f at s = re + i·im.
    Lseries {
        /// Function spec.
        func: FuncSpec,
        /// Real part of s.
        #[arg(long, allow_negative_numbers = true)]
        re: f64,
        /// Imaginary part of s.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        im: f64,
        /// Number of terms, at least 1 (default: `series_terms` from the config).
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        terms: Option<u64>,
    },
    /// List the accepted function specs.
    List,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("Failed to serialize output")?;
    writeln!(out).context("Failed to write output")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ClientConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let filter = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Command::Eval { func, n } => {
            let value = func
                .build()
                .evaluate(n)
                .with_context(|| format!("Failed to evaluate {func} at {n}"))?;
            print_json(&Point::new(n, value))
        }
        Command::Prime { func, k } => {
            let value = func
                .build()
                .at_prime_index(k)
                .with_context(|| format!("Failed to evaluate {func} at prime #{k}"))?;
            // at_prime_index succeeded, so the table has a k-th prime.
            let p = SmallPrimes.nth(k).unwrap_or_default();
            print_json(&PrimePoint::new(&func, k, Point::new(p, value)))
        }
        Command::Render { func, len, real } => {
            let f = func.build();
            let seq = if real {
                Sequence::real(&func, f.render_real(len))
            } else {
                Sequence::complex(&func, &f.render(len))
            };
            print_json(&seq)
        }
        Command::Lseries {
            func,
            re,
            im,
            terms,
        } => {
            let terms = terms.unwrap_or(config.series_terms);
            let s = Complex64::new(re, im);
            let sum = func.build().l_series(s, terms);
            print_json(&Series::new(&func, s, terms, sum))
        }
        Command::List => print_json(&CATALOG),
    }
}
