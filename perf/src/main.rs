use std::hint::black_box;
use std::time::Instant;

use anyhow::{Result, ensure};
use clap::Parser;
use hms::{Duration, hms};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Times the hot paths of `hms::Duration`.
#[derive(Parser)]
#[command(name = "perf")]
struct Args {
    /// Number of durations to push through each phase.
    #[arg(short, long, default_value_t = 1_000_000)]
    iterations: u64,
}

fn phase<T>(name: &str, iterations: u64, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    let result = f()?;
    let elapsed = start.elapsed();
    let per_sec = iterations as f64 / elapsed.as_secs_f64();
    info!(phase = name, ?elapsed, ops_per_sec = per_sec as u64, "done");
    Ok(result)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let n = args.iterations;
    info!(iterations = n, "starting");

    let strings = phase("format", n, || {
        Ok((0..n).map(|i| Duration::from_secs(i * 7).to_string()).collect::<Vec<_>>())
    })?;

    let parsed = phase("parse", n, || {
        strings
            .iter()
            .map(|s| s.parse::<Duration>())
            .collect::<hms::Result<Vec<_>>>()
            .map_err(Into::into)
    })?;

    let total = phase("add", n, || {
        let mut total = Duration::ZERO;
        for d in &parsed {
            total = (total + *d)?;
        }
        Ok(total)
    })?;

    phase("sub", n, || {
        let mut remaining = total;
        for d in &parsed {
            remaining = (remaining - *d)?;
        }
        ensure!(remaining.is_zero(), "{remaining} left over after subtracting everything");
        Ok(())
    })?;

    phase("scale", n, || {
        for d in &parsed {
            black_box((*d * 3)?);
            black_box((0.5 * *d)?);
        }
        Ok(())
    })?;

    phase("compare", n, || {
        let threshold = hms!("1:00:00");
        Ok(parsed.iter().filter(|d| **d < threshold).count())
    })?;

    info!(%total, "finished");
    Ok(())
}
