//! weathersim -- synthetic hourly temperature records and their analysis.
//!
//! The crate generates a week of mock hourly temperatures, then reports the
//! noon readings, the extremes and any standard-deviation anomalies.

pub mod analysis;
pub mod config;
pub mod detect;
pub mod generator;
pub mod model;
pub mod report;

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::config::SimulationConfig;
use crate::generator::noise::{self, NoiseSource};

/// Generate, analyze and render one report anchored at `anchor`.
pub fn simulate<N>(config: &SimulationConfig, anchor: DateTime<Utc>, noise: &mut N) -> String
where
    N: NoiseSource + ?Sized,
{
    let dataset = generator::generate(config, anchor, noise);
    match analysis::analyze(&dataset, config.analysis.anomaly_std_dev_multiplier) {
        Some(result) => report::render(&result, config.generator.days),
        None => report::render_empty(),
    }
}

/// Run the whole pipeline against the system clock and write the report to `out`.
pub fn run<W: Write>(config: &SimulationConfig, out: &mut W) -> Result<()> {
    config.validate().context("invalid configuration")?;

    tracing::debug!(seed = ?config.generator.seed, "selecting noise source");
    let mut noise = noise::from_seed(config.generator.seed);
    let text = simulate(config, Utc::now(), noise.as_mut());

    out.write_all(text.as_bytes())
        .context("failed to write report")?;
    out.flush().context("failed to flush report")?;
    Ok(())
}
