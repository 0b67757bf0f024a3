//! TOML configuration for the simulator.
//!
//! Every section is optional; missing fields fall back to the built-in
//! defaults, so an empty file is a valid configuration. The file path comes
//! from `--config` or the `WEATHERSIM_CONFIG` environment variable.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Environment variable naming a config file to load when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "WEATHERSIM_CONFIG";

/// Longest history a run may generate (about a century).
pub const MAX_DAYS: u32 = 36_500;

/// Hours in a UTC day; `hours_per_day` may not exceed it.
pub const MAX_HOURS_PER_DAY: u32 = 24;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration for one generate -> analyze run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub injection: InjectionConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        info!(path = %path.display(), "loaded simulation configuration");
        Ok(config)
    }

    /// Resolve the configuration, in order:
    /// 1. `explicit` (the `--config` flag); a failure here is an error.
    /// 2. The file named by `WEATHERSIM_CONFIG`; a failure is logged and skipped.
    /// 3. Compiled-in defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            let path = Path::new(&env_path);
            match Self::load(path) {
                Ok(cfg) => return Ok(cfg),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "WEATHERSIM_CONFIG set but file could not be loaded, using defaults"
                    );
                }
            }
        }

        debug!("no config file given, using compiled-in defaults");
        Ok(Self::default())
    }

    /// Reject settings the generator or analyzer cannot honour.
    ///
    /// Coordinates are not checked: they only appear in a log line.
    pub fn validate(&self) -> Result<()> {
        let g = &self.generator;
        if g.days == 0 || g.days > MAX_DAYS {
            bail!("generator.days must be within 1..={}, got {}", MAX_DAYS, g.days);
        }
        if g.hours_per_day == 0 || g.hours_per_day > MAX_HOURS_PER_DAY {
            bail!(
                "generator.hours_per_day must be within 1..={}, got {}",
                MAX_HOURS_PER_DAY,
                g.hours_per_day
            );
        }
        if !g.fluctuation_factor.is_finite() || g.fluctuation_factor == 0.0 {
            bail!(
                "generator.fluctuation_factor must be finite and non-zero, got {}",
                g.fluctuation_factor
            );
        }
        if !g.base_temp_c.is_finite() {
            bail!("generator.base_temp_c must be finite");
        }
        if !g.noise_bound_c.is_finite() || g.noise_bound_c < 0.0 {
            bail!("generator.noise_bound_c must be a non-negative number, got {}", g.noise_bound_c);
        }

        let k = self.analysis.anomaly_std_dev_multiplier;
        if !k.is_finite() || k <= 0.0 {
            bail!("analysis.anomaly_std_dev_multiplier must be positive, got {}", k);
        }

        let inj = &self.injection;
        if inj.enabled && inj.cold_index == inj.hot_index {
            bail!("injection.cold_index and injection.hot_index must differ");
        }

        Ok(())
    }

    /// Number of records a generation with this config produces.
    ///
    /// Out-of-range `days` and `hours_per_day` are capped the same way
    /// `generate` caps them.
    pub fn record_count(&self) -> usize {
        self.generator.capped_days() as usize * self.generator.capped_hours_per_day() as usize
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Coordinates echoed in the generator's log line. They do not affect the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        // Nanakramguda, Telangana, India.
        Self {
            latitude: 17.4138,
            longitude: 78.3414,
        }
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Temperature model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of past days to generate, ending at the start of today (UTC).
    pub days: u32,
    /// Hours generated per day, starting at 00:00.
    pub hours_per_day: u32,
    /// Temperature at the noon peak before noise, in °C.
    pub base_temp_c: f64,
    /// Divisor of `(hour - 12)^2`; negative values give a noon peak.
    pub fluctuation_factor: f64,
    /// Noise is drawn uniformly from `[-noise_bound_c, +noise_bound_c]`.
    pub noise_bound_c: f64,
    /// Attach a random sky condition to every record.
    pub include_conditions: bool,
    /// Seed for reproducible noise. Unseeded when absent.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// `days` limited to [`MAX_DAYS`].
    pub fn capped_days(&self) -> u32 {
        self.days.min(MAX_DAYS)
    }

    /// `hours_per_day` limited to [`MAX_HOURS_PER_DAY`].
    pub fn capped_hours_per_day(&self) -> u32 {
        self.hours_per_day.min(MAX_HOURS_PER_DAY)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: 7,
            hours_per_day: 24,
            base_temp_c: 25.0,
            fluctuation_factor: -20.0,
            noise_bound_c: 1.5,
            include_conditions: true,
            seed: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Injection
// ---------------------------------------------------------------------------

/// Fixed overwrites applied after generation so the analyzer always has outliers to find.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectionConfig {
    pub enabled: bool,
    pub cold_index: usize,
    pub cold_temp_c: f64,
    pub hot_index: usize,
    pub hot_temp_c: f64,
}

impl Default for InjectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cold_index: 20,
            cold_temp_c: 15.0,
            hot_index: 80,
            hot_temp_c: 40.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Records further than this many sample standard deviations from the mean are anomalies.
    pub anomaly_std_dev_multiplier: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            anomaly_std_dev_multiplier: 2.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum tracing level (`trace`, `debug`, `info`, `warn`, `error`).
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
