use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use weathersim::config::{LogFormat, LoggingConfig, SimulationConfig};

#[derive(Parser)]
#[command(
    name = "weathersim",
    about = "Synthetic hourly temperature generator with extreme and anomaly analysis",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a week of mock data and print the analysis (default)
    Run(RunArgs),

    /// Print the effective configuration as TOML
    ShowConfig {
        #[command(flatten)]
        source: ConfigSource,
    },
}

#[derive(Args, Default)]
struct ConfigSource {
    /// Path to a TOML config file (falls back to $WEATHERSIM_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Default)]
struct RunArgs {
    #[command(flatten)]
    source: ConfigSource,

    /// Seed the noise source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Number of past days to generate
    #[arg(long)]
    days: Option<u32>,

    /// Latitude echoed in the log
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Longitude echoed in the log
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Leave out the sky condition labels
    #[arg(long)]
    no_conditions: bool,

    /// Skip the fixed anomaly injection
    #[arg(long)]
    no_injection: bool,
}

impl RunArgs {
    fn apply(&self, config: &mut SimulationConfig) {
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        if let Some(days) = self.days {
            config.generator.days = days;
        }
        if let Some(lat) = self.latitude {
            config.location.latitude = lat;
        }
        if let Some(lon) = self.longitude {
            config.location.longitude = lon;
        }
        if self.no_conditions {
            config.generator.include_conditions = false;
        }
        if self.no_injection {
            config.injection.enabled = false;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default()));

    match command {
        Commands::Run(args) => {
            let mut config = load_config(&args.source)?;
            args.apply(&mut config);
            init_tracing(&config.logging);

            tracing::debug!(?config, "effective configuration");
            let stdout = std::io::stdout();
            weathersim::run(&config, &mut stdout.lock())?;
        }
        Commands::ShowConfig { source } => {
            let config = load_config(&source)?;
            let toml_str =
                toml::to_string_pretty(&config).context("failed to serialize configuration")?;
            print!("{}", toml_str);
        }
    }

    Ok(())
}

/// Read the config under a stderr subscriber driven by `RUST_LOG` (default
/// `info`), since the `[logging]` section is not known until the file is read.
fn load_config(source: &ConfigSource) -> Result<SimulationConfig> {
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::with_default(bootstrap, || {
        SimulationConfig::load_or_default(source.config.as_deref())
    })
}

/// Logs go to stderr so the report on stdout stays clean. `RUST_LOG` wins over the config level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
