use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use surf_forecast_lib::units::UnitSystem;

/// Surf forecasts from NOAA wave models and NDBC buoys.
#[derive(Parser)]
#[command(
    name = "surf-forecast",
    version,
    about = "Surf forecasts from NOAA wave models and NDBC buoys"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Synthesize a surf forecast from wave (and optional wind) model output.
    Forecast(ForecastArgs),
    /// Show observed conditions from an NDBC buoy.
    Buoy(BuoyArgs),
    /// List the model grids covering a point.
    Models(ModelsArgs),
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Wave model series as JSON.
    #[arg(long)]
    pub wave: PathBuf,

    /// Wind model series as JSON; the wave model's surface wind is used without it.
    #[arg(long)]
    pub wind: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "surf-config.toml")]
    pub config: PathBuf,

    /// Override display units from config.
    #[arg(long)]
    pub units: Option<UnitSystem>,

    /// Also write the forecast as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `buoy` subcommand.
#[derive(clap::Args)]
pub struct BuoyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "surf-config.toml")]
    pub config: PathBuf,

    /// Override the station id from config.
    #[arg(long)]
    pub station: Option<String>,

    /// Saved latest observation report.
    #[arg(long)]
    pub latest: Option<PathBuf>,

    /// Saved standard meteorological report.
    #[arg(long)]
    pub standard: Option<PathBuf>,

    /// Saved detailed wave report.
    #[arg(long)]
    pub detailed: Option<PathBuf>,

    /// Maximum rows ingested per table report.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Query time (RFC 3339); defaults to now.
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,

    /// Override display units from config.
    #[arg(long)]
    pub units: Option<UnitSystem>,

    /// Also write the station and its observations as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl BuoyArgs {
    /// True when any report file was given, so nothing is fetched.
    pub fn has_report_files(&self) -> bool {
        self.latest.is_some() || self.standard.is_some() || self.detailed.is_some()
    }
}

/// Arguments for the `models` subcommand.
#[derive(clap::Args)]
pub struct ModelsArgs {
    /// Latitude, degrees north.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude, degrees east (either convention).
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
}
