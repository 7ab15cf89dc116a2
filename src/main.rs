//! # Surf Forecast Entry Point
//!
//! Command-line front end: synthesizes forecasts from saved model output,
//! reports observed buoy conditions (from saved reports or live from NDBC),
//! and lists the model grids covering a point.

#[cfg(test)]
mod tests;

mod cli;
mod logging;

use std::{fs, path::Path, process, time::Duration};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::de::DeserializeOwned;
use surf_forecast_lib::buoy::Buoy;
use surf_forecast_lib::buoy_item::ReportShape;
use surf_forecast_lib::config::Config;
use surf_forecast_lib::forecast::{synthesize, WaveForecast, WindForecast};
use surf_forecast_lib::location::GeoPoint;
use surf_forecast_lib::model::NoaaModel;
use surf_forecast_lib::{ndbc, renderer};
use tracing::{info, warn};

use crate::cli::{BuoyArgs, Cli, Command, ForecastArgs, ModelsArgs};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Forecast(args) => run_forecast(args),
        Command::Buoy(args) => run_buoy(args),
        Command::Models(args) => run_models(args),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

fn run_forecast(args: ForecastArgs) -> Result<()> {
    let config = Config::load_from_path(&args.config);

    let waves: WaveForecast = read_json(&args.wave)?;
    let wind: Option<WindForecast> = args.wind.as_deref().map(read_json::<WindForecast>).transpose()?;

    let mut forecast = synthesize(&config.beach(), &waves, wind.as_ref()).context("synthesizing forecast")?;
    forecast.change_units(args.units.unwrap_or(config.display.units));

    renderer::draw_ascii(&forecast, config.display.chart_rows);

    if let Some(path) = &args.json {
        forecast
            .export_as_json(path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "exported forecast");
    }
    Ok(())
}

/// Standard first so detailed rows merge into it, latest last.
fn ingest_files(buoy: &mut Buoy, args: &BuoyArgs, limit: Option<usize>) -> Result<()> {
    let reports = [
        (&args.standard, ReportShape::Standard),
        (&args.detailed, ReportShape::Detailed),
        (&args.latest, ReportShape::Latest),
    ];
    for (path, shape) in reports {
        let Some(path) = path else { continue };
        let items = ndbc::read_report(path, shape)
            .with_context(|| format!("loading {shape} report {}", path.display()))?;
        buoy.ingest(shape, items, limit);
    }
    Ok(())
}

fn fetch_live(buoy: &mut Buoy, limit: Option<usize>) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("surf-forecast/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client")?;
    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime
        .block_on(ndbc::fetch_station(&client, buoy, limit))
        .with_context(|| format!("fetching NDBC station {}", buoy.station_id))
}

fn run_buoy(args: BuoyArgs) -> Result<()> {
    let config = Config::load_from_path(&args.config);
    let station = args.station.clone().unwrap_or(config.buoy.station_id.clone());
    let limit = args.limit.or(config.buoy.data_limit);

    let mut buoy = Buoy::new(station.clone(), GeoPoint::new(0.0, 0.0, station));
    if args.has_report_files() {
        ingest_files(&mut buoy, &args, limit)?;
    } else {
        fetch_live(&mut buoy, limit)?;
    }

    buoy.change_units(args.units.unwrap_or(config.display.units));

    let at = args.at.unwrap_or_else(Utc::now);
    match buoy.find_conditions(at) {
        Some((item, offset)) => {
            println!("Station {} ({})", buoy.station_id, buoy.capabilities().join(", "));
            print!("{}", renderer::render_conditions(item, offset, buoy.units));
        }
        None => bail!("station {} reported no observations", buoy.station_id),
    }

    if let Some(path) = &args.json {
        buoy.export_as_json(path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "exported buoy data");
    }
    Ok(())
}

fn run_models(args: ModelsArgs) -> Result<()> {
    let point = GeoPoint::new(args.lat, args.lon, "query");
    let models = NoaaModel::containing(&point);
    if models.is_empty() {
        warn!(lat = args.lat, lon = args.lon, "point is outside every model grid");
    }

    for model in &models {
        let grid = model.grid();
        println!(
            "{:<16} {:>5.3}° {:>5.3}d  {}",
            grid.name, grid.location_resolution, grid.time_resolution, grid.description
        );
    }
    match NoaaModel::wave_model_for(&point) {
        Some(model) => println!("\nPreferred wave model: {}", model.name()),
        None => println!("\nNo wave model covers this point"),
    }
    Ok(())
}
