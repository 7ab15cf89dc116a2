//! # NDBC Report Retrieval and Parsing
//!
//! Fetches and parses the three report shapes the National Data Buoy Center
//! publishes for each station.
//!
//! ## Latest observation (`latest_obs/<id>.txt`)
//! ```text
//! Station 44097
//! 40.967N 71.126W
//!
//! 1:26 pm EDT
//! 1726 GMT 06/11/24
//! Wind: SW (220°), 11.7 kt
//! Seas: 4.3 ft
//! ...
//! Swell: 2.0 ft
//! Period: 12.9 sec
//! Direction: SSW
//! Wind Wave: 3.9 ft
//! Period: 6.7 sec
//! Direction: W
//! ```
//! Line 5 carries the UTC timestamp. Values are in English units (ft, kt,
//! inHg, °F) and are converted to metric here. `Period:` and `Direction:`
//! are unlabelled: the first pair belongs to the swell, the second to the wind
//! swell. That ordering is the only thing telling them apart, so a feed change
//! that reorders the block will silently swap them.
//!
//! ## Standard meteorological (`realtime2/<id>.txt`)
//! Whitespace separated, 19 columns, `#` header lines, `MM` for missing.
//!
//! ## Detailed wave summary (`realtime2/<id>.spec`)
//! Whitespace separated, 15 columns. Swell directions are compass points and
//! steepness is a word (`N/A` or `MM` when missing).
//!
//! Malformed table rows are skipped with a warning; a latest report without a
//! readable timestamp is an error.

use crate::buoy::Buoy;
use crate::buoy_item::{BuoyItem, ReportShape};
use crate::compass::direction_to_degree;
use crate::units::{Quantity, UnitSystem};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::path::Path;
use std::{fs, io};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum NdbcError {
    /// HTTP request failed (network, server, or protocol error)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed {shape} report: {reason}")]
    MalformedReport { shape: ReportShape, reason: String },

    #[error("report IO: {0}")]
    Io(#[from] io::Error),
}

const KNOTS_TO_METERS_PER_SECOND: f64 = 0.514444;

const LATEST_MIN_LINES: usize = 6;
const LATEST_DATE_LINE: usize = 4;
const LATEST_DATE_FORMAT: &str = "%H%M GMT %m/%d/%y";

const STANDARD_COLUMNS: usize = 19;
const DETAILED_COLUMNS: usize = 15;
const TABLE_DATE_FORMAT: &str = "%Y %m %d %H %M";

const MISSING: &str = "MM";

fn malformed(shape: ReportShape, reason: impl Into<String>) -> NdbcError {
    NdbcError::MalformedReport {
        shape,
        reason: reason.into(),
    }
}

fn english_to_metric(quantity: Quantity, value: f64) -> f64 {
    UnitSystem::English.convert(UnitSystem::Metric, quantity, value)
}

/// First whitespace token of `raw` as a number.
fn leading_number(raw: &str) -> Option<f64> {
    raw.split_whitespace().next()?.parse().ok()
}

/// Degrees inside parentheses, e.g. `SW (220°)`.
fn parenthesized_degrees(raw: &str) -> Option<f64> {
    let start = raw.find('(')? + 1;
    let end = raw[start..].find(|c: char| c == '°' || c == ')')? + start;
    raw[start..end].trim().parse().ok()
}

/// Parse a `latest_obs` snapshot into one metric observation.
pub fn parse_latest(raw: &str) -> Result<BuoyItem, NdbcError> {
    let lines: Vec<&str> = raw.lines().collect();
    if lines.len() < LATEST_MIN_LINES {
        return Err(malformed(
            ReportShape::Latest,
            format!("expected at least {LATEST_MIN_LINES} lines, got {}", lines.len()),
        ));
    }

    let stamp = lines[LATEST_DATE_LINE].trim();
    let date = NaiveDateTime::parse_from_str(stamp, LATEST_DATE_FORMAT)
        .map_err(|e| malformed(ReportShape::Latest, format!("timestamp {stamp:?}: {e}")))?
        .and_utc();

    let mut item = BuoyItem::new(date);
    let mut swell_period_read = false;
    let mut swell_direction_read = false;

    for line in &lines[LATEST_DATE_LINE + 1..] {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        let length = || leading_number(value).map(|v| english_to_metric(Quantity::Length, v));
        let temperature = || leading_number(value).map(|v| english_to_metric(Quantity::Temperature, v));
        let knots = || {
            value
                .split_whitespace()
                .rev()
                .skip_while(|token| *token != "kt")
                .nth(1)
                .and_then(|v| v.parse::<f64>().ok())
                .map(|v| v * KNOTS_TO_METERS_PER_SECOND)
        };

        match label.trim() {
            "Wind" => {
                item.wind_direction = parenthesized_degrees(value);
                item.wind_speed = knots();
            }
            "Gust" => item.wind_gust = knots(),
            "Seas" => item.significant_wave_height = length(),
            "Peak Period" => item.dominant_wave_period = leading_number(value),
            "Mean Wave Dir" => item.mean_wave_direction = parenthesized_degrees(value),
            "Pres" => {
                item.pressure = leading_number(value).map(|v| english_to_metric(Quantity::Pressure, v));
            }
            "Air Temp" => item.air_temperature = temperature(),
            "Water Temp" => item.water_temperature = temperature(),
            "Dew Point" => item.dewpoint_temperature = temperature(),
            "Swell" => item.swell_wave_height = length(),
            "Wind Wave" => item.wind_swell_wave_height = length(),
            "Period" if !swell_period_read => {
                item.swell_wave_period = leading_number(value);
                swell_period_read = true;
            }
            "Period" => item.wind_swell_wave_period = leading_number(value),
            "Direction" if !swell_direction_read => {
                item.swell_wave_direction = direction_to_degree(value);
                swell_direction_read = true;
            }
            "Direction" => item.wind_swell_direction = direction_to_degree(value),
            _ => {}
        }
    }

    item.interpolate_dominant_wave_direction();
    Ok(item)
}

/// A numeric table cell. `MM` is missing; anything else unparseable is an error.
fn cell(raw: &str) -> Result<Option<f64>, String> {
    if raw == MISSING {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| format!("bad value {raw:?}"))
}

fn compass_cell(raw: &str) -> Option<f64> {
    if raw == MISSING {
        None
    } else {
        direction_to_degree(raw)
    }
}

fn row_date(columns: &[&str]) -> Result<DateTime<Utc>, String> {
    let stamp = columns[..5].join(" ");
    NaiveDateTime::parse_from_str(&stamp, TABLE_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("timestamp {stamp:?}: {e}"))
}

fn parse_table<F>(raw: &str, shape: ReportShape, columns: usize, parse_row: F) -> Vec<BuoyItem>
where
    F: Fn(&[&str]) -> Result<BuoyItem, String>,
{
    let mut items = Vec::new();
    for (number, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < columns {
            warn!(%shape, line = number + 1, found = fields.len(), expected = columns, "skipping short row");
            continue;
        }
        match parse_row(&fields) {
            Ok(item) => items.push(item),
            Err(reason) => warn!(%shape, line = number + 1, %reason, "skipping malformed row"),
        }
    }
    debug!(%shape, rows = items.len(), "parsed report table");
    items
}

/// Parse a standard meteorological table. Rows keep their feed order.
pub fn parse_standard(raw: &str) -> Vec<BuoyItem> {
    parse_table(raw, ReportShape::Standard, STANDARD_COLUMNS, |c| {
        let mut item = BuoyItem::new(row_date(c)?);
        item.wind_direction = cell(c[5])?;
        item.wind_speed = cell(c[6])?;
        item.wind_gust = cell(c[7])?;
        item.significant_wave_height = cell(c[8])?;
        item.dominant_wave_period = cell(c[9])?;
        item.average_period = cell(c[10])?;
        item.mean_wave_direction = cell(c[11])?;
        item.pressure = cell(c[12])?;
        item.air_temperature = cell(c[13])?;
        item.water_temperature = cell(c[14])?;
        item.dewpoint_temperature = cell(c[15])?;
        item.visibility = cell(c[16])?;
        item.pressure_tendency = cell(c[17])?;
        // tide is published in feet
        item.water_level = cell(c[18])?.map(|v| english_to_metric(Quantity::Length, v));
        Ok(item)
    })
}

/// Parse a detailed wave summary table. Rows keep their feed order.
pub fn parse_detailed(raw: &str) -> Vec<BuoyItem> {
    parse_table(raw, ReportShape::Detailed, DETAILED_COLUMNS, |c| {
        let mut item = BuoyItem::new(row_date(c)?);
        item.significant_wave_height = cell(c[5])?;
        item.swell_wave_height = cell(c[6])?;
        item.swell_wave_period = cell(c[7])?;
        item.wind_swell_wave_height = cell(c[8])?;
        item.wind_swell_wave_period = cell(c[9])?;
        item.swell_wave_direction = compass_cell(c[10]);
        item.wind_swell_direction = compass_cell(c[11]);
        item.steepness = match c[12] {
            "N/A" | MISSING => None,
            word => Some(word.to_string()),
        };
        item.average_period = cell(c[13])?;
        item.mean_wave_direction = cell(c[14])?;
        item.interpolate_dominant_wave_direction();
        Ok(item)
    })
}

/// Parse report text of any shape into metric observations.
pub fn parse_report(raw: &str, shape: ReportShape) -> Result<Vec<BuoyItem>, NdbcError> {
    Ok(match shape {
        ReportShape::Latest => vec![parse_latest(raw)?],
        ReportShape::Standard => parse_standard(raw),
        ReportShape::Detailed => parse_detailed(raw),
    })
}

/// Read and parse a saved report file.
pub fn read_report<P: AsRef<Path>>(path: P, shape: ReportShape) -> Result<Vec<BuoyItem>, NdbcError> {
    let raw = fs::read_to_string(path)?;
    parse_report(&raw, shape)
}

pub fn report_url(buoy: &Buoy, shape: ReportShape) -> String {
    match shape {
        ReportShape::Latest => buoy.latest_observation_url(),
        ReportShape::Standard => buoy.standard_data_url(),
        ReportShape::Detailed => buoy.detailed_wave_data_url(),
    }
}

/// Download and parse one report for `buoy`.
pub async fn fetch_report(
    client: &reqwest::Client,
    buoy: &Buoy,
    shape: ReportShape,
) -> Result<Vec<BuoyItem>, NdbcError> {
    let url = report_url(buoy, shape);
    debug!(%url, %shape, "fetching NDBC report");
    let raw = client.get(&url).send().await?.error_for_status()?.text().await?;
    parse_report(&raw, shape)
}

/// Fetch all three reports concurrently and ingest them into `buoy`.
///
/// The standard table goes in first, then the detailed table merges into it,
/// then the latest snapshot refreshes the newest observation.
pub async fn fetch_station(
    client: &reqwest::Client,
    buoy: &mut Buoy,
    limit: Option<usize>,
) -> Result<(), NdbcError> {
    let (standard, detailed, latest) = tokio::try_join!(
        fetch_report(client, buoy, ReportShape::Standard),
        fetch_report(client, buoy, ReportShape::Detailed),
        fetch_report(client, buoy, ReportShape::Latest),
    )?;

    buoy.ingest(ReportShape::Standard, standard, limit);
    buoy.ingest(ReportShape::Detailed, detailed, limit);
    buoy.ingest(ReportShape::Latest, latest, limit);

    info!(station = %buoy.station_id, observations = buoy.buoy_data.len(), "fetched NDBC station");
    Ok(())
}
