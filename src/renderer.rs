//! # Terminal Rendering
//!
//! ASCII output for surf forecasts and buoy observations. Everything renders
//! to a `String` so it can be tested; [`draw_ascii`] prints.

use crate::buoy_item::BuoyItem;
use crate::forecast::SurfForecast;
use crate::units::UnitSystem;
use chrono::Duration;
use std::fmt::Write;

const Y_AXIS_WIDTH: usize = 6;

/// Format a height for an axis label, dropping a trailing `.0`
fn format_height(height: f64) -> String {
    if height.fract() == 0.0 {
        format!("{:.0}", height)
    } else {
        format!("{:.1}", height)
    }
}

fn format_optional(value: Option<f64>, precision: usize, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.precision$} {unit}"),
        None => "--".to_string(),
    }
}

fn format_offset(offset: Duration) -> String {
    let minutes = offset.num_minutes();
    match minutes {
        0 => "now".to_string(),
        m if m < 0 => format!("{} min before query", -m),
        m => format!("{m} min after query"),
    }
}

/// Per-step forecast table.
pub fn render_table(forecast: &SurfForecast) -> String {
    let length = forecast.units.length_label();
    let speed = forecast.units.speed_label();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} (beach faces {:.0}°, slope {})",
        forecast.location.name, forecast.beach_angle, forecast.beach_slope
    );
    let _ = writeln!(out, "Waves: {} {}", forecast.wave_model.model.name(), forecast.wave_model.run);
    if let Some(wind) = &forecast.wind_model {
        let _ = writeln!(out, "Wind:  {} {}", wind.model.name(), wind.run);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<16} {:>11} {:>22} {:>22} {:>16}",
        "Time (UTC)",
        format!("Surf ({length})"),
        "Primary",
        "Secondary",
        format!("Wind ({speed})")
    );

    for item in &forecast.forecast_data {
        let swell = |s: &crate::swell::Swell| {
            format!("{:.1}{} @ {:.0}s {}", s.wave_height, length, s.period, s.compass_direction)
        };
        let gust = item
            .wind_gust_speed
            .map(|g| format!(" g{:.0}", g))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<16} {:>5.1}-{:<5.1} {:>22} {:>22} {:>16}",
            item.date.format("%a %d %H:%M").to_string(),
            item.minimum_breaking_height,
            item.maximum_breaking_height,
            swell(&item.primary_swell_component),
            swell(&item.secondary_swell_component),
            format!("{:.0}{} {}", item.wind_speed, gust, item.wind_compass_direction),
        );
    }
    out
}

/// Column chart of the maximum breaking height, one column per step.
pub fn render_chart(forecast: &SurfForecast, rows: usize) -> String {
    let rows = rows.max(2);
    let steps = forecast.forecast_data.len();
    if steps == 0 {
        return String::new();
    }

    let max_height = forecast
        .forecast_data
        .iter()
        .map(|item| item.maximum_breaking_height)
        .fold(0.0_f64, f64::max);
    let top = if max_height > 0.0 { max_height.ceil() } else { 1.0 };

    let height_to_row = |h: f64| ((1.0 - h / top) * (rows as f64 - 1.0)).round() as usize;

    let mut grid = vec![vec![' '; steps + Y_AXIS_WIDTH]; rows];

    // Y-axis labels, one per unit of height
    let step = if top > 6.0 { (top / 6.0).ceil() } else { 1.0 };
    let mut label_value = 0.0;
    while label_value <= top {
        let row = height_to_row(label_value).min(rows - 1);
        let label = format!("{:<width$}", format_height(label_value), width = Y_AXIS_WIDTH - 1);
        for (i, ch) in label.chars().take(Y_AXIS_WIDTH - 1).enumerate() {
            grid[row][i] = ch;
        }
        label_value += step;
    }
    for row in grid.iter_mut() {
        row[Y_AXIS_WIDTH - 1] = '│';
    }

    // Filled columns from the minimum up to the maximum breaking height
    for (column, item) in forecast.forecast_data.iter().enumerate() {
        let top_row = height_to_row(item.maximum_breaking_height).min(rows - 1);
        let bottom_row = height_to_row(item.minimum_breaking_height).min(rows - 1);
        for row in grid.iter_mut().take(bottom_row + 1).skip(top_row) {
            row[column + Y_AXIS_WIDTH] = '█';
        }
        if item.maximum_breaking_height > 0.0 {
            grid[top_row][column + Y_AXIS_WIDTH] = '▀';
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "Breaking height ({})", forecast.units.length_label());
    for row in grid {
        let _ = writeln!(out, "{}", row.into_iter().collect::<String>().trim_end());
    }

    // Day markers below the chart
    let padding = " ".repeat(Y_AXIS_WIDTH);
    let markers: String = forecast
        .forecast_data
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == 0 || item.date.date_naive() != forecast.forecast_data[i - 1].date.date_naive() {
                '|'
            } else {
                ' '
            }
        })
        .collect();
    let _ = writeln!(out, "{}{}", padding, markers.trim_end());
    out
}

/// Observed conditions from one buoy observation.
///
/// `offset` is the observation time relative to the query time.
pub fn render_conditions(item: &BuoyItem, offset: Duration, units: UnitSystem) -> String {
    let length = units.length_label();
    let speed = units.speed_label();
    let temperature = units.temperature_label();
    let pressure = units.pressure_label();
    let pressure_precision = match units {
        UnitSystem::Metric => 1,
        UnitSystem::English => 2,
    };
    let direction = |d: Option<f64>| match d {
        Some(deg) => format!("{deg:.0}° {}", crate::compass::degree_to_direction(deg)),
        None => "--".to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Observed {} ({})",
        item.date.format("%Y-%m-%d %H:%M UTC"),
        format_offset(offset)
    );
    let _ = writeln!(
        out,
        "  Seas        {}  dominant {}  {}",
        format_optional(item.significant_wave_height, 1, length),
        format_optional(item.dominant_wave_period, 0, "s"),
        direction(item.dominant_wave_direction)
    );
    let _ = writeln!(
        out,
        "  Swell       {}  {}  {}",
        format_optional(item.swell_wave_height, 1, length),
        format_optional(item.swell_wave_period, 1, "s"),
        direction(item.swell_wave_direction)
    );
    let _ = writeln!(
        out,
        "  Wind swell  {}  {}  {}",
        format_optional(item.wind_swell_wave_height, 1, length),
        format_optional(item.wind_swell_wave_period, 1, "s"),
        direction(item.wind_swell_direction)
    );
    let _ = writeln!(
        out,
        "  Wind        {}  gust {}  {}",
        format_optional(item.wind_speed, 0, speed),
        format_optional(item.wind_gust, 0, speed),
        direction(item.wind_direction)
    );
    let _ = writeln!(
        out,
        "  Water       {}  air {}",
        format_optional(item.water_temperature, 1, temperature),
        format_optional(item.air_temperature, 1, temperature)
    );
    let _ = writeln!(
        out,
        "  Pressure    {}",
        format_optional(item.pressure, pressure_precision, pressure)
    );
    if let Some(steepness) = &item.steepness {
        let _ = writeln!(out, "  Steepness   {}", steepness.to_lowercase());
    }
    out
}

/// Print the forecast table followed by the breaking-height chart.
pub fn draw_ascii(forecast: &SurfForecast, chart_rows: usize) {
    println!("{}", render_table(forecast));
    print!("{}", render_chart(forecast, chart_rows));
}
