//! # Surf Forecast Synthesis
//!
//! Turns a wave-model series (mandatory) and a wind-model series (optional)
//! into one [`SurfForecast`] for a beach.
//!
//! ## Per time step
//! 1. Build three [`Swell`] components from the wave record: primary swell,
//!    secondary swell, wind swell.
//! 2. Estimate each component's breaking height range at the beach, using the
//!    wave model grid point's elevation as the reference depth.
//! 3. Rank the components by maximum breaking height, descending. Ties keep
//!    input order, so the primary swell wins over the secondary, and both win
//!    over the wind swell. The top component's range becomes the forecast
//!    breaking height.
//! 4. Take wind from the wind model entry with the same index, or fall back to
//!    the wave model's surface wind for that index alone.
//!
//! Inputs are normalized to metric before any physics runs; the caller's
//! series are never modified. The result is metric and can be converted
//! afterwards with [`SurfForecast::change_units`].

use crate::fallback;
use crate::location::GeoPoint;
use crate::model::ModelRun;
use crate::swell::Swell;
use crate::units::{Quantity, UnitConvertible, UnitSystem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use std::{fs, io};
use thiserror::Error;
use tracing::{debug, info};

/// Serialized value of an unavailable gust speed.
pub const GUST_UNAVAILABLE: f64 = -1.0;

#[derive(Error, Debug)]
pub enum ForecastError {
    /// The wave model series has no records; nothing can be synthesized
    #[error("wave model data is required but the series is empty")]
    MissingWaveData,

    #[error("forecast serialization: {0}")]
    Json(#[from] serde_json::Error),

    #[error("forecast export IO: {0}")]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Model inputs
// ---------------------------------------------------------------------------

/// One time step of wave-model output at a single grid point.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveForecastItem {
    pub date: DateTime<Utc>,

    pub primary_swell_wave_height: f64,
    pub primary_swell_period: f64,
    pub primary_swell_direction: f64,

    pub secondary_swell_wave_height: f64,
    pub secondary_swell_period: f64,
    pub secondary_swell_direction: f64,

    pub wind_swell_wave_height: f64,
    pub wind_swell_period: f64,
    pub wind_swell_direction: f64,

    pub surface_wind_speed: f64,
    pub surface_wind_direction: f64,
}

impl WaveForecastItem {
    pub fn primary_swell(&self) -> Swell {
        Swell::new(
            self.primary_swell_wave_height,
            self.primary_swell_period,
            self.primary_swell_direction,
        )
    }

    pub fn secondary_swell(&self) -> Swell {
        Swell::new(
            self.secondary_swell_wave_height,
            self.secondary_swell_period,
            self.secondary_swell_direction,
        )
    }

    pub fn wind_swell(&self) -> Swell {
        Swell::new(
            self.wind_swell_wave_height,
            self.wind_swell_period,
            self.wind_swell_direction,
        )
    }
}

impl UnitConvertible for WaveForecastItem {
    fn convert_units(&mut self, from: UnitSystem, to: UnitSystem) {
        let length = |v: f64| from.convert(to, Quantity::Length, v);
        self.primary_swell_wave_height = length(self.primary_swell_wave_height);
        self.secondary_swell_wave_height = length(self.secondary_swell_wave_height);
        self.wind_swell_wave_height = length(self.wind_swell_wave_height);
        self.surface_wind_speed = from.convert(to, Quantity::Speed, self.surface_wind_speed);
    }
}

/// A wave-model run extracted at one grid point.
///
/// The grid point's elevation (`model.location.elevation`, meters, negative
/// underwater) is the reference depth for shoaling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveForecast {
    pub model: ModelRun,
    pub units: UnitSystem,
    pub forecast_data: Vec<WaveForecastItem>,
}

/// One time step of wind-model output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WindForecastItem {
    pub date: DateTime<Utc>,
    pub wind_speed: f64,
    pub wind_gust_speed: f64,
    pub wind_direction: f64,
}

impl UnitConvertible for WindForecastItem {
    fn convert_units(&mut self, from: UnitSystem, to: UnitSystem) {
        self.wind_speed = from.convert(to, Quantity::Speed, self.wind_speed);
        if self.wind_gust_speed >= 0.0 {
            self.wind_gust_speed = from.convert(to, Quantity::Speed, self.wind_gust_speed);
        }
    }
}

/// A wind-model run, index-aligned with the wave series by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindForecast {
    pub model: ModelRun,
    pub units: UnitSystem,
    pub forecast_data: Vec<WindForecastItem>,
}

/// Series whose records share one unit system tag.
trait UnitTagged: Clone {
    fn units(&self) -> UnitSystem;
    fn change_units(&mut self, new_units: UnitSystem);

    /// Borrow when already in `target`, otherwise convert a copy.
    fn in_units(&self, target: UnitSystem) -> Cow<'_, Self> {
        if self.units() == target {
            Cow::Borrowed(self)
        } else {
            let mut converted = self.clone();
            converted.change_units(target);
            Cow::Owned(converted)
        }
    }
}

macro_rules! unit_tagged_series {
    ($series:ty) => {
        impl $series {
            /// Rewrite every record into `new_units`. No-op when unchanged.
            pub fn change_units(&mut self, new_units: UnitSystem) {
                if self.units == new_units {
                    return;
                }
                let from = self.units;
                for item in &mut self.forecast_data {
                    item.convert_units(from, new_units);
                }
                self.units = new_units;
            }
        }

        impl UnitTagged for $series {
            fn units(&self) -> UnitSystem {
                self.units
            }

            fn change_units(&mut self, new_units: UnitSystem) {
                <$series>::change_units(self, new_units)
            }
        }
    };
}

unit_tagged_series!(WaveForecast);
unit_tagged_series!(WindForecast);

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Shoreline geometry used to localize open-water swell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Beach {
    pub location: GeoPoint,
    /// Direction the beach faces, degrees
    pub angle: f64,
    /// Dimensionless nearshore gradient
    pub slope: f64,
}

/// Wind for one forecast step, from whichever source supplied it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindConditions {
    pub speed: f64,
    pub gust: Option<f64>,
    pub direction: f64,
}

impl From<&WindForecastItem> for WindConditions {
    fn from(item: &WindForecastItem) -> Self {
        WindConditions {
            speed: item.wind_speed,
            // negative gusts are the "unknown" sentinel
            gust: Some(item.wind_gust_speed).filter(|g| g.is_finite() && *g >= 0.0),
            direction: item.wind_direction,
        }
    }
}

mod gust_sentinel {
    use super::GUST_UNAVAILABLE;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(gust: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(gust.unwrap_or(GUST_UNAVAILABLE))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let raw = Option::<f64>::deserialize(deserializer)?;
        Ok(raw.filter(|gust| *gust >= 0.0))
    }
}

/// One synthesized forecast step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfForecastItem {
    pub date: DateTime<Utc>,

    pub wind_speed: f64,
    /// `None` when the wind source has no gust estimate
    #[serde(with = "gust_sentinel")]
    pub wind_gust_speed: Option<f64>,
    pub wind_direction: f64,
    pub wind_compass_direction: String,

    pub primary_swell_component: Swell,
    pub secondary_swell_component: Swell,
    pub tertiary_swell_component: Swell,

    /// Breaking range of the primary component
    pub minimum_breaking_height: f64,
    pub maximum_breaking_height: f64,
}

impl UnitConvertible for SurfForecastItem {
    fn convert_units(&mut self, from: UnitSystem, to: UnitSystem) {
        self.wind_speed = from.convert(to, Quantity::Speed, self.wind_speed);
        self.wind_gust_speed = from.convert_opt(to, Quantity::Speed, self.wind_gust_speed);
        self.primary_swell_component.convert_units(from, to);
        self.secondary_swell_component.convert_units(from, to);
        self.tertiary_swell_component.convert_units(from, to);
        self.minimum_breaking_height = from.convert(to, Quantity::Length, self.minimum_breaking_height);
        self.maximum_breaking_height = from.convert(to, Quantity::Length, self.maximum_breaking_height);
    }
}

/// A complete forecast for one beach.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfForecast {
    pub location: GeoPoint,
    pub beach_angle: f64,
    pub beach_slope: f64,
    pub units: UnitSystem,

    pub forecast_data: Vec<SurfForecastItem>,

    pub wave_model: ModelRun,
    pub wind_model: Option<ModelRun>,
}

impl SurfForecast {
    /// Rewrite every item into `new_units`. No-op when unchanged.
    pub fn change_units(&mut self, new_units: UnitSystem) {
        if self.units == new_units {
            return;
        }
        let from = self.units;
        for item in &mut self.forecast_data {
            item.convert_units(from, new_units);
        }
        self.units = new_units;
    }

    pub fn to_json(&self) -> Result<String, ForecastError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn export_as_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ForecastError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Order of three components by maximum breaking height, tallest first.
///
/// The sort is stable, so exactly equal maxima keep their input order.
pub fn rank_by_breaking_height(maxima: [f64; 3]) -> [usize; 3] {
    let mut order = [0, 1, 2];
    order.sort_by(|&a, &b| maxima[b].total_cmp(&maxima[a]));
    order
}

fn assemble_item(record: &WaveForecastItem, wind: WindConditions, beach: &Beach, elevation: f64) -> SurfForecastItem {
    let swells = [record.primary_swell(), record.secondary_swell(), record.wind_swell()];
    let ranges: [(f64, f64); 3] =
        std::array::from_fn(|i| swells[i].breaking_wave_heights(beach.angle, elevation, beach.slope));

    let order = rank_by_breaking_height(ranges.map(|(_, max)| max));
    let (minimum, maximum) = ranges[order[0]];
    let [primary, secondary, tertiary] = order.map(|i| swells[i].clone());

    SurfForecastItem {
        date: record.date,
        wind_speed: wind.speed,
        wind_gust_speed: wind.gust,
        wind_direction: wind.direction,
        wind_compass_direction: crate::compass::degree_to_direction(wind.direction).to_string(),
        primary_swell_component: primary,
        secondary_swell_component: secondary,
        tertiary_swell_component: tertiary,
        minimum_breaking_height: minimum,
        maximum_breaking_height: maximum,
    }
}

/// Build a metric surf forecast for `beach`.
///
/// Fails only when the wave series is empty; no partial forecast is built in
/// that case. Wind is looked up by index and falls back per step to the wave
/// model's surface wind.
pub fn synthesize(
    beach: &Beach,
    waves: &WaveForecast,
    wind: Option<&WindForecast>,
) -> Result<SurfForecast, ForecastError> {
    if waves.forecast_data.is_empty() {
        return Err(ForecastError::MissingWaveData);
    }

    let waves = waves.in_units(UnitSystem::Metric);
    let wind = wind.map(|w| w.in_units(UnitSystem::Metric));
    let elevation = waves.model.location.elevation;

    let mut fallback_steps = 0usize;
    let forecast_data: Vec<SurfForecastItem> = waves
        .forecast_data
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let conditions = match wind.as_ref().and_then(|w| w.forecast_data.get(i)) {
                Some(entry) => WindConditions::from(entry),
                None => {
                    fallback_steps += 1;
                    fallback::surface_wind(record)
                }
            };
            assemble_item(record, conditions, beach, elevation)
        })
        .collect();

    if fallback_steps > 0 {
        debug!(
            fallback_steps,
            total_steps = forecast_data.len(),
            "wind model missing steps, using wave model surface wind"
        );
    }
    info!(
        beach = %beach.location.name,
        steps = forecast_data.len(),
        "synthesized surf forecast"
    );

    Ok(SurfForecast {
        location: beach.location.clone(),
        beach_angle: beach.angle,
        beach_slope: beach.slope,
        units: UnitSystem::Metric,
        forecast_data,
        wave_model: waves.model.clone(),
        wind_model: wind.map(|w| w.model.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoaaModel;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 11, 0, 0, 0).unwrap()
    }

    fn beach() -> Beach {
        Beach {
            location: GeoPoint::new(41.35, -71.4, "Test Beach"),
            angle: 180.0,
            slope: 0.02,
        }
    }

    fn scenario_record(step: i64) -> WaveForecastItem {
        WaveForecastItem {
            date: start() + Duration::hours(3 * step),
            primary_swell_wave_height: 2.0,
            primary_swell_period: 10.0,
            primary_swell_direction: 200.0,
            secondary_swell_wave_height: 1.0,
            secondary_swell_period: 6.0,
            secondary_swell_direction: 120.0,
            wind_swell_wave_height: 0.3,
            wind_swell_period: 3.0,
            wind_swell_direction: 200.0,
            surface_wind_speed: 5.1,
            surface_wind_direction: 190.0,
        }
    }

    fn wave_forecast(records: Vec<WaveForecastItem>) -> WaveForecast {
        WaveForecast {
            model: ModelRun {
                model: NoaaModel::WaveWatchEastCoast,
                run: "20240611 00z".into(),
                location: GeoPoint::new(41.33, 288.67, "grid").with_elevation(-5.0),
            },
            units: UnitSystem::Metric,
            forecast_data: records,
        }
    }

    fn wind_forecast(steps: i64) -> WindForecast {
        WindForecast {
            model: ModelRun {
                model: NoaaModel::GfsWind,
                run: "20240611 00z".into(),
                location: GeoPoint::new(41.25, 288.75, "gfs"),
            },
            units: UnitSystem::Metric,
            forecast_data: (0..steps)
                .map(|i| WindForecastItem {
                    date: start() + Duration::hours(3 * i),
                    wind_speed: 7.0 + i as f64,
                    wind_gust_speed: 9.5 + i as f64,
                    wind_direction: 45.0,
                })
                .collect(),
        }
    }

    #[test]
    fn scenario_primary_and_tertiary_roles() {
        let waves = wave_forecast(vec![scenario_record(0)]);
        let forecast = synthesize(&beach(), &waves, None).unwrap();
        let item = &forecast.forecast_data[0];

        assert_eq!(item.primary_swell_component.wave_height, 2.0);
        assert_eq!(item.primary_swell_component.period, 10.0);
        assert_eq!(item.secondary_swell_component.wave_height, 1.0);
        assert_eq!(item.tertiary_swell_component.wave_height, 0.3);

        let expected = item
            .primary_swell_component
            .breaking_wave_heights(180.0, -5.0, 0.02);
        assert_eq!((item.minimum_breaking_height, item.maximum_breaking_height), expected);
        assert!(item.maximum_breaking_height > 0.0);
    }

    #[test]
    fn scenario_wind_fallback_without_wind_model() {
        let waves = wave_forecast(vec![scenario_record(0), scenario_record(1)]);
        let forecast = synthesize(&beach(), &waves, None).unwrap();
        for item in &forecast.forecast_data {
            assert_eq!(item.wind_speed, 5.1);
            assert_eq!(item.wind_gust_speed, None);
            assert_eq!(item.wind_direction, 190.0);
            assert_eq!(item.wind_compass_direction, "S");
        }
        assert!(forecast.wind_model.is_none());
    }

    #[test]
    fn wind_model_supplies_gusts() {
        let waves = wave_forecast((0..3).map(scenario_record).collect());
        let wind = wind_forecast(3);
        let forecast = synthesize(&beach(), &waves, Some(&wind)).unwrap();
        for (item, entry) in forecast.forecast_data.iter().zip(&wind.forecast_data) {
            assert_eq!(item.wind_speed, entry.wind_speed);
            assert_eq!(item.wind_gust_speed, Some(entry.wind_gust_speed));
            assert_eq!(item.wind_direction, 45.0);
            assert_eq!(item.wind_compass_direction, "NE");
        }
        assert_eq!(forecast.wind_model.unwrap().model, NoaaModel::GfsWind);
    }

    #[test]
    fn unknown_wind_model_gust_stays_unknown() {
        let waves = wave_forecast((0..2).map(scenario_record).collect());
        let mut wind = wind_forecast(2);
        wind.forecast_data[0].wind_gust_speed = GUST_UNAVAILABLE;
        wind.forecast_data[1].wind_gust_speed = f64::NAN;

        let mut forecast = synthesize(&beach(), &waves, Some(&wind)).unwrap();
        assert_eq!(forecast.forecast_data[0].wind_gust_speed, None);
        assert_eq!(forecast.forecast_data[1].wind_gust_speed, None);
        assert_eq!(forecast.forecast_data[0].wind_speed, 7.0);

        forecast.change_units(UnitSystem::English);
        assert_eq!(forecast.forecast_data[0].wind_gust_speed, None);
        assert!(forecast.to_json().unwrap().contains("\"wind_gust_speed\": -1.0"));
    }

    #[test]
    fn english_wind_series_keeps_gust_sentinel() {
        let mut item = WindForecastItem {
            date: start(),
            wind_speed: 10.0,
            wind_gust_speed: GUST_UNAVAILABLE,
            wind_direction: 90.0,
        };
        item.convert_units(UnitSystem::English, UnitSystem::Metric);
        assert_eq!(item.wind_gust_speed, GUST_UNAVAILABLE);
        assert_eq!(WindConditions::from(&item).gust, None);
    }

    #[test]
    fn short_wind_series_falls_back_per_step() {
        let waves = wave_forecast((0..4).map(scenario_record).collect());
        let wind = wind_forecast(2);
        let forecast = synthesize(&beach(), &waves, Some(&wind)).unwrap();
        let gusts: Vec<_> = forecast.forecast_data.iter().map(|i| i.wind_gust_speed).collect();
        assert_eq!(gusts, vec![Some(9.5), Some(10.5), None, None]);
        assert_eq!(forecast.forecast_data[3].wind_speed, 5.1);
    }

    #[test]
    fn empty_wave_series_is_fatal() {
        let waves = wave_forecast(vec![]);
        let wind = wind_forecast(5);
        let err = synthesize(&beach(), &waves, Some(&wind)).unwrap_err();
        assert!(matches!(err, ForecastError::MissingWaveData));
    }

    #[test]
    fn output_preserves_input_order() {
        let waves = wave_forecast((0..8).map(scenario_record).collect());
        let forecast = synthesize(&beach(), &waves, None).unwrap();
        let dates: Vec<_> = forecast.forecast_data.iter().map(|i| i.date).collect();
        let expected: Vec<_> = waves.forecast_data.iter().map(|r| r.date).collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        assert_eq!(rank_by_breaking_height([1.0, 3.0, 2.0]), [1, 2, 0]);
        assert_eq!(rank_by_breaking_height([0.5, 0.2, 0.9]), [2, 0, 1]);
        // swell 2 and 3 tied
        assert_eq!(rank_by_breaking_height([1.0, 2.0, 2.0]), [1, 2, 0]);
        assert_eq!(rank_by_breaking_height([3.0, 2.0, 2.0]), [0, 1, 2]);
        // all tied, including the all-shadowed case
        assert_eq!(rank_by_breaking_height([1.5, 1.5, 1.5]), [0, 1, 2]);
        assert_eq!(rank_by_breaking_height([0.0, 0.0, 0.0]), [0, 1, 2]);
        // swell 1 and 2 tied above swell 3
        assert_eq!(rank_by_breaking_height([2.0, 2.0, 1.0]), [0, 1, 2]);
    }

    #[test]
    fn mirrored_swells_tie_by_position() {
        // Symmetric about the beach normal: identical breaking heights
        let mut record = scenario_record(0);
        record.primary_swell_direction = 170.0;
        record.secondary_swell_wave_height = 2.0;
        record.secondary_swell_period = 10.0;
        record.secondary_swell_direction = 190.0;
        let forecast = synthesize(&beach(), &wave_forecast(vec![record.clone()]), None).unwrap();
        assert_eq!(forecast.forecast_data[0].primary_swell_component.direction, 170.0);
        assert_eq!(forecast.forecast_data[0].secondary_swell_component.direction, 190.0);

        // Swapping the values flips the roles
        record.primary_swell_direction = 190.0;
        record.secondary_swell_direction = 170.0;
        let forecast = synthesize(&beach(), &wave_forecast(vec![record]), None).unwrap();
        assert_eq!(forecast.forecast_data[0].primary_swell_component.direction, 190.0);
        assert_eq!(forecast.forecast_data[0].secondary_swell_component.direction, 170.0);
    }

    #[test]
    fn flat_ocean_produces_zero_breaking_height() {
        let record = WaveForecastItem {
            date: start(),
            ..Default::default()
        };
        let forecast = synthesize(&beach(), &wave_forecast(vec![record]), None).unwrap();
        let item = &forecast.forecast_data[0];
        assert_eq!((item.minimum_breaking_height, item.maximum_breaking_height), (0.0, 0.0));
    }

    #[test]
    fn english_inputs_are_normalized_without_mutation() {
        let metric = wave_forecast((0..3).map(scenario_record).collect());
        let mut english = metric.clone();
        english.change_units(UnitSystem::English);
        let english_snapshot = english.clone();

        let from_metric = synthesize(&beach(), &metric, None).unwrap();
        let from_english = synthesize(&beach(), &english, None).unwrap();

        assert_eq!(english, english_snapshot);
        assert_eq!(from_english.units, UnitSystem::Metric);
        for (a, b) in from_metric.forecast_data.iter().zip(&from_english.forecast_data) {
            assert!((a.maximum_breaking_height - b.maximum_breaking_height).abs() < 1e-9);
            assert!((a.wind_speed - b.wind_speed).abs() < 1e-9);
        }
    }

    #[test]
    fn forecast_unit_round_trip() {
        let waves = wave_forecast((0..3).map(scenario_record).collect());
        let wind = wind_forecast(2);
        let original = synthesize(&beach(), &waves, Some(&wind)).unwrap();

        let mut converted = original.clone();
        converted.change_units(UnitSystem::English);
        assert_eq!(converted.units, UnitSystem::English);
        assert_eq!(converted.forecast_data[2].wind_gust_speed, None);
        converted.change_units(UnitSystem::Metric);

        for (a, b) in original.forecast_data.iter().zip(&converted.forecast_data) {
            assert!((a.wind_speed - b.wind_speed).abs() < 1e-9);
            assert!((a.minimum_breaking_height - b.minimum_breaking_height).abs() < 1e-9);
            assert!((a.maximum_breaking_height - b.maximum_breaking_height).abs() < 1e-9);
            assert!(
                (a.primary_swell_component.wave_height - b.primary_swell_component.wave_height).abs() < 1e-9
            );
            match (a.wind_gust_speed, b.wind_gust_speed) {
                (Some(x), Some(y)) => assert!((x - y).abs() < 1e-9),
                (x, y) => assert_eq!(x, y),
            }
        }
    }

    #[test]
    fn missing_gust_serializes_as_sentinel() {
        let waves = wave_forecast(vec![scenario_record(0)]);
        let forecast = synthesize(&beach(), &waves, None).unwrap();
        let json = forecast.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["forecast_data"][0]["wind_gust_speed"], -1.0);

        let parsed: SurfForecast = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.forecast_data[0].wind_gust_speed, None);
    }

    #[test]
    fn export_writes_json_file() {
        let waves = wave_forecast(vec![scenario_record(0)]);
        let forecast = synthesize(&beach(), &waves, None).unwrap();
        let file = tempfile::NamedTempFile::new().unwrap();
        forecast.export_as_json(file.path()).unwrap();
        let loaded: SurfForecast = serde_json::from_slice(&fs::read(file.path()).unwrap()).unwrap();
        assert_eq!(loaded.forecast_data.len(), 1);
        assert_eq!(loaded.location.name, "Test Beach");
    }
}
