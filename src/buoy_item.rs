//! # Buoy Observations
//!
//! A [`BuoyItem`] is one timestamped observation assembled from up to three
//! NDBC report shapes. Each shape reports its own subset of fields and at its
//! own cadence, so a single observation is usually built by several merges.
//!
//! Every numeric field is an `Option`: `None` means "not reported" and
//! `Some(0.0)` is a real measurement (calm wind, flat sea, due-north
//! direction). Merges never replace a reported value with an unreported one.
//!
//! | shape      | fields                                                        |
//! |------------|---------------------------------------------------------------|
//! | `Latest`   | wind, seas, peak period, pressure, temperatures, swell + wind swell |
//! | `Standard` | wind, seas, periods, mean direction, meteorology, visibility, tide |
//! | `Detailed` | seas, swell + wind swell, steepness, average period, mean direction |

use crate::units::{Quantity, UnitConvertible, UnitSystem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three NDBC report shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportShape {
    /// `latest_obs/<id>.txt` snapshot
    Latest,
    /// `realtime2/<id>.txt` standard meteorological table
    Standard,
    /// `realtime2/<id>.spec` detailed wave summary
    Detailed,
}

impl fmt::Display for ReportShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportShape::Latest => "latest",
            ReportShape::Standard => "standard",
            ReportShape::Detailed => "detailed",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BuoyItem {
    pub date: DateTime<Utc>,

    // Wind
    pub wind_direction: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_gust: Option<f64>,

    // Waves
    pub significant_wave_height: Option<f64>,
    pub dominant_wave_period: Option<f64>,
    pub average_period: Option<f64>,
    /// Derived from the swell components, see [`BuoyItem::interpolate_dominant_wave_direction`]
    pub dominant_wave_direction: Option<f64>,
    pub mean_wave_direction: Option<f64>,

    // Spectral components
    pub swell_wave_height: Option<f64>,
    pub swell_wave_period: Option<f64>,
    pub swell_wave_direction: Option<f64>,
    pub wind_swell_wave_height: Option<f64>,
    pub wind_swell_wave_period: Option<f64>,
    pub wind_swell_direction: Option<f64>,
    pub steepness: Option<String>,

    // Meteorology
    pub pressure: Option<f64>,
    pub air_temperature: Option<f64>,
    pub water_temperature: Option<f64>,
    pub dewpoint_temperature: Option<f64>,
    pub visibility: Option<f64>,
    pub pressure_tendency: Option<f64>,
    pub water_level: Option<f64>,

    /// Report shapes that have contributed to this observation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<ReportShape>,
}

impl BuoyItem {
    pub fn new(date: DateTime<Utc>) -> Self {
        BuoyItem {
            date,
            ..Default::default()
        }
    }

    pub fn record_source(&mut self, shape: ReportShape) {
        if !self.sources.contains(&shape) {
            self.sources.push(shape);
        }
    }

    /// True when no shape other than `shape` has contributed yet.
    pub fn only_from(&self, shape: ReportShape) -> bool {
        self.sources.iter().all(|source| *source == shape)
    }

    /// Derive `dominant_wave_direction` from the swell components.
    ///
    /// The component whose period is closest to the dominant period wins.
    /// Without a usable dominant period the taller component wins. Ties go to
    /// the swell. Leaves the field untouched when neither component has a
    /// direction.
    pub fn interpolate_dominant_wave_direction(&mut self) {
        let swell = self.swell_wave_direction;
        let wind_swell = self.wind_swell_direction;
        let (swell_dir, wind_dir) = match (swell, wind_swell) {
            (None, None) => return,
            (Some(d), None) | (None, Some(d)) => {
                self.dominant_wave_direction = Some(d);
                return;
            }
            (Some(s), Some(w)) => (s, w),
        };

        let prefer_swell = match (
            self.dominant_wave_period,
            self.swell_wave_period,
            self.wind_swell_wave_period,
        ) {
            (Some(dominant), Some(sp), Some(wp)) => (sp - dominant).abs() <= (wp - dominant).abs(),
            (Some(_), Some(_), None) => true,
            (Some(_), None, Some(_)) => false,
            _ => {
                let swell_h = self.swell_wave_height.unwrap_or(0.0);
                let wind_h = self.wind_swell_wave_height.unwrap_or(0.0);
                swell_h >= wind_h
            }
        };

        self.dominant_wave_direction = Some(if prefer_swell { swell_dir } else { wind_dir });
    }
}

/// Take the incoming value when reported, otherwise keep the existing one.
fn refresh<T: Clone>(existing: &Option<T>, incoming: &Option<T>) -> Option<T> {
    incoming.clone().or_else(|| existing.clone())
}

/// Keep the existing value when reported, otherwise fill from incoming.
fn fill<T: Clone>(existing: &Option<T>, incoming: &Option<T>) -> Option<T> {
    existing.clone().or_else(|| incoming.clone())
}

/// Merge a fresher latest snapshot into the most recent observation.
///
/// Fields the snapshot reports replace the existing values. The date only
/// moves forward. Fields the snapshot never carries (visibility, tide,
/// steepness, average period) are left alone.
pub fn merge_latest(existing: &BuoyItem, incoming: &BuoyItem) -> BuoyItem {
    let mut merged = existing.clone();
    merged.date = existing.date.max(incoming.date);

    merged.wind_direction = refresh(&existing.wind_direction, &incoming.wind_direction);
    merged.wind_speed = refresh(&existing.wind_speed, &incoming.wind_speed);
    merged.wind_gust = refresh(&existing.wind_gust, &incoming.wind_gust);

    merged.significant_wave_height = refresh(&existing.significant_wave_height, &incoming.significant_wave_height);
    merged.dominant_wave_period = refresh(&existing.dominant_wave_period, &incoming.dominant_wave_period);
    merged.mean_wave_direction = refresh(&existing.mean_wave_direction, &incoming.mean_wave_direction);

    merged.swell_wave_height = refresh(&existing.swell_wave_height, &incoming.swell_wave_height);
    merged.swell_wave_period = refresh(&existing.swell_wave_period, &incoming.swell_wave_period);
    merged.swell_wave_direction = refresh(&existing.swell_wave_direction, &incoming.swell_wave_direction);
    merged.wind_swell_wave_height = refresh(&existing.wind_swell_wave_height, &incoming.wind_swell_wave_height);
    merged.wind_swell_wave_period = refresh(&existing.wind_swell_wave_period, &incoming.wind_swell_wave_period);
    merged.wind_swell_direction = refresh(&existing.wind_swell_direction, &incoming.wind_swell_direction);

    merged.pressure = refresh(&existing.pressure, &incoming.pressure);
    merged.air_temperature = refresh(&existing.air_temperature, &incoming.air_temperature);
    merged.water_temperature = refresh(&existing.water_temperature, &incoming.water_temperature);
    merged.dewpoint_temperature = refresh(&existing.dewpoint_temperature, &incoming.dewpoint_temperature);

    merged.interpolate_dominant_wave_direction();
    merged
}

/// Fill an observation's gaps from a standard meteorological row.
pub fn merge_standard(existing: &BuoyItem, incoming: &BuoyItem) -> BuoyItem {
    let mut merged = existing.clone();

    merged.wind_direction = fill(&existing.wind_direction, &incoming.wind_direction);
    merged.wind_speed = fill(&existing.wind_speed, &incoming.wind_speed);
    merged.wind_gust = fill(&existing.wind_gust, &incoming.wind_gust);

    merged.significant_wave_height = fill(&existing.significant_wave_height, &incoming.significant_wave_height);
    merged.dominant_wave_period = fill(&existing.dominant_wave_period, &incoming.dominant_wave_period);
    merged.average_period = fill(&existing.average_period, &incoming.average_period);
    merged.mean_wave_direction = fill(&existing.mean_wave_direction, &incoming.mean_wave_direction);

    merged.pressure = fill(&existing.pressure, &incoming.pressure);
    merged.air_temperature = fill(&existing.air_temperature, &incoming.air_temperature);
    merged.water_temperature = fill(&existing.water_temperature, &incoming.water_temperature);
    merged.dewpoint_temperature = fill(&existing.dewpoint_temperature, &incoming.dewpoint_temperature);
    merged.visibility = fill(&existing.visibility, &incoming.visibility);
    merged.pressure_tendency = fill(&existing.pressure_tendency, &incoming.pressure_tendency);
    merged.water_level = fill(&existing.water_level, &incoming.water_level);

    merged.interpolate_dominant_wave_direction();
    merged
}

/// Fill an observation's gaps from a detailed wave row.
pub fn merge_detailed(existing: &BuoyItem, incoming: &BuoyItem) -> BuoyItem {
    let mut merged = existing.clone();

    merged.significant_wave_height = fill(&existing.significant_wave_height, &incoming.significant_wave_height);
    merged.swell_wave_height = fill(&existing.swell_wave_height, &incoming.swell_wave_height);
    merged.swell_wave_period = fill(&existing.swell_wave_period, &incoming.swell_wave_period);
    merged.swell_wave_direction = fill(&existing.swell_wave_direction, &incoming.swell_wave_direction);
    merged.wind_swell_wave_height = fill(&existing.wind_swell_wave_height, &incoming.wind_swell_wave_height);
    merged.wind_swell_wave_period = fill(&existing.wind_swell_wave_period, &incoming.wind_swell_wave_period);
    merged.wind_swell_direction = fill(&existing.wind_swell_direction, &incoming.wind_swell_direction);
    merged.steepness = fill(&existing.steepness, &incoming.steepness);
    merged.average_period = fill(&existing.average_period, &incoming.average_period);
    merged.mean_wave_direction = fill(&existing.mean_wave_direction, &incoming.mean_wave_direction);

    merged.interpolate_dominant_wave_direction();
    merged
}

/// Merge `incoming` into `existing` using the rules for `shape`.
pub fn merge(existing: &BuoyItem, incoming: &BuoyItem, shape: ReportShape) -> BuoyItem {
    match shape {
        ReportShape::Latest => merge_latest(existing, incoming),
        ReportShape::Standard => merge_standard(existing, incoming),
        ReportShape::Detailed => merge_detailed(existing, incoming),
    }
}

impl UnitConvertible for BuoyItem {
    fn convert_units(&mut self, from: UnitSystem, to: UnitSystem) {
        let convert = |quantity, value| from.convert_opt(to, quantity, value);

        self.wind_speed = convert(Quantity::Speed, self.wind_speed);
        self.wind_gust = convert(Quantity::Speed, self.wind_gust);

        self.significant_wave_height = convert(Quantity::Length, self.significant_wave_height);
        self.swell_wave_height = convert(Quantity::Length, self.swell_wave_height);
        self.wind_swell_wave_height = convert(Quantity::Length, self.wind_swell_wave_height);
        self.water_level = convert(Quantity::Length, self.water_level);

        self.pressure = convert(Quantity::Pressure, self.pressure);
        self.pressure_tendency = convert(Quantity::Pressure, self.pressure_tendency);

        self.air_temperature = convert(Quantity::Temperature, self.air_temperature);
        self.water_temperature = convert(Quantity::Temperature, self.water_temperature);
        self.dewpoint_temperature = convert(Quantity::Temperature, self.dewpoint_temperature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 11, hour, minute, 0).unwrap()
    }

    fn latest_report() -> BuoyItem {
        BuoyItem {
            wind_direction: Some(270.0),
            wind_speed: Some(6.0),
            wind_gust: Some(8.0),
            significant_wave_height: Some(1.3),
            dominant_wave_period: Some(12.0),
            swell_wave_height: Some(0.6),
            swell_wave_period: Some(12.9),
            swell_wave_direction: Some(202.5),
            wind_swell_wave_height: Some(1.2),
            wind_swell_wave_period: Some(6.7),
            wind_swell_direction: Some(270.0),
            water_temperature: Some(17.0),
            ..BuoyItem::new(at(17, 50))
        }
    }

    fn standard_row() -> BuoyItem {
        BuoyItem {
            wind_direction: Some(260.0),
            wind_speed: Some(5.0),
            significant_wave_height: Some(1.2),
            dominant_wave_period: Some(11.0),
            average_period: Some(6.1),
            pressure: Some(1013.2),
            visibility: Some(10.0),
            water_level: Some(0.3),
            ..BuoyItem::new(at(17, 40))
        }
    }

    fn detailed_row() -> BuoyItem {
        BuoyItem {
            significant_wave_height: Some(1.4),
            swell_wave_height: Some(0.5),
            swell_wave_period: Some(12.5),
            swell_wave_direction: Some(202.5),
            wind_swell_wave_height: Some(1.1),
            wind_swell_wave_period: Some(6.2),
            wind_swell_direction: Some(270.0),
            steepness: Some("STEEP".into()),
            average_period: Some(6.0),
            ..BuoyItem::new(at(17, 40))
        }
    }

    #[test]
    fn latest_merge_is_idempotent() {
        let report = latest_report();
        let once = merge_latest(&BuoyItem::default(), &report);
        let twice = merge_latest(&once, &report);
        assert_eq!(once, twice);
    }

    #[test]
    fn latest_merge_leaves_unreported_fields() {
        let existing = merge_standard(&BuoyItem::new(at(17, 40)), &standard_row());
        let merged = merge_latest(&existing, &latest_report());

        assert_eq!(merged.date, at(17, 50));
        assert_eq!(merged.wind_speed, Some(6.0));
        assert_eq!(merged.visibility, Some(10.0));
        assert_eq!(merged.water_level, Some(0.3));
        assert_eq!(merged.average_period, Some(6.1));
        // not in the snapshot, so not erased
        assert_eq!(merged.pressure, Some(1013.2));
    }

    #[test]
    fn latest_merge_never_moves_date_back() {
        let newer = BuoyItem::new(at(18, 10));
        let merged = merge_latest(&newer, &latest_report());
        assert_eq!(merged.date, at(18, 10));
    }

    #[test]
    fn sources_are_recorded_once() {
        let mut item = BuoyItem::new(at(17, 40));
        assert!(item.only_from(ReportShape::Detailed));
        item.record_source(ReportShape::Standard);
        item.record_source(ReportShape::Standard);
        assert_eq!(item.sources, vec![ReportShape::Standard]);
        assert!(item.only_from(ReportShape::Standard));
        assert!(!item.only_from(ReportShape::Detailed));
    }

    #[test]
    fn standard_and_detailed_merge_either_order() {
        let a = merge_detailed(&standard_row(), &detailed_row());
        let b = merge_standard(&detailed_row(), &standard_row());

        for merged in [&a, &b] {
            assert_eq!(merged.wind_speed, Some(5.0));
            assert_eq!(merged.steepness.as_deref(), Some("STEEP"));
            assert_eq!(merged.swell_wave_period, Some(12.5));
            assert_eq!(merged.pressure, Some(1013.2));
        }
        // shared fields keep whichever report arrived first
        assert_eq!(a.significant_wave_height, Some(1.2));
        assert_eq!(b.significant_wave_height, Some(1.4));
    }

    #[test]
    fn merge_never_erases_with_missing() {
        let sparse = BuoyItem::new(at(17, 40));
        let full = merge_detailed(&standard_row(), &detailed_row());
        for shape in [ReportShape::Latest, ReportShape::Standard, ReportShape::Detailed] {
            let merged = merge(&full, &BuoyItem { date: full.date, ..sparse.clone() }, shape);
            assert_eq!(merged, full, "{shape} merge dropped fields");
        }
    }

    #[test]
    fn zero_is_a_reported_value() {
        let calm = BuoyItem {
            wind_speed: Some(0.0),
            wind_direction: Some(0.0),
            ..BuoyItem::new(at(17, 40))
        };
        let merged = merge_standard(&calm, &standard_row());
        assert_eq!(merged.wind_speed, Some(0.0));
        assert_eq!(merged.wind_direction, Some(0.0));
    }

    #[test]
    fn dominant_direction_follows_closest_period() {
        let mut item = latest_report();
        item.interpolate_dominant_wave_direction();
        assert_eq!(item.dominant_wave_direction, Some(202.5));

        item.dominant_wave_period = Some(7.0);
        item.interpolate_dominant_wave_direction();
        assert_eq!(item.dominant_wave_direction, Some(270.0));
    }

    #[test]
    fn dominant_direction_without_period_uses_height() {
        let mut item = detailed_row();
        item.interpolate_dominant_wave_direction();
        assert_eq!(item.dominant_wave_direction, Some(270.0));

        item.swell_wave_height = Some(1.1);
        item.interpolate_dominant_wave_direction();
        assert_eq!(item.dominant_wave_direction, Some(202.5));
    }

    #[test]
    fn dominant_direction_needs_a_component() {
        let mut item = standard_row();
        item.interpolate_dominant_wave_direction();
        assert_eq!(item.dominant_wave_direction, None);
    }

    #[test]
    fn unit_round_trip_keeps_missing_fields() {
        let original = merge_detailed(&standard_row(), &detailed_row());
        let mut item = original.clone();
        item.convert_units(UnitSystem::Metric, UnitSystem::English);
        assert!(item.air_temperature.is_none());
        item.convert_units(UnitSystem::English, UnitSystem::Metric);

        let close = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < 1e-9,
            (x, y) => x == y,
        };
        assert!(close(item.wind_speed, original.wind_speed));
        assert!(close(item.pressure, original.pressure));
        assert!(close(item.swell_wave_height, original.swell_wave_height));
        assert!(close(item.water_level, original.water_level));
    }
}
