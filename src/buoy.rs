//! # NDBC Buoy Stations
//!
//! A [`Buoy`] owns one station's observation series, newest first. Reports are
//! ingested per shape:
//!
//! - **Latest**: a single snapshot. Refreshes the most recent observation
//!   unless it is older, in which case it lands in its own slot.
//! - **Standard / Detailed**: many rows, each matched to an existing
//!   observation by its exact timestamp. A row for an unseen timestamp is
//!   inserted in order. A row for a seen timestamp merges when any other
//!   shape already contributed there (see [`BuoyItem::sources`]), and replaces
//!   the observation otherwise, so re-ingesting the same feed never compounds
//!   stale values.

use crate::buoy_item::{merge, BuoyItem, ReportShape};
use crate::location::GeoPoint;
use crate::units::{UnitConvertible, UnitSystem};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{fs, io};
use thiserror::Error;
use tracing::debug;

const NDBC_BASE_URL: &str = "http://www.ndbc.noaa.gov";

#[derive(Error, Debug)]
pub enum BuoyError {
    #[error("buoy serialization: {0}")]
    Json(#[from] serde_json::Error),

    #[error("buoy export IO: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Buoy {
    pub station_id: String,
    pub location: GeoPoint,
    pub owner: String,
    pub program: String,
    pub buoy_type: String,

    // Station capabilities
    pub meteorological: bool,
    pub currents: bool,
    pub water_quality: bool,
    pub dart: bool,

    pub units: UnitSystem,
    /// Observations, newest first
    pub buoy_data: Vec<BuoyItem>,
}

impl Buoy {
    pub fn new(station_id: impl Into<String>, location: GeoPoint) -> Self {
        Buoy {
            station_id: station_id.into(),
            location,
            meteorological: true,
            ..Default::default()
        }
    }

    /// Stations that report meteorological data are treated as active.
    pub fn is_active(&self) -> bool {
        self.meteorological
    }

    pub fn has_currents(&self) -> bool {
        self.currents
    }

    pub fn has_water_quality(&self) -> bool {
        self.water_quality
    }

    pub fn is_dart(&self) -> bool {
        self.dart
    }

    /// Names of the data programs this station reports.
    pub fn capabilities(&self) -> Vec<&'static str> {
        [
            (self.is_active(), "meteorological"),
            (self.has_currents(), "currents"),
            (self.has_water_quality(), "water quality"),
            (self.is_dart(), "DART"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }

    pub fn latest_observation_url(&self) -> String {
        format!("{NDBC_BASE_URL}/data/latest_obs/{}.txt", self.station_id.to_lowercase())
    }

    pub fn standard_data_url(&self) -> String {
        format!("{NDBC_BASE_URL}/data/realtime2/{}.txt", self.station_id.to_uppercase())
    }

    pub fn detailed_wave_data_url(&self) -> String {
        format!("{NDBC_BASE_URL}/data/realtime2/{}.spec", self.station_id.to_uppercase())
    }

    /// Spectral density plot, a JPEG image.
    pub fn spectra_plot_url(&self) -> String {
        format!("{NDBC_BASE_URL}/spec_plot.php?station={}", self.station_id.to_lowercase())
    }

    /// Ingest a latest snapshot, in the buoy's unit system.
    ///
    /// A snapshot at or after the newest observation refreshes it. An older
    /// snapshot merges into the slot with its exact timestamp, or is inserted
    /// in order.
    pub fn ingest_latest(&mut self, mut item: BuoyItem) {
        let shape = ReportShape::Latest;
        let newest = self.buoy_data.first().map(|slot| slot.date);
        let index = match newest {
            Some(date) if item.date >= date => Some(0),
            _ => self.buoy_data.iter().position(|slot| slot.date == item.date),
        };
        match index {
            Some(index) => merge_into(&mut self.buoy_data[index], &item, shape),
            None => {
                item.record_source(shape);
                self.insert_ordered(item);
            }
        }
    }

    /// Ingest standard meteorological rows, at most `limit` of them.
    pub fn ingest_standard(&mut self, items: Vec<BuoyItem>, limit: Option<usize>) {
        self.ingest_rows(items, limit, ReportShape::Standard);
    }

    /// Ingest detailed wave rows, at most `limit` of them.
    pub fn ingest_detailed(&mut self, items: Vec<BuoyItem>, limit: Option<usize>) {
        self.ingest_rows(items, limit, ReportShape::Detailed);
    }

    /// Ingest parsed items of any shape. Latest items ignore `limit`.
    pub fn ingest(&mut self, shape: ReportShape, items: Vec<BuoyItem>, limit: Option<usize>) {
        match shape {
            ReportShape::Latest => items.into_iter().for_each(|item| self.ingest_latest(item)),
            ReportShape::Standard | ReportShape::Detailed => self.ingest_rows(items, limit, shape),
        }
    }

    fn ingest_rows(&mut self, items: Vec<BuoyItem>, limit: Option<usize>, shape: ReportShape) {
        let limit = limit.unwrap_or(usize::MAX);
        let (mut merged, mut replaced, mut inserted) = (0, 0, 0);

        for mut item in items.into_iter().take(limit) {
            match self.buoy_data.iter().position(|slot| slot.date == item.date) {
                Some(index) => {
                    let slot = &mut self.buoy_data[index];
                    if slot.only_from(shape) {
                        item.record_source(shape);
                        *slot = item;
                        replaced += 1;
                    } else {
                        merge_into(slot, &item, shape);
                        merged += 1;
                    }
                }
                None => {
                    item.record_source(shape);
                    self.insert_ordered(item);
                    inserted += 1;
                }
            }
        }

        debug!(
            station = %self.station_id,
            %shape,
            merged,
            replaced,
            inserted,
            total = self.buoy_data.len(),
            "ingested buoy rows"
        );
    }

    fn insert_ordered(&mut self, item: BuoyItem) {
        // newest first
        let index = self.buoy_data.partition_point(|slot| slot.date > item.date);
        self.buoy_data.insert(index, item);
    }

    /// Observation closest to `at`, with its offset from the query.
    pub fn find_conditions(&self, at: DateTime<Utc>) -> Option<(&BuoyItem, Duration)> {
        find_nearest(&self.buoy_data, at)
    }

    /// Rewrite every observation into `new_units`. No-op when unchanged.
    pub fn change_units(&mut self, new_units: UnitSystem) {
        if self.units == new_units {
            return;
        }
        let from = self.units;
        for item in &mut self.buoy_data {
            item.convert_units(from, new_units);
        }
        self.units = new_units;
    }

    pub fn to_json(&self) -> Result<String, BuoyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn export_as_json<P: AsRef<Path>>(&self, path: P) -> Result<(), BuoyError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn merge_into(slot: &mut BuoyItem, item: &BuoyItem, shape: ReportShape) {
    *slot = merge(slot, item, shape);
    slot.record_source(shape);
}

/// Observation closest in time to `at` and the signed offset
/// `match.date - at` (negative when the match is in the past).
///
/// Scans the whole series; on equal distances the earlier entry wins.
/// Returns `None` only for an empty series.
pub fn find_nearest(series: &[BuoyItem], at: DateTime<Utc>) -> Option<(&BuoyItem, Duration)> {
    let magnitude = |d: Duration| if d < Duration::zero() { -d } else { d };
    let mut best: Option<(&BuoyItem, Duration)> = None;
    for item in series {
        let offset = item.date - at;
        match best {
            Some((_, best_offset)) if magnitude(best_offset) <= magnitude(offset) => {}
            _ => best = Some((item, offset)),
        }
    }
    best
}
