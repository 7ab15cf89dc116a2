//! # NOAA Model Grids
//!
//! The wave and wind inputs come from a small, fixed set of NOAA model grids.
//! Each variant of [`NoaaModel`] maps to one row of a static table holding its
//! bounding box and resolutions, so containment and lookup are plain data
//! queries rather than per-model code.

use crate::location::GeoPoint;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoaaModel {
    WaveWatchEastCoast,
    WaveWatchWestCoast,
    WaveWatchPacificIslands,
    WaveWatchGlobal,
    GfsWind,
}

/// Static description of one model grid.
///
/// Corners are `(latitude, longitude)` with longitude in degrees east
/// `[0, 360)`. Time resolution is in days between model outputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelGrid {
    pub name: &'static str,
    pub description: &'static str,
    pub bottom_left: (f64, f64),
    pub top_right: (f64, f64),
    pub location_resolution: f64,
    pub time_resolution: f64,
    pub is_wave_model: bool,
}

const GRIDS: [(NoaaModel, ModelGrid); 5] = [
    (
        NoaaModel::WaveWatchEastCoast,
        ModelGrid {
            name: "multi_1.at_10m",
            description: "Multi-grid wave model: US East Coast 10 arc-min grid",
            bottom_left: (0.0, 260.0),
            top_right: (55.00011, 310.00011),
            location_resolution: 0.167,
            time_resolution: 0.125,
            is_wave_model: true,
        },
    ),
    (
        NoaaModel::WaveWatchWestCoast,
        ModelGrid {
            name: "multi_1.wc_10m",
            description: "Multi-grid wave model: US West Coast 10 arc-min grid",
            bottom_left: (25.0, 210.0),
            top_right: (50.00005, 250.00008),
            location_resolution: 0.167,
            time_resolution: 0.125,
            is_wave_model: true,
        },
    ),
    (
        NoaaModel::WaveWatchPacificIslands,
        ModelGrid {
            name: "multi_1.ep_10m",
            description: "Multi-grid wave model: Pacific Islands (including Hawaii) 10 arc-min grid",
            bottom_left: (-20.0, 130.0),
            top_right: (30.0001, 215.00017),
            location_resolution: 0.167,
            time_resolution: 0.125,
            is_wave_model: true,
        },
    ),
    (
        NoaaModel::WaveWatchGlobal,
        ModelGrid {
            name: "multi_1.glo_30m",
            description: "Multi-grid wave model: Global 30 arc-min grid",
            bottom_left: (-77.5, 0.0),
            top_right: (77.5, 359.5),
            location_resolution: 0.5,
            time_resolution: 0.125,
            is_wave_model: true,
        },
    ),
    (
        NoaaModel::GfsWind,
        ModelGrid {
            name: "gfs_0p25",
            description: "Global Forecast System: 0.25 degree surface wind",
            bottom_left: (-90.0, 0.0),
            top_right: (90.0, 359.75),
            location_resolution: 0.25,
            time_resolution: 0.125,
            is_wave_model: false,
        },
    ),
];

impl NoaaModel {
    pub const ALL: [NoaaModel; 5] = [
        NoaaModel::WaveWatchEastCoast,
        NoaaModel::WaveWatchWestCoast,
        NoaaModel::WaveWatchPacificIslands,
        NoaaModel::WaveWatchGlobal,
        NoaaModel::GfsWind,
    ];

    pub fn grid(self) -> &'static ModelGrid {
        // GRIDS is ordered the same as ALL
        &GRIDS[self as usize].1
    }

    pub fn name(self) -> &'static str {
        self.grid().name
    }

    pub fn description(self) -> &'static str {
        self.grid().description
    }

    /// Strict bounding-box containment. Longitude is normalized first, so
    /// either longitude convention works.
    pub fn contains(self, point: &GeoPoint) -> bool {
        let grid = self.grid();
        let lon = point.normalized_longitude();
        point.latitude > grid.bottom_left.0
            && point.latitude < grid.top_right.0
            && lon > grid.bottom_left.1
            && lon < grid.top_right.1
    }

    /// Every model whose grid contains `point`.
    pub fn containing(point: &GeoPoint) -> Vec<NoaaModel> {
        Self::ALL.into_iter().filter(|m| m.contains(point)).collect()
    }

    /// Finest wave model covering `point`; regional grids win over global.
    pub fn wave_model_for(point: &GeoPoint) -> Option<NoaaModel> {
        Self::ALL
            .into_iter()
            .filter(|m| m.grid().is_wave_model && m.contains(point))
            .min_by(|a, b| a.grid().location_resolution.total_cmp(&b.grid().location_resolution))
    }
}

/// Identifies one model run that contributed to a forecast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelRun {
    pub model: NoaaModel,
    /// Run label, e.g. `"20240611 12z"`
    pub run: String,
    /// Grid point the data was extracted at
    pub location: GeoPoint,
}
