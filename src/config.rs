//! # Configuration Management
//!
//! Loads the beach geometry, default buoy station and display preferences from
//! `surf-config.toml`. A missing or invalid file is never fatal: the defaults
//! (Narragansett Town Beach, RI with NDBC 44097) are used instead.

use crate::forecast::Beach;
use crate::location::GeoPoint;
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "surf-config.toml";

/// Application configuration loaded from surf-config.toml
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub beach: BeachConfig,
    pub buoy: BuoyConfig,
    pub display: DisplayConfig,
}

/// Target shoreline
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BeachConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Direction the beach faces, degrees
    pub angle: f64,
    /// Nearshore gradient (rise over run)
    pub slope: f64,
}

/// NDBC station used for observed conditions
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BuoyConfig {
    pub station_id: String,
    /// Maximum rows ingested per table report; unlimited when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_limit: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub units: UnitSystem,
    /// Height of the ASCII breaking-height chart
    pub chart_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            beach: BeachConfig {
                name: "Narragansett Town Beach, RI".to_string(),
                latitude: 41.4302,
                longitude: -71.4543,
                angle: 145.0,
                slope: 0.02,
            },
            buoy: BuoyConfig {
                station_id: "44097".to_string(),
                data_limit: Some(48),
            },
            display: DisplayConfig {
                units: UnitSystem::English,
                chart_rows: 12,
            },
        }
    }
}

impl Config {
    /// Load configuration from surf-config.toml, falling back to defaults
    pub fn load() -> Self {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from `path`, falling back to defaults
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!(beach = %config.beach.name, path = %path.display(), "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no config file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!(path = %path.as_ref().display(), "configuration saved");
        Ok(())
    }

    /// Beach geometry for forecast synthesis.
    pub fn beach(&self) -> Beach {
        Beach {
            location: GeoPoint::new(self.beach.latitude, self.beach.longitude, self.beach.name.clone()),
            angle: self.beach.angle,
            slope: self.beach.slope,
        }
    }
}
