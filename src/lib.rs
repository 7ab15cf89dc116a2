//! # Surf Forecast Core Library
//!
//! Turns NOAA wave-model output and NDBC buoy reports into surf conditions for a
//! specific beach.
//!
//! ## Forecast synthesis
//! A wave model reports up to three swell components per time step. Each one
//! is refracted and shoaled to the beach (see [`swell`] and [`waves`]), the
//! components are ranked by breaking height, and wind from an optional wind
//! model is attached (falling back to the wave model's surface wind per step).
//! Entry point: [`forecast::synthesize`].
//!
//! ## Buoy observations
//! NDBC publishes three report shapes per station at different cadences.
//! [`ndbc`] parses them, [`buoy_item`] merges them field by field into one
//! observation per timestamp, and [`buoy::Buoy`] owns the resulting series and
//! answers nearest-in-time queries.
//!
//! ## Units
//! Physics runs in metric. Every container carries its [`units::UnitSystem`]
//! and can be converted in place; conversion round-trips within floating-point
//! tolerance.
//!
//! # Example
//! ```
//! use surf_forecast_lib::forecast::{synthesize, Beach, WaveForecast, WaveForecastItem};
//! use surf_forecast_lib::location::GeoPoint;
//! use surf_forecast_lib::model::{ModelRun, NoaaModel};
//! use surf_forecast_lib::units::UnitSystem;
//!
//! let beach = Beach {
//!     location: GeoPoint::new(41.43, -71.45, "Narragansett"),
//!     angle: 180.0,
//!     slope: 0.02,
//! };
//! let waves = WaveForecast {
//!     model: ModelRun {
//!         model: NoaaModel::WaveWatchEastCoast,
//!         run: "20240611 00z".into(),
//!         location: GeoPoint::new(41.33, 288.67, "grid").with_elevation(-5.0),
//!     },
//!     units: UnitSystem::Metric,
//!     forecast_data: vec![WaveForecastItem {
//!         primary_swell_wave_height: 2.0,
//!         primary_swell_period: 10.0,
//!         primary_swell_direction: 200.0,
//!         ..Default::default()
//!     }],
//! };
//!
//! let forecast = synthesize(&beach, &waves, None).unwrap();
//! assert!(forecast.forecast_data[0].maximum_breaking_height > 0.0);
//! assert_eq!(forecast.forecast_data[0].wind_gust_speed, None);
//! ```

pub mod buoy;
pub mod buoy_item;
pub mod compass;
pub mod config;
pub mod fallback;
pub mod forecast;
pub mod location;
pub mod model;
pub mod ndbc;
pub mod renderer;
pub mod swell;
pub mod units;
pub mod waves;

pub use buoy::{find_nearest, Buoy};
pub use buoy_item::{BuoyItem, ReportShape};
pub use forecast::{synthesize, Beach, SurfForecast, SurfForecastItem};
pub use location::GeoPoint;
pub use swell::Swell;
pub use units::UnitSystem;
