//! # Geographic Points
//!
//! A latitude/longitude/elevation triple with a name. Owning entities (beaches,
//! buoys, model runs) hold a `GeoPoint` by value and call into it for the few
//! geometry helpers they need.
//!
//! Longitudes show up in two conventions across the NOAA feeds: model grids use
//! degrees east in `[0, 360)`, while buoy metadata and most user input use
//! `(-180, 180]`. Both are accepted; the helpers below normalize on demand.

use serde::{Deserialize, Serialize};

/// A named point on the globe.
///
/// Elevation is in meters and signed: negative values are depth below the
/// surface, which is how wave-model grid points report the water depth used
/// for shoaling.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Degrees north
    pub latitude: f64,
    /// Degrees east, either convention
    pub longitude: f64,
    /// Meters, negative underwater
    #[serde(default)]
    pub elevation: f64,
    /// Human-readable name
    #[serde(default)]
    pub name: String,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        GeoPoint {
            latitude,
            longitude,
            elevation: 0.0,
            name: name.into(),
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Longitude mapped into `(-180, 180]`.
    pub fn adjusted_longitude(&self) -> f64 {
        let lon = self.normalized_longitude();
        if lon > 180.0 {
            lon - 360.0
        } else {
            lon
        }
    }

    /// Longitude mapped into `[0, 360)`.
    pub fn normalized_longitude(&self) -> f64 {
        self.longitude.rem_euclid(360.0)
    }

    /// Absolute latitude and longitude separation in degrees.
    ///
    /// The longitude separation goes the short way around, so points either
    /// side of the antimeridian are close.
    pub fn component_distance_to(&self, other: &GeoPoint) -> (f64, f64) {
        let lat_dist = (self.latitude - other.latitude).abs();
        let raw_lon = (self.normalized_longitude() - other.normalized_longitude()).abs();
        let lon_dist = raw_lon.min(360.0 - raw_lon);
        (lat_dist, lon_dist)
    }

    /// Planar distance in degrees. Good enough for picking the nearest grid
    /// point or buoy, not for navigation.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let (lat_dist, lon_dist) = self.component_distance_to(other);
        lat_dist.hypot(lon_dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_conventions_round_trip() {
        let block_island = GeoPoint::new(41.17, -71.58, "Block Island");
        assert!((block_island.normalized_longitude() - 288.42).abs() < 1e-9);
        assert!((block_island.adjusted_longitude() + 71.58).abs() < 1e-9);

        let east = GeoPoint::new(41.17, 288.42, "");
        assert!((east.adjusted_longitude() + 71.58).abs() < 1e-9);
    }

    #[test]
    fn distance_wraps_antimeridian() {
        let a = GeoPoint::new(0.0, 179.5, "a");
        let b = GeoPoint::new(0.0, -179.5, "b");
        let (lat, lon) = a.component_distance_to(&b);
        assert_eq!(lat, 0.0);
        assert!((lon - 1.0).abs() < 1e-9);
    }

    #[test]
    fn distance_is_planar_hypotenuse() {
        let a = GeoPoint::new(40.0, 280.0, "a");
        let b = GeoPoint::new(43.0, 284.0, "b");
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn elevation_defaults_to_surface() {
        let point = GeoPoint::new(1.0, 2.0, "p");
        assert_eq!(point.elevation, 0.0);
        assert_eq!(point.with_elevation(-30.0).elevation, -30.0);
    }
}
