//! # Swell Components
//!
//! A swell component is one directional wave train: height, period and the
//! direction it comes from. The wave model reports up to three per time step
//! (primary swell, secondary swell, wind swell) and each is localized to the
//! beach independently.
//!
//! ## Breaking height estimate
//!
//! 1. **Exposure**: the incident angle between the swell and the beach normal.
//!    Swells at or beyond 90° are shadowed and contribute nothing.
//! 2. **Refraction + shoaling** at the reference depth (the wave-model grid
//!    point) give a nearshore height, capped by the slope-dependent breaker
//!    index so it never exceeds what that depth can support.
//! 3. **Breaking height** from the refracted deep-water height and beach slope.
//!
//! The two heights from steps 2 and 3 bracket the range reported to the surfer.
//! Degenerate inputs (no height, no period, no water, no slope, or any
//! non-finite value) produce `(0.0, 0.0)` instead of an error so the ranking
//! step downstream always sees a total order.

use crate::compass::degree_to_direction;
use crate::units::{Quantity, UnitConvertible, UnitSystem};
use crate::waves;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Swell {
    /// Open-water significant height
    pub wave_height: f64,
    /// Seconds
    pub period: f64,
    /// Degrees, direction the swell is coming from
    pub direction: f64,
    /// Cached 16-point compass name for `direction`
    pub compass_direction: String,
}

fn usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Swell {
    pub fn new(wave_height: f64, period: f64, direction: f64) -> Self {
        Swell {
            wave_height,
            period,
            direction,
            compass_direction: degree_to_direction(direction).to_string(),
        }
    }

    /// Estimated `(minimum, maximum)` breaking height in meters at a beach.
    ///
    /// `beach_angle` is the direction the beach faces in degrees,
    /// `elevation` the signed elevation of the reference point (negative
    /// underwater) and `beach_slope` the dimensionless nearshore gradient.
    /// Inputs must be metric.
    ///
    /// Always returns finite values with `0 <= min <= max`.
    pub fn breaking_wave_heights(&self, beach_angle: f64, elevation: f64, beach_slope: f64) -> (f64, f64) {
        let depth = -elevation;
        if !usable(self.wave_height)
            || !usable(self.period)
            || !usable(depth)
            || !usable(beach_slope)
            || !self.direction.is_finite()
            || !beach_angle.is_finite()
        {
            return (0.0, 0.0);
        }

        let incident = waves::incident_angle(self.direction, beach_angle);
        if incident >= waves::SHADOW_CUTOFF_DEG {
            return (0.0, 0.0);
        }

        let depth = depth.max(waves::MIN_DEPTH);
        let refraction = waves::refraction_coefficient(self.period, depth, incident);
        let shoaling = waves::shoaling_coefficient(self.period, depth);

        let nearshore = self.wave_height * refraction * shoaling;
        let depth_limit = waves::breaker_index(beach_slope, nearshore, self.period) * depth;
        let nearshore = nearshore.min(depth_limit);

        let breaking = waves::breaking_height(self.wave_height * refraction, self.period, beach_slope);

        let (min, max) = if nearshore <= breaking {
            (nearshore, breaking)
        } else {
            (breaking, nearshore)
        };
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 0.0);
        }
        (min.max(0.0), max.max(0.0))
    }
}

impl UnitConvertible for Swell {
    fn convert_units(&mut self, from: UnitSystem, to: UnitSystem) {
        self.wave_height = from.convert(to, Quantity::Length, self.wave_height);
    }
}
