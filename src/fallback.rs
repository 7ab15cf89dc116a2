//! # Wind Fallback
//!
//! The wind model is optional. When it has no entry for a time step (absent,
//! empty, or simply shorter than the wave series) the wave model's own surface
//! wind estimate stands in for that step.
//!
//! The wave model does not forecast gusts, so the fallback never reports one.
//! Downstream the missing gust is an explicit `None`, serialized as `-1`,
//! never a measured zero.

use crate::forecast::{WaveForecastItem, WindConditions};

/// Wind conditions taken from the wave model's surface wind for one step.
pub fn surface_wind(record: &WaveForecastItem) -> WindConditions {
    WindConditions {
        speed: record.surface_wind_speed,
        gust: None,
        direction: record.surface_wind_direction,
    }
}
