//! # Unit Systems
//!
//! Every physical value in the crate is tagged, at the container level, with one
//! of two unit systems. Conversion is component-wise and linear, so converting
//! there and back reproduces the original values to floating-point precision.
//!
//! | Quantity    | Metric | English |
//! |-------------|--------|---------|
//! | Length      | m      | ft      |
//! | Speed       | m/s    | mph     |
//! | Temperature | °C     | °F      |
//! | Pressure    | hPa    | inHg    |
//!
//! Periods (seconds) and directions (degrees) are unit-system independent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FEET_PER_METER: f64 = 3.280_839_895;
const MPH_PER_METER_PER_SECOND: f64 = 2.236_936_292_054;
const INHG_PER_HPA: f64 = 0.029_529_983_071;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    English,
}

/// The kinds of quantity that change value between unit systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    Length,
    Speed,
    Temperature,
    Pressure,
}

impl UnitSystem {
    /// Convert `value` of kind `quantity` from `self` into `target`.
    ///
    /// Identity when both systems match.
    pub fn convert(self, target: UnitSystem, quantity: Quantity, value: f64) -> f64 {
        match (self, target) {
            (UnitSystem::Metric, UnitSystem::English) => match quantity {
                Quantity::Length => value * FEET_PER_METER,
                Quantity::Speed => value * MPH_PER_METER_PER_SECOND,
                Quantity::Temperature => value * 1.8 + 32.0,
                Quantity::Pressure => value * INHG_PER_HPA,
            },
            (UnitSystem::English, UnitSystem::Metric) => match quantity {
                Quantity::Length => value / FEET_PER_METER,
                Quantity::Speed => value / MPH_PER_METER_PER_SECOND,
                Quantity::Temperature => (value - 32.0) / 1.8,
                Quantity::Pressure => value / INHG_PER_HPA,
            },
            _ => value,
        }
    }

    /// [`UnitSystem::convert`] lifted over a possibly-missing value.
    pub fn convert_opt(self, target: UnitSystem, quantity: Quantity, value: Option<f64>) -> Option<f64> {
        value.map(|v| self.convert(target, quantity, v))
    }

    pub fn length_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::English => "ft",
        }
    }

    pub fn speed_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s",
            UnitSystem::English => "mph",
        }
    }

    pub fn temperature_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::English => "°F",
        }
    }

    pub fn pressure_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "hPa",
            UnitSystem::English => "inHg",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::English => write!(f, "english"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "english" | "imperial" | "us" => Ok(UnitSystem::English),
            other => Err(format!("unknown unit system '{other}' (expected metric or english)")),
        }
    }
}

/// A record whose numeric fields can be rewritten into another unit system.
///
/// Records do not know their own unit system; the owning container does, and
/// passes both ends of the conversion in.
pub trait UnitConvertible {
    fn convert_units(&mut self, from: UnitSystem, to: UnitSystem);
}
