//! Physical units of decoded composite values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical unit of the values stored in a composite.
///
/// The unit is a property of the product, never of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Product is not listed in the unit catalog.
    #[default]
    Unknown,
    /// Accumulated precipitation in mm per interval.
    Millimeter,
    /// Reflectivity in decibel relative to Z.
    Dbz,
    /// Distance or height in km (echo tops).
    Kilometer,
    /// Radial velocity in m/s.
    MetersPerSecond,
}

impl Unit {
    /// Short symbol used in legends and logs.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Unknown => "?",
            Unit::Millimeter => "mm",
            Unit::Dbz => "dBZ",
            Unit::Kilometer => "km",
            Unit::MetersPerSecond => "m/s",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Unit::Unknown
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
