//! Conversions between raw reflectivity, dBZ and precipitation rates.
//!
//! Reflectivity products (PG, FX, RX, ...) carry RVP-6 values, which map
//! linearly onto dBZ. The precipitation rate follows from the reflectivity
//! factor `Z = 10^(dBZ / 10)` via a Z-R relation `Z = a * R^b`.

use serde::{Deserialize, Serialize};

/// Convert a raw RVP-6 value to dBZ.
pub fn rvp6_to_dbz(rvp: f64) -> f64 {
    rvp / 2.0 - 32.5
}

/// Convert dBZ to a raw RVP-6 value.
pub fn dbz_to_rvp6(dbz: f64) -> f64 {
    (dbz + 32.5) * 2.0
}

/// Z-R relation `Z = a * R^b` with R in mm/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZrRelation {
    pub a: f64,
    pub b: f64,
}

impl ZrRelation {
    /// Relation used for the operational RADOLAN products.
    pub const RADOLAN: ZrRelation = ZrRelation { a: 256.0, b: 1.42 };

    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Precipitation rate in mm/h for a reflectivity in dBZ.
    pub fn rate(&self, dbz: f64) -> f64 {
        (10f64.powf(dbz / 10.0) / self.a).powf(1.0 / self.b)
    }

    /// Reflectivity in dBZ for a precipitation rate in mm/h.
    pub fn reflectivity(&self, rate: f64) -> f64 {
        10.0 * (self.a * rate.powf(self.b)).log10()
    }
}

impl Default for ZrRelation {
    fn default() -> Self {
        Self::RADOLAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rvp6_conversion() {
        let cases = [
            (0.0, -32.5, 0.0001),
            (65.0, 0.0, 0.0201),
            (100.0, 17.5, 0.3439),
            (200.0, 67.5, 1141.7670),
        ];

        let zr = ZrRelation::default();
        for (rvp, dbz, rate) in cases {
            assert!((rvp6_to_dbz(rvp) - dbz).abs() < 1e-9, "rvp {}", rvp);
            assert!((dbz_to_rvp6(dbz) - rvp).abs() < 1e-9, "dbz {}", dbz);

            let got = zr.rate(dbz);
            assert!((got - rate).abs() < 1e-4, "rate for {} dBZ: {}", dbz, got);
        }
    }

    #[test]
    fn test_reflectivity_inverts_rate() {
        let zr = ZrRelation::RADOLAN;
        for dbz in [-10.0, 0.0, 17.5, 42.0, 67.5] {
            let back = zr.reflectivity(zr.rate(dbz));
            assert!((back - dbz).abs() < 1e-9, "{} -> {}", dbz, back);
        }
    }
}
