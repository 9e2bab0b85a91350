//! Static per-product lookup tables.
//!
//! Local single-sweep products carry no dimensions in their header, and no
//! product declares its physical unit. Both are looked up here by product code.
//! A few products also store their interval in units of ten minutes.

use std::collections::HashMap;
use std::sync::OnceLock;

use radolan_common::Unit;

/// Geometry of a catalog-dimensioned product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductSpec {
    /// Plane dimensions as stored on disk
    pub plain_width: usize,
    pub plain_height: usize,
    /// Dimensions of one layer
    pub layer_width: usize,
    pub layer_height: usize,
    /// Nominal resolution in km/px
    pub res_x: f64,
    pub res_y: f64,
}

impl ProductSpec {
    pub const fn new(
        plain: (usize, usize),
        layer: (usize, usize),
        resolution: (f64, f64),
    ) -> Self {
        Self {
            plain_width: plain.0,
            plain_height: plain.1,
            layer_width: layer.0,
            layer_height: layer.1,
            res_x: resolution.0,
            res_y: resolution.1,
        }
    }
}

/// Product code lookup tables.
///
/// [`ProductCatalog::builtin`] holds the tables for the operational DWD
/// products. Custom catalogs can be assembled with the `add_*` methods.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    dimensions: HashMap<String, ProductSpec>,
    units: HashMap<String, Unit>,
    interval_multipliers: HashMap<String, i64>,
}

const LOCAL_PICTURE: ProductSpec = ProductSpec::new((200, 224), (200, 200), (1.0, 1.0));
const LOCAL_PICTURE_COARSE: ProductSpec = ProductSpec::new((200, 224), (200, 200), (2.0, 2.0));
const LOCAL_VOLUME: ProductSpec = ProductSpec::new((200, 2400), (200, 200), (1.0, 1.0));
const LOCAL_VOLUME_COARSE: ProductSpec = ProductSpec::new((200, 2400), (200, 200), (2.0, 2.0));

const DIMENSIONS: &[(&str, ProductSpec)] = &[
    ("OL", LOCAL_PICTURE_COARSE), // reflectivity, no clutter detection
    ("OX", LOCAL_PICTURE),        // reflectivity, no clutter detection
    ("PD", LOCAL_PICTURE),        // radial velocity
    ("PE", LOCAL_PICTURE_COARSE), // echo top
    ("PF", LOCAL_PICTURE),        // reflectivity, 15 classes
    ("PH", LOCAL_PICTURE),        // accumulated rainfall
    ("PL", LOCAL_PICTURE_COARSE), // reflectivity
    ("PM", LOCAL_PICTURE_COARSE), // max. reflectivity
    ("PR", LOCAL_PICTURE),        // radial velocity
    ("PU", LOCAL_VOLUME),         // 3D radial velocity
    ("PV", LOCAL_PICTURE),        // radial velocity
    ("PX", LOCAL_PICTURE),        // reflectivity, 6 classes
    ("PY", LOCAL_PICTURE),        // accumulated rainfall
    ("PZ", LOCAL_VOLUME_COARSE),  // 3D reflectivity CAPPI
];

const UNITS: &[(&str, Unit)] = &[
    // reflectivity
    ("PG", Unit::Dbz),
    ("FX", Unit::Dbz),
    ("FZ", Unit::Dbz),
    ("RX", Unit::Dbz),
    ("EX", Unit::Dbz),
    ("WX", Unit::Dbz),
    ("WN", Unit::Dbz),
    ("PF", Unit::Dbz),
    ("PL", Unit::Dbz),
    ("PM", Unit::Dbz),
    ("PX", Unit::Dbz),
    ("OL", Unit::Dbz),
    ("OX", Unit::Dbz),
    ("PZ", Unit::Dbz),
    // accumulated precipitation
    ("RW", Unit::Millimeter),
    ("RY", Unit::Millimeter),
    ("RH", Unit::Millimeter),
    ("RB", Unit::Millimeter),
    ("RQ", Unit::Millimeter),
    ("SF", Unit::Millimeter),
    ("SH", Unit::Millimeter),
    ("SQ", Unit::Millimeter),
    ("YW", Unit::Millimeter),
    ("W1", Unit::Millimeter),
    ("W2", Unit::Millimeter),
    ("W3", Unit::Millimeter),
    ("W4", Unit::Millimeter),
    ("PH", Unit::Millimeter),
    ("PY", Unit::Millimeter),
    // echo top
    ("PE", Unit::Kilometer),
    // radial velocity
    ("PD", Unit::MetersPerSecond),
    ("PR", Unit::MetersPerSecond),
    ("PU", Unit::MetersPerSecond),
    ("PV", Unit::MetersPerSecond),
];

/// Multi-week accumulations count their interval in steps of ten minutes.
const INTERVAL_MULTIPLIERS: &[(&str, i64)] = &[("W1", 10), ("W2", 10), ("W3", 10), ("W4", 10)];

impl ProductCatalog {
    /// Create empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables for the operational products, built on first use.
    pub fn builtin() -> &'static ProductCatalog {
        static BUILTIN: OnceLock<ProductCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut catalog = ProductCatalog::new();
            for (product, spec) in DIMENSIONS {
                catalog.add_dimensions(product, *spec);
            }
            for (product, unit) in UNITS {
                catalog.add_unit(product, *unit);
            }
            for (product, multiplier) in INTERVAL_MULTIPLIERS {
                catalog.add_interval_multiplier(product, *multiplier);
            }
            catalog
        })
    }

    pub fn add_dimensions(&mut self, product: &str, spec: ProductSpec) {
        self.dimensions.insert(product.to_string(), spec);
    }

    pub fn add_unit(&mut self, product: &str, unit: Unit) {
        self.units.insert(product.to_string(), unit);
    }

    pub fn add_interval_multiplier(&mut self, product: &str, multiplier: i64) {
        self.interval_multipliers
            .insert(product.to_string(), multiplier);
    }

    /// Catalog geometry, `None` for products that declare their dimensions.
    pub fn dimensions(&self, product: &str) -> Option<&ProductSpec> {
        self.dimensions.get(product)
    }

    /// Physical unit, `None` for unknown products.
    pub fn unit(&self, product: &str) -> Option<Unit> {
        self.units.get(product).copied()
    }

    /// Factor applied to the raw interval minutes (1 for most products).
    pub fn interval_multiplier(&self, product: &str) -> i64 {
        self.interval_multipliers.get(product).copied().unwrap_or(1)
    }

    /// Check if the tables are empty
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty() && self.units.is_empty() && self.interval_multipliers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dimensions() {
        let catalog = ProductCatalog::builtin();

        let pf = catalog.dimensions("PF").unwrap();
        assert_eq!((pf.plain_width, pf.plain_height), (200, 224));
        assert_eq!((pf.layer_width, pf.layer_height), (200, 200));
        assert_eq!((pf.res_x, pf.res_y), (1.0, 1.0));

        let pz = catalog.dimensions("PZ").unwrap();
        assert_eq!((pz.plain_width, pz.plain_height), (200, 2400));
        assert_eq!((pz.res_x, pz.res_y), (2.0, 2.0));

        // composites declare their dimensions in the header
        assert!(catalog.dimensions("PG").is_none());
        assert!(catalog.dimensions("RW").is_none());
    }

    #[test]
    fn test_builtin_units() {
        let catalog = ProductCatalog::builtin();
        assert_eq!(catalog.unit("FZ"), Some(Unit::Dbz));
        assert_eq!(catalog.unit("RW"), Some(Unit::Millimeter));
        assert_eq!(catalog.unit("PE"), Some(Unit::Kilometer));
        assert_eq!(catalog.unit("PR"), Some(Unit::MetersPerSecond));
        assert_eq!(catalog.unit("XX"), None);
    }

    #[test]
    fn test_interval_multiplier() {
        let catalog = ProductCatalog::builtin();
        for product in ["W1", "W2", "W3", "W4"] {
            assert_eq!(catalog.interval_multiplier(product), 10);
        }
        assert_eq!(catalog.interval_multiplier("FZ"), 1);
        assert_eq!(catalog.interval_multiplier("W5"), 1);
    }

    #[test]
    fn test_custom_catalog() {
        let mut catalog = ProductCatalog::new();
        assert!(catalog.is_empty());

        catalog.add_unit("ZZ", Unit::Kilometer);
        catalog.add_dimensions("ZZ", ProductSpec::new((10, 20), (10, 10), (4.0, 4.0)));
        catalog.add_interval_multiplier("ZZ", 60);

        assert!(!catalog.is_empty());
        assert_eq!(catalog.unit("ZZ"), Some(Unit::Kilometer));
        assert_eq!(catalog.dimensions("ZZ").map(|s| s.layer_height), Some(10));
        assert_eq!(catalog.interval_multiplier("ZZ"), 60);
    }
}
