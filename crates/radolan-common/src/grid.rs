//! Known RADOLAN grid geometries.
//!
//! A composite does not declare its geographic footprint. The footprint is
//! inferred from the layer dimensions: both edges are halved while they stay
//! even, and the reduced pair is compared against the reduced pairs of the
//! known grids. A 450x450 composite therefore lands on the 900x900 national
//! grid with a resolution of 2 km/px.

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees (north, east).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Top-left and bottom-right corner of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerPoints {
    pub top_left: GeoPoint,
    pub bottom_right: GeoPoint,
}

/// Grid geometries with known corner coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridKind {
    /// 900 km x 900 km
    National,
    /// 920 km x 920 km (picture products such as PG)
    NationalPicture,
    /// 900 km x 1100 km
    ExtendedNational,
    /// 1100 km x 1200 km (DE1200)
    Wide,
    /// 1400 km x 1500 km
    MiddleEuropean,
}

/// First format version whose wide grid is defined on the WGS84 ellipsoid.
pub const WGS84_FORMAT_VERSION: i64 = 5;

impl GridKind {
    /// Detection order; the first match wins.
    pub const ALL: [GridKind; 5] = [
        GridKind::National,
        GridKind::NationalPicture,
        GridKind::ExtendedNational,
        GridKind::Wide,
        GridKind::MiddleEuropean,
    ];

    /// Full resolution dimensions as (width, height).
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            GridKind::National => (900, 900),
            GridKind::NationalPicture => (920, 920),
            GridKind::ExtendedNational => (900, 1100),
            GridKind::Wide => (1100, 1200),
            GridKind::MiddleEuropean => (1400, 1500),
        }
    }

    /// Identify the grid of a layer with the given dimensions.
    pub fn detect(width: usize, height: usize) -> Option<GridKind> {
        let reduced = min_res(width, height);
        if reduced.0 == 0 || reduced.1 == 0 {
            return None;
        }
        GridKind::ALL.into_iter().find(|grid| {
            let (w, h) = grid.dimensions();
            min_res(w, h) == reduced
        })
    }

    /// Whether the grid is defined on the WGS84 ellipsoid for this format version.
    pub fn uses_wgs84(&self, format_version: i64) -> bool {
        *self == GridKind::Wide && format_version >= WGS84_FORMAT_VERSION
    }

    /// Corner coordinates of the grid.
    ///
    /// Only the wide grid depends on the format version.
    pub fn corners(&self, format_version: i64) -> CornerPoints {
        let (top_left, bottom_right) = match self {
            GridKind::National => (GeoPoint::new(54.5877, 2.0715), GeoPoint::new(47.0705, 14.6209)),
            GridKind::NationalPicture => (
                GeoPoint::new(54.66218275, 1.900684377),
                GeoPoint::new(46.98044293, 14.73300934),
            ),
            GridKind::ExtendedNational => {
                (GeoPoint::new(55.5482, 3.0889), GeoPoint::new(46.1827, 15.4801))
            }
            GridKind::Wide if self.uses_wgs84(format_version) => (
                GeoPoint::new(55.86208711, 1.463301510),
                GeoPoint::new(45.68460578, 16.58086935),
            ),
            GridKind::Wide => (
                GeoPoint::new(55.86584289, 1.435612143),
                GeoPoint::new(45.68358331, 16.60186543),
            ),
            GridKind::MiddleEuropean => {
                (GeoPoint::new(56.5423, -0.8654), GeoPoint::new(43.8736, 18.2536))
            }
        };
        CornerPoints {
            top_left,
            bottom_right,
        }
    }
}

/// Halve both edges while both are even.
pub fn min_res(width: usize, height: usize) -> (usize, usize) {
    let (mut w, mut h) = (width, height);
    if w == 0 || h == 0 {
        return (w, h);
    }
    while w & 1 == 0 && h & 1 == 0 {
        w >>= 1;
        h >>= 1;
    }
    (w, h)
}
