//! Per-composite calibration of the forward projection.
//!
//! The raw projections produce kilometers relative to the pole. A composite
//! needs fractional pixel indices relative to its own top-left corner, so the
//! known corners of the detected grid are projected once:
//!
//! 1. with a provisional resolution of 1 km/px and no offset, the top-left
//!    corner yields the offset;
//! 2. with that offset applied, the bottom-right corner divided by the layer
//!    dimensions yields the real resolution in km/px.

use radolan_common::{GeoPoint, GridKind};

use crate::polar::{ForwardProjection, Projector};

/// Calibrated projection into the pixel space of one composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    grid: Option<GridKind>,
    projector: Projector,
    offset_x: f64,
    offset_y: f64,
    res_x: f64,
    res_y: f64,
}

impl Calibration {
    /// Calibration of a composite whose grid could not be identified.
    ///
    /// Every query returns NaN.
    pub fn unavailable() -> Self {
        Self {
            grid: None,
            projector: Projector::Spherical,
            offset_x: f64::NAN,
            offset_y: f64::NAN,
            res_x: f64::NAN,
            res_y: f64::NAN,
        }
    }

    /// Detect the grid of a `width` x `height` layer and calibrate for it.
    pub fn detect(width: usize, height: usize, format_version: i64) -> Self {
        match GridKind::detect(width, height) {
            Some(grid) => Self::for_grid(grid, width, height, format_version),
            None => Self::unavailable(),
        }
    }

    /// Calibrate a `width` x `height` layer covering `grid`.
    pub fn for_grid(grid: GridKind, width: usize, height: usize, format_version: i64) -> Self {
        if width == 0 || height == 0 {
            return Self::unavailable();
        }

        let projector = if grid.uses_wgs84(format_version) {
            Projector::Wgs84
        } else {
            Projector::Spherical
        };
        let corners = grid.corners(format_version);

        let mut calibration = Self {
            grid: Some(grid),
            projector,
            offset_x: 0.0,
            offset_y: 0.0,
            res_x: 1.0,
            res_y: 1.0,
        };

        let (offset_x, offset_y) = calibration.project_point(corners.top_left);
        calibration.offset_x = offset_x;
        calibration.offset_y = offset_y;

        let (edge_x, edge_y) = calibration.project_point(corners.bottom_right);
        calibration.res_x = edge_x / width as f64;
        calibration.res_y = edge_y / height as f64;

        calibration
    }

    /// Project geographic coordinates (degrees north, degrees east) to
    /// fractional pixel indices. NaN when no projection is available.
    pub fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        if !self.is_available() {
            return (f64::NAN, f64::NAN);
        }

        let (x, y) = self.projector.project_km(lat, lon);
        ((x - self.offset_x) / self.res_x, (y - self.offset_y) / self.res_y)
    }

    pub fn project_point(&self, point: GeoPoint) -> (f64, f64) {
        self.project(point.lat, point.lon)
    }

    pub fn is_available(&self) -> bool {
        self.grid.is_some()
    }

    pub fn grid(&self) -> Option<GridKind> {
        self.grid
    }

    /// Selected formula, `None` when no projection is available.
    pub fn projector(&self) -> Option<Projector> {
        self.grid.map(|_| self.projector)
    }

    /// Resolution in km/px (x, y).
    pub fn resolution(&self) -> (f64, f64) {
        (self.res_x, self.res_y)
    }

    /// Offset of the top-left corner in raw projection km (x, y).
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }
}
