//! Polar stereographic projections used by RADOLAN grids.
//!
//! Both variants are north polar stereographic, true at 60°N and centered on
//! the 10°E meridian. They return raw plane coordinates in kilometers with
//! x growing eastward and y growing southward, so that the top-left corner of
//! a grid has the smallest coordinates.
//!
//! - [`Spherical`]: sphere of radius 6370.04 km, used by all grids before
//!   format version 5.
//! - [`Wgs84Stereographic`]: WGS84 ellipsoid, used by the DE1200 grid from
//!   format version 5 on.
//!
//! Equivalent PROJ definition of the ellipsoidal variant:
//! `+proj=stere +lat_0=90 +lat_ts=60 +lon_0=10 +a=6378137 +b=6356752.3142451802
//!  +x_0=543196.83521776402 +y_0=3622588.861931001`

use std::f64::consts::PI;

/// Raw projection from geographic to plane coordinates in km.
pub trait ForwardProjection {
    /// Project latitude/longitude (degrees) onto the plane (km).
    fn project_km(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64);
}

/// Polar stereographic projection on a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Earth radius in km
    pub earth_radius: f64,
    /// Latitude of true scale in radians
    pub phi0: f64,
    /// Central meridian in radians
    pub lambda0: f64,
}

impl Spherical {
    pub const EARTH_RADIUS_KM: f64 = 6370.04;
    pub const TRUE_LATITUDE: f64 = 60.0;
    pub const CENTRAL_MERIDIAN: f64 = 10.0;

    /// Projection parameters of the RADOLAN sphere.
    pub fn radolan() -> Self {
        Self {
            earth_radius: Self::EARTH_RADIUS_KM,
            phi0: rad(Self::TRUE_LATITUDE),
            lambda0: rad(Self::CENTRAL_MERIDIAN),
        }
    }
}

impl Default for Spherical {
    fn default() -> Self {
        Self::radolan()
    }
}

impl ForwardProjection for Spherical {
    fn project_km(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let phi = rad(lat_deg);
        let lambda = rad(lon_deg);

        let m = (1.0 + self.phi0.sin()) / (1.0 + phi.sin());
        let x = self.earth_radius * m * phi.cos() * (lambda - self.lambda0).sin();
        let y = self.earth_radius * m * phi.cos() * (lambda - self.lambda0).cos();

        (x, y)
    }
}

/// Polar stereographic projection on the WGS84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wgs84Stereographic {
    /// Central meridian in radians
    pub lon0: f64,
    /// First eccentricity of the ellipsoid
    pub ecc: f64,
    /// Scale constant (meters)
    pub k0: f64,
    /// False easting (meters)
    pub x0: f64,
    /// False northing (meters)
    pub y0: f64,
    /// Projection units per km
    pub scale: f64,
}

impl Wgs84Stereographic {
    /// Parameters of the DE1200 grid.
    pub fn de1200() -> Self {
        Self {
            lon0: rad(10.0),
            ecc: 0.08181919084262032,
            k0: 11862667.042661695,
            x0: 543196.83521776402,
            y0: 3622588.861931001,
            scale: 1000.0,
        }
    }
}

impl Default for Wgs84Stereographic {
    fn default() -> Self {
        Self::de1200()
    }
}

impl ForwardProjection for Wgs84Stereographic {
    fn project_km(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let lat = rad(lat_deg);
        let lon = rad(lon_deg);

        let sin_lat = lat.sin();
        let s = self.k0 * (0.5 * (PI / 2.0 - lat)).tan()
            / ((1.0 - self.ecc * sin_lat) / (1.0 + self.ecc * sin_lat)).powf(0.5 * self.ecc);

        let x = self.x0 + s * (lon - self.lon0).sin();
        let y = self.y0 - s * (lon - self.lon0).cos();

        // northing points up, the grid counts rows downwards
        (x / self.scale, y / -self.scale)
    }
}

/// The projection formula selected for a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projector {
    Spherical,
    Wgs84,
}

impl Projector {
    pub fn name(&self) -> &'static str {
        match self {
            Projector::Spherical => "spherical",
            Projector::Wgs84 => "wgs84",
        }
    }
}

impl ForwardProjection for Projector {
    fn project_km(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        match self {
            Projector::Spherical => Spherical::radolan().project_km(lat_deg, lon_deg),
            Projector::Wgs84 => Wgs84Stereographic::de1200().project_km(lat_deg, lon_deg),
        }
    }
}

#[inline]
fn rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}
