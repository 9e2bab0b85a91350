//! Coordinate transformations for RADOLAN composites.
//!
//! Implements the polar stereographic projections from scratch and the
//! calibration that maps them onto a composite's pixel grid.

pub mod calibration;
pub mod polar;

pub use calibration::Calibration;
pub use polar::{ForwardProjection, Projector, Spherical, Wgs84Stereographic};
