//! Common types shared by the RADOLAN decoder crates.

pub mod error;
pub mod grid;
pub mod time;
pub mod unit;

pub use error::{RadolanError, RadolanResult};
pub use grid::{min_res, CornerPoints, GeoPoint, GridKind, WGS84_FORMAT_VERSION};
pub use time::parse_capture_time;
pub use unit::Unit;
