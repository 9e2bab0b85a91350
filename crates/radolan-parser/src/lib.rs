//! Decoder for DWD RADOLAN/RADVOR radar composites.
//!
//! A composite file is an ASCII header terminated by ETX followed by a binary
//! payload in one of three layouts. Decoding runs header parsing, encoding
//! classification, payload decoding, layer arrangement and projection
//! calibration in that order:
//!
//! ```ignore
//! let composite = radolan_parser::decode(&bytes)?;
//! let (x, y) = composite.project(51.0, 9.0);
//! let value = composite.at(x as i64, y as i64);
//! ```

pub mod batch;
pub mod catalog;
pub mod composite;
pub mod config;
pub mod conversion;
pub mod encoding;
pub mod header;
pub mod layers;
pub mod unpacking;

pub use batch::{decode_batch, BatchFailure, BatchReport};
pub use catalog::{ProductCatalog, ProductSpec};
pub use composite::Composite;
pub use config::DecoderConfig;
pub use conversion::{dbz_to_rvp6, rvp6_to_dbz, ZrRelation};
pub use encoding::Encoding;
pub use header::Header;
pub use layers::{LayerLayout, Layers};
pub use unpacking::Plane;

pub use radolan_common::{GridKind, RadolanError, RadolanResult, Unit};

/// Decode a single composite.
pub fn decode(data: &[u8]) -> RadolanResult<Composite> {
    Composite::decode(data)
}
