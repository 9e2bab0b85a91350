//! Composite header parsing.
//!
//! The header is ASCII text terminated by ETX (0x03). It starts with the
//! product code and a fixed-position timestamp, followed by fields whose names
//! are runs of uppercase letters:
//!
//! ```text
//! FZ282105100000716BY 405160VS 3SW   2.13.1PR E-01INT   5GP 450x 450VV 100...
//! ^^^^^^^^^^^^^^^^^
//! product, DDhhmm, WMO station number (5), MMYY
//! ```

pub mod fields;
pub mod tokenizer;

use chrono::{DateTime, Duration, Utc};
use radolan_common::{parse_capture_time, RadolanError, RadolanResult, Unit};
use tracing::debug;

use crate::catalog::ProductCatalog;
use fields::{explicit_dimensions, leading_int, level_table, packed_dimensions};
use tokenizer::split_header;

/// Header terminator (ETX).
pub const HEADER_TERMINATOR: u8 = 0x03;

/// Shortest header that can hold product code, timestamp and a length field.
pub const MIN_HEADER_LENGTH: usize = 22;

/// Start of the tokenized fields, after product code and timestamp.
pub const FIELDS_OFFSET: usize = 17;

/// Largest plane accepted, in values. The biggest operational grids hold
/// about two million.
pub const MAX_PLAIN_SIZE: usize = 1 << 25;

/// Parsed composite header.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Two letter product code, e.g. "PG" or "RW"
    pub product: String,
    pub capture_time: DateTime<Utc>,
    /// Capture time plus the forecast offset (`VV`)
    pub forecast_time: DateTime<Utc>,
    /// Time until the next forecast (`INT`), zero when absent
    pub interval: Duration,
    /// Format version (`VS`), 0 when absent
    pub format_version: i64,
    /// Payload length in bytes (`BY` minus the header length)
    pub data_length: i64,
    /// Header length in bytes including the terminator
    pub header_length: usize,
    /// Plane dimensions as stored on disk
    pub plain_width: usize,
    pub plain_height: usize,
    /// Dimensions of one layer
    pub layer_width: usize,
    pub layer_height: usize,
    /// Catalog resolution in km/px for products without header dimensions
    pub nominal_resolution: Option<(f64, f64)>,
    /// Decimal exponent applied to raw values (`E`)
    pub precision: i32,
    /// Run-length level table (`LV`)
    pub level: Option<Vec<f32>>,
    pub unit: Unit,
}

impl Header {
    /// Parse the header at the start of `data` using the builtin catalog.
    pub fn parse(data: &[u8]) -> RadolanResult<Self> {
        Self::parse_with_catalog(data, ProductCatalog::builtin())
    }

    /// Parse the header at the start of `data`.
    ///
    /// Only the header is inspected; the payload starts at
    /// [`Header::header_length`].
    pub fn parse_with_catalog(data: &[u8], catalog: &ProductCatalog) -> RadolanResult<Self> {
        let end = data
            .iter()
            .position(|&b| b == HEADER_TERMINATOR)
            .ok_or(RadolanError::HeaderTooShort)?;
        let header_length = end + 1;
        if header_length < MIN_HEADER_LENGTH {
            return Err(RadolanError::HeaderTooShort);
        }

        let text = String::from_utf8_lossy(&data[..end]);
        let product = text.get(..2).ok_or(RadolanError::HeaderTooShort)?.to_string();
        let fields = split_header(text.get(FIELDS_OFFSET..).unwrap_or_default());

        // DDhhmm, skip the station number, MMYY
        let date = match (text.get(2..8), text.get(13..17)) {
            (Some(time), Some(month_year)) => format!("{}{}", time, month_year),
            _ => {
                return Err(RadolanError::BadCaptureTime(
                    "timestamp is not valid text".to_string(),
                ))
            }
        };
        let capture_time = parse_capture_time(&date)?;

        let total_length = fields
            .get("BY")
            .ok_or_else(|| RadolanError::BadDataLength("missing BY field".to_string()))
            .and_then(|by| leading_int(by).map_err(RadolanError::BadDataLength))?;
        let data_length = total_length - header_length as i64;

        let forecast_time = match fields.get("VV") {
            Some(vv) => {
                let minutes = leading_int(vv).map_err(RadolanError::BadForecastOffset)?;
                Duration::try_minutes(minutes)
                    .and_then(|offset| capture_time.checked_add_signed(offset))
                    .ok_or_else(|| {
                        RadolanError::BadForecastOffset(format!("{} minutes out of range", minutes))
                    })?
            }
            None => capture_time,
        };

        let interval = match fields.get("INT") {
            Some(int) => {
                let minutes = leading_int(int).map_err(RadolanError::BadInterval)?;
                minutes
                    .checked_mul(catalog.interval_multiplier(&product))
                    .and_then(Duration::try_minutes)
                    .ok_or_else(|| {
                        RadolanError::BadInterval(format!("{} minutes out of range", minutes))
                    })?
            }
            None => Duration::zero(),
        };

        let format_version = match fields.get("VS") {
            Some(vs) => leading_int(vs).map_err(RadolanError::BadFormatVersion)?,
            None => 0,
        };

        let precision = match fields.get("E") {
            Some(e) => leading_int(e)
                .and_then(|p| i32::try_from(p).map_err(|err| err.to_string()))
                .map_err(RadolanError::BadPrecision)?,
            None => 0,
        };

        let level = match fields.get("LV") {
            Some(lv) => Some(level_table(lv).map_err(RadolanError::BadLevelFormat)?),
            None => None,
        };

        let (plain_width, plain_height, layer_width, layer_height, nominal_resolution) =
            if let Some(gp) = fields.get("GP") {
                let (rows, cols) = explicit_dimensions(gp).map_err(RadolanError::BadDimensions)?;
                (cols, rows, cols, rows, None)
            } else if let Some(bg) = fields.get("BG") {
                let (rows, cols) = packed_dimensions(bg).map_err(RadolanError::BadDimensions)?;
                (cols, rows, cols, rows, None)
            } else {
                let spec = catalog
                    .dimensions(&product)
                    .ok_or_else(|| RadolanError::MissingDimensions(product.clone()))?;
                (
                    spec.plain_width,
                    spec.plain_height,
                    spec.layer_width,
                    spec.layer_height,
                    Some((spec.res_x, spec.res_y)),
                )
            };

        plain_width
            .checked_mul(plain_height)
            .filter(|&size| size <= MAX_PLAIN_SIZE)
            .ok_or_else(|| {
                RadolanError::BadDimensions(format!(
                    "{}x{} plane exceeds {} values",
                    plain_width, plain_height, MAX_PLAIN_SIZE
                ))
            })?;

        let unit = catalog.unit(&product).unwrap_or_default();

        debug!(
            product = %product,
            capture_time = %capture_time,
            forecast_time = %forecast_time,
            width = plain_width,
            height = plain_height,
            data_length = data_length,
            header_length = header_length,
            "Parsed header"
        );

        Ok(Self {
            product,
            capture_time,
            forecast_time,
            interval,
            format_version,
            data_length,
            header_length,
            plain_width,
            plain_height,
            layer_width,
            layer_height,
            nominal_resolution,
            precision,
            level,
            unit,
        })
    }

    /// Number of values in the plane.
    pub fn plain_size(&self) -> usize {
        self.plain_width.saturating_mul(self.plain_height)
    }
}
