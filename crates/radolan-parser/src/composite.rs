//! Decoded radar composites.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use projection::Calibration;
use radolan_common::{GridKind, RadolanError, RadolanResult, Unit};
use tracing::{debug, warn};

use crate::catalog::ProductCatalog;
use crate::encoding::Encoding;
use crate::header::Header;
use crate::layers::Layers;
use crate::unpacking::{decode_plane, Plane};

/// One decoded radar product.
///
/// Values are physical measurements in [`Composite::unit`], NaN where no data
/// is available. A composite is read-only once decoded.
///
/// ```ignore
/// let composite = Composite::open("raa01-rw_10000-1607282050-dwd---bin")?;
/// let (x, y) = composite.project(52.51861, 13.40833); // Berlin
/// let rainfall = composite.at(x.round() as i64, y.round() as i64);
/// ```
#[derive(Debug, Clone)]
pub struct Composite {
    product: String,
    capture_time: DateTime<Utc>,
    forecast_time: DateTime<Utc>,
    interval: Duration,
    format_version: i64,
    precision: i32,
    level: Option<Vec<f32>>,
    unit: Unit,
    encoding: Option<Encoding>,
    nominal_resolution: Option<(f64, f64)>,
    plain: Plane,
    layers: Layers,
    calibration: Calibration,
    warnings: Vec<RadolanError>,
}

impl Composite {
    /// Decode header and payload using the builtin product catalog.
    pub fn decode(data: &[u8]) -> RadolanResult<Self> {
        Self::decode_with_catalog(data, ProductCatalog::builtin())
    }

    /// Decode header and payload.
    pub fn decode_with_catalog(data: &[u8], catalog: &ProductCatalog) -> RadolanResult<Self> {
        let header = Header::parse_with_catalog(data, catalog)?;

        let encoding = Encoding::classify(&header);
        debug!(
            product = %header.product,
            encoding = encoding.name(),
            data_length = header.data_length,
            "Classified payload"
        );

        let payload = &data[header.header_length..];
        let plain = decode_plane(encoding, &header, payload)?;

        let layers = Layers::arrange(&plain, header.layer_width, header.layer_height)?;
        debug!(
            product = %header.product,
            layers = layers.count(),
            width = layers.width(),
            height = layers.height(),
            "Arranged layers"
        );

        let mut warnings = Vec::new();
        if !header.unit.is_known() {
            warn!(product = %header.product, "No unit known for product, values may be misinterpreted");
            warnings.push(RadolanError::UnknownUnit(header.product.clone()));
        }

        let calibration = calibrate(&header.product, &layers, header.format_version);

        Ok(Self {
            product: header.product,
            capture_time: header.capture_time,
            forecast_time: header.forecast_time,
            interval: header.interval,
            format_version: header.format_version,
            precision: header.precision,
            level: header.level,
            unit: header.unit,
            encoding: Some(encoding),
            nominal_resolution: header.nominal_resolution,
            plain,
            layers,
            calibration,
            warnings,
        })
    }

    /// Read and decode a single uncompressed composite file.
    pub fn open(path: impl AsRef<Path>) -> RadolanResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = data.len(), "Read composite file");
        Self::decode(&data)
    }

    /// Blank composite without data, for coordinate translation only.
    pub fn dummy(product: &str, format_version: i64, width: usize, height: usize) -> Self {
        let catalog = ProductCatalog::builtin();
        let layers = Layers::empty(width, height, 1);
        let calibration = calibrate(product, &layers, format_version);

        Self {
            product: product.to_string(),
            capture_time: DateTime::<Utc>::default(),
            forecast_time: DateTime::<Utc>::default(),
            interval: Duration::zero(),
            format_version,
            precision: 0,
            level: None,
            unit: catalog.unit(product).unwrap_or_default(),
            encoding: None,
            nominal_resolution: catalog
                .dimensions(product)
                .map(|spec| (spec.res_x, spec.res_y)),
            plain: Plane::new(width, height),
            layers,
            calibration,
            warnings: Vec::new(),
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn capture_time(&self) -> DateTime<Utc> {
        self.capture_time
    }

    pub fn forecast_time(&self) -> DateTime<Utc> {
        self.forecast_time
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn format_version(&self) -> i64 {
        self.format_version
    }

    pub fn precision(&self) -> i32 {
        self.precision
    }

    /// Run-length level table, present iff the payload was run-length encoded.
    pub fn level(&self) -> Option<&[f32]> {
        self.level.as_deref()
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Payload encoding, `None` for dummies.
    pub fn encoding(&self) -> Option<Encoding> {
        self.encoding
    }

    pub fn plain_width(&self) -> usize {
        self.plain.width()
    }

    pub fn plain_height(&self) -> usize {
        self.plain.height()
    }

    pub fn layer_width(&self) -> usize {
        self.layers.width()
    }

    pub fn layer_height(&self) -> usize {
        self.layers.height()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.count()
    }

    /// Value at `(x, y)` of layer 0, NaN outside the grid.
    pub fn at(&self, x: i64, y: i64) -> f32 {
        self.at_z(x, y, 0)
    }

    /// Value at `(x, y)` of layer `z`, NaN outside the grid or the stack.
    pub fn at_z(&self, x: i64, y: i64, z: usize) -> f32 {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => self.layers.get(x, y, z).unwrap_or(f32::NAN),
            _ => f32::NAN,
        }
    }

    /// Row-major values of layer `z`.
    pub fn layer(&self, z: usize) -> Option<&[f32]> {
        self.layers.layer(z)
    }

    /// Row-major values of layer 0.
    pub fn data(&self) -> &[f32] {
        self.layers.layer(0).unwrap_or(&[])
    }

    /// The undivided plane as stored on disk (after the vertical flip of the
    /// fixed width layouts).
    pub fn plain(&self) -> &Plane {
        &self.plain
    }

    /// Fractional pixel position of a geographic coordinate in degrees.
    ///
    /// NaN when no grid could be identified.
    pub fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        self.calibration.project(lat, lon)
    }

    pub fn has_projection(&self) -> bool {
        self.calibration.is_available()
    }

    pub fn grid(&self) -> Option<GridKind> {
        self.calibration.grid()
    }

    /// Calibrated resolution in km/px, NaN without projection.
    pub fn resolution(&self) -> (f64, f64) {
        self.calibration.resolution()
    }

    /// Catalog resolution in km/px for products without header dimensions.
    pub fn nominal_resolution(&self) -> Option<(f64, f64)> {
        self.nominal_resolution
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Non-fatal problems found while decoding.
    pub fn warnings(&self) -> &[RadolanError] {
        &self.warnings
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

fn calibrate(product: &str, layers: &Layers, format_version: i64) -> Calibration {
    let calibration = Calibration::detect(layers.width(), layers.height(), format_version);
    match (calibration.grid(), calibration.projector()) {
        (Some(grid), Some(projector)) => debug!(
            product,
            grid = ?grid,
            projector = projector.name(),
            "Calibrated projection"
        ),
        _ => debug!(
            product,
            width = layers.width(),
            height = layers.height(),
            "No known grid, projection unavailable"
        ),
    }
    calibration
}
