//! Decoding of real DWD files.
//!
//! Sample files are not distributed with the repository. Place them in
//! `crates/radolan-parser/testdata/` or point `TEST_DATA_DIR` at a directory
//! containing them; the tests are skipped otherwise.

use radolan_parser::{Composite, Encoding, GridKind, Unit};
use test_utils::{init_test_logging, require_test_file};

fn summarize(composite: &Composite) {
    let valid: Vec<f32> = composite.data().iter().copied().filter(|v| !v.is_nan()).collect();
    let min = valid.iter().copied().fold(f32::INFINITY, f32::min);
    let max = valid.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    println!(
        "{} {}x{}x{} {:?}: {} valid values, range {} to {} {}",
        composite.product(),
        composite.layer_width(),
        composite.layer_height(),
        composite.layer_count(),
        composite.encoding(),
        valid.len(),
        min,
        max,
        composite.unit().symbol()
    );
}

#[test]
fn test_rw_hourly_accumulation() {
    init_test_logging();
    let path = require_test_file!("raa01-rw_10000-1605252050-dwd---bin");

    let composite = Composite::open(&path).unwrap();
    summarize(&composite);

    assert_eq!(composite.product(), "RW");
    assert_eq!(composite.encoding(), Some(Encoding::Packed));
    assert_eq!(composite.unit(), Unit::Millimeter);
    assert_eq!(composite.grid(), Some(GridKind::National));
    assert!(composite
        .data()
        .iter()
        .filter(|v| !v.is_nan())
        .all(|&v| v >= 0.0));
}

#[test]
fn test_pg_picture_product() {
    init_test_logging();
    let path = require_test_file!("raa00-pg_10000-1606262115-dwd---bin");

    let composite = Composite::open(&path).unwrap();
    summarize(&composite);

    assert_eq!(composite.encoding(), Some(Encoding::RunLength));
    assert_eq!(composite.grid(), Some(GridKind::NationalPicture));
    let level = composite.level().unwrap_or_default();
    assert!(composite
        .data()
        .iter()
        .filter(|v| !v.is_nan())
        .all(|v| level.contains(v)));
}

#[test]
fn test_wn_forecast_wgs84() {
    init_test_logging();
    let path = require_test_file!("raa01-wn_10000-1605252050-dwd---bin");

    let composite = Composite::open(&path).unwrap();
    summarize(&composite);

    assert_eq!(composite.grid(), Some(GridKind::Wide));
    assert!(composite.forecast_time() >= composite.capture_time());
}
