//! Shared test utilities for the RADOLAN decoder workspace.
//!
//! - synthetic composite files ([`RadolanFileBuilder`] and the inverse codecs)
//! - reference headers and projection tables ([`fixtures`])
//! - lookup of optional real sample files ([`find_test_file`])
//! - approximate float assertions and test logging
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, RadolanFileBuilder};
//! ```

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use generators::*;
pub use paths::*;

/// Install a test subscriber once per test binary.
///
/// Honors `RUST_LOG` and defaults to `warn`. Output goes through the test
/// harness capture.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

/// Return early from a test when a sample file is not available.
///
/// ```ignore
/// #[test]
/// fn test_real_rw_file() {
///     let path = require_test_file!("raa01-rw_10000-1605252050-dwd---bin");
///     // ...
/// }
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "SKIPPED: sample file '{}' not found. Place it in testdata/ or set TEST_DATA_DIR.",
                    $name
                );
                return;
            }
        }
    }};
}

/// Assert that two numbers differ by at most `epsilon`.
///
/// NaN never compares equal, not even to NaN.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
    ($left:expr, $right:expr, $epsilon:expr, $($context:tt)+) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)` {}\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                format_args!($($context)+), left, right, diff, epsilon
            );
        }
    }};
}

/// Assert that two coordinate pairs agree per axis within `epsilon`.
#[macro_export]
macro_rules! assert_coords_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (lx, ly) = $left;
        let (rx, ry) = $right;
        $crate::assert_approx_eq!(lx, rx, $epsilon, "(x of {:?} vs {:?})", (lx, ly), (rx, ry));
        $crate::assert_approx_eq!(ly, ry, $epsilon, "(y of {:?} vs {:?})", (lx, ly), (rx, ry));
    }};
}
