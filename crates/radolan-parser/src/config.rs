//! Configuration for batch decoding.

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::decode_batch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Decode entries in parallel on the rayon pool.
    pub parallel: bool,

    /// Keep decoding after a failed entry and report it instead of aborting
    /// the whole batch.
    pub isolate_failures: bool,

    /// Run batches in a dedicated pool of this many threads.
    pub max_threads: Option<usize>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            isolate_failures: false,
            max_threads: None,
        }
    }
}

impl DecoderConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RADOLAN_PARALLEL") {
            if let Some(flag) = parse_flag(&val) {
                config.parallel = flag;
            }
        }

        if let Ok(val) = std::env::var("RADOLAN_ISOLATE_FAILURES") {
            if let Some(flag) = parse_flag(&val) {
                config.isolate_failures = flag;
            }
        }

        if let Ok(val) = std::env::var("RADOLAN_MAX_THREADS") {
            if let Ok(threads) = val.parse() {
                config.max_threads = Some(threads);
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_threads == Some(0) {
            return Err("max_threads must be > 0".to_string());
        }

        Ok(())
    }

    /// Sequential decoding that aborts on the first failure.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
