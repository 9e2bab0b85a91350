//! Decoding of many composites at once.
//!
//! Entries are independent, so they are decoded in parallel and only the
//! collected results are ordered afterwards.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{info, warn};

use radolan_common::{RadolanError, RadolanResult};

use crate::composite::Composite;
use crate::config::DecoderConfig;

/// An entry that could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    /// Position of the entry in the input
    pub index: usize,
    pub error: RadolanError,
}

/// Result of a batch decode.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Decoded composites in ascending forecast time
    pub composites: Vec<Composite>,
    /// Failed entries, only filled when failures are isolated
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Decode every entry and sort the composites by forecast time.
///
/// Composites with equal forecast times keep their input order. Unless
/// `config.isolate_failures` is set, the first failing entry (by input
/// position) fails the whole batch. An invalid `config` fails before any
/// entry is decoded.
pub fn decode_batch<T>(entries: &[T], config: &DecoderConfig) -> RadolanResult<BatchReport>
where
    T: AsRef<[u8]> + Sync,
{
    config.validate().map_err(RadolanError::InvalidConfig)?;

    let results = decode_all(entries, config);

    let mut report = BatchReport::default();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(composite) => report.composites.push(composite),
            Err(error) if config.isolate_failures => {
                warn!(index, error = %error, "Skipping undecodable entry");
                report.failures.push(BatchFailure { index, error });
            }
            Err(error) => return Err(error),
        }
    }

    report.composites.sort_by_key(|composite| composite.forecast_time());

    info!(
        entries = entries.len(),
        decoded = report.composites.len(),
        failed = report.failures.len(),
        "Decoded batch"
    );

    Ok(report)
}

fn decode_all<T>(entries: &[T], config: &DecoderConfig) -> Vec<RadolanResult<Composite>>
where
    T: AsRef<[u8]> + Sync,
{
    if !config.parallel {
        return entries
            .iter()
            .map(|entry| Composite::decode(entry.as_ref()))
            .collect();
    }

    let decode = || -> Vec<RadolanResult<Composite>> {
        entries
            .par_iter()
            .map(|entry| Composite::decode(entry.as_ref()))
            .collect()
    };

    match config.max_threads {
        Some(threads) => match ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(decode),
            Err(e) => {
                warn!(threads, error = %e, "Could not build decoder pool, using global pool");
                decode()
            }
        },
        None => decode(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let entries: Vec<Vec<u8>> = Vec::new();
        let report = decode_batch(&entries, &DecoderConfig::default()).unwrap();
        assert!(report.composites.is_empty());
        assert!(report.is_complete());
    }

    #[test]
    fn test_first_failure_aborts() {
        let entries = vec![b"garbage".to_vec(), b"RW26".to_vec()];
        let err = decode_batch(&entries, &DecoderConfig::sequential()).unwrap_err();
        assert_eq!(err, RadolanError::HeaderTooShort);
    }

    #[test]
    fn test_isolated_failures() {
        let entries = vec![b"garbage".to_vec(), b"RW26".to_vec()];
        let config = DecoderConfig {
            isolate_failures: true,
            ..DecoderConfig::default()
        };
        let report = decode_batch(&entries, &config).unwrap();
        assert!(report.composites.is_empty());
        let indices: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let entries = vec![b"garbage".to_vec()];
        let config = DecoderConfig {
            max_threads: Some(0),
            isolate_failures: true,
            ..DecoderConfig::default()
        };
        let err = decode_batch(&entries, &config).unwrap_err();
        assert_eq!(err.code(), "InvalidConfig");
        assert!(err.is_fatal());
    }
}
