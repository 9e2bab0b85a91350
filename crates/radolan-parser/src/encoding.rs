//! Payload encoding classification.

use serde::{Deserialize, Serialize};

use crate::header::Header;

/// Binary layout of a composite payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Offset/run byte pairs referencing the level table, newline separated
    RunLength,
    /// Two bytes per value, little endian, with no-data and sign flags
    Packed,
    /// One byte per value
    Byte,
    /// None of the above; decoding fails
    Unknown,
}

impl Encoding {
    /// Identify the encoding from header facts alone.
    pub fn classify(header: &Header) -> Self {
        let values = header.plain_size() as i64;

        if header.level.is_some() {
            Encoding::RunLength
        } else if header.data_length == values * 2 {
            Encoding::Packed
        } else if header.data_length == values {
            Encoding::Byte
        } else {
            Encoding::Unknown
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Encoding::RunLength => "run-length",
            Encoding::Packed => "packed",
            Encoding::Byte => "single-byte",
            Encoding::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: usize, height: usize, data_length: i64, level: Option<Vec<f32>>) -> Header {
        let mut data = format!("RW262115100000616BY 0GP{:4}x{:4}", height, width).into_bytes();
        data.push(0x03);
        let mut header = Header::parse(&data).unwrap();
        header.data_length = data_length;
        header.level = level;
        header
    }

    #[test]
    fn test_classify() {
        assert_eq!(Encoding::classify(&header(900, 900, 1_620_000, None)), Encoding::Packed);
        assert_eq!(Encoding::classify(&header(900, 900, 810_000, None)), Encoding::Byte);
        assert_eq!(Encoding::classify(&header(900, 900, 1234, None)), Encoding::Unknown);
        assert_eq!(Encoding::classify(&header(900, 900, -10, None)), Encoding::Unknown);
    }

    #[test]
    fn test_level_table_means_run_length() {
        // even when the length would also match a fixed-width layout
        let level = Some(vec![1.0, 2.0]);
        assert_eq!(
            Encoding::classify(&header(900, 900, 810_000, level)),
            Encoding::RunLength
        );
    }
}
