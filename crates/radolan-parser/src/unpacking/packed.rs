//! Two byte little endian payloads.
//!
//! ```text
//! low byte   high byte
//! MMMMMMMM   .SN.MMMM
//!             ||  ^^^^ upper magnitude bits
//!             |+------ no data
//!             +------- negative
//! ```

use radolan_common::RadolanResult;

use super::{apply_precision, LineCodec, PayloadReader, RowOrder};

pub const BYTES_PER_VALUE: usize = 2;

/// No-data flag in the high byte.
pub const NO_DATA_FLAG: u8 = 1 << 5;

/// Sign flag in the high byte.
pub const NEGATIVE_FLAG: u8 = 1 << 6;

/// Magnitude bits in the high byte.
pub const HIGH_MAGNITUDE_MASK: u8 = 0x0F;

#[derive(Debug, Clone, Copy)]
pub struct PackedCodec {
    precision: i32,
}

impl PackedCodec {
    pub fn new(precision: i32) -> Self {
        Self { precision }
    }

    /// Decode one `(low, high)` byte pair.
    pub fn decode_value(&self, low: u8, high: u8) -> f32 {
        if high & NO_DATA_FLAG != 0 {
            return f32::NAN;
        }

        let mut value = (i32::from(high & HIGH_MAGNITUDE_MASK) << 8) | i32::from(low);
        if high & NEGATIVE_FLAG != 0 {
            value = -value;
        }

        apply_precision(value, self.precision)
    }
}

impl LineCodec for PackedCodec {
    const ROW_ORDER: RowOrder = RowOrder::BottomUp;

    fn read_line<'a>(
        &self,
        reader: &mut PayloadReader<'a>,
        width: usize,
    ) -> RadolanResult<&'a [u8]> {
        reader.take(width * BYTES_PER_VALUE)
    }

    fn decode_line(&self, line: &[u8], _: usize, dst: &mut [f32]) -> RadolanResult<()> {
        for (dst, pair) in dst.iter_mut().zip(line.chunks_exact(BYTES_PER_VALUE)) {
            *dst = self.decode_value(pair[0], pair[1]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unpacking::unpack;

    #[test]
    fn test_decode_value() {
        let codec = PackedCodec::new(0);
        assert_eq!(codec.decode_value(0x00, 0x00), 0.0);
        assert_eq!(codec.decode_value(0xFF, 0x0F), 4095.0);
        assert_eq!(codec.decode_value(0x2C, 0x01), 300.0);
        assert_eq!(codec.decode_value(0x2C, 0x41), -300.0);
        assert!(codec.decode_value(0x2C, 0x21).is_nan());
        // no data wins over the sign
        assert!(codec.decode_value(0x2C, 0x61).is_nan());
    }

    #[test]
    fn test_unrelated_flags_are_ignored() {
        let codec = PackedCodec::new(0);
        assert_eq!(codec.decode_value(0x05, 0x90), 5.0);
    }

    #[test]
    fn test_precision() {
        let codec = PackedCodec::new(-1);
        assert!((codec.decode_value(0x7B, 0x00) - 12.3).abs() < 1e-5);
        assert!((codec.decode_value(0x7B, 0x40) + 12.3).abs() < 1e-5);
    }

    #[test]
    fn test_every_value_survives_encoding() {
        for precision in [0, -1] {
            let codec = PackedCodec::new(precision);
            let scale = 10f64.powi(precision);
            for value in -4095..=4095 {
                let [low, high] = test_utils::encode_packed_value(Some(value));
                let expected = f64::from(value) * scale;
                let decoded = f64::from(codec.decode_value(low, high));
                assert!(
                    (decoded - expected).abs() <= 1e-4,
                    "{} at precision {}: got {}",
                    value,
                    precision,
                    decoded
                );
            }

            let [low, high] = test_utils::encode_packed_value(None);
            assert!(codec.decode_value(low, high).is_nan());
        }
    }

    #[test]
    fn test_lines_fill_bottom_up() {
        let payload = [1, 0, 2, 0, 3, 0, 4, 0];
        let plane = unpack(&PackedCodec::new(0), &payload, 2, 2).unwrap();
        assert_eq!(plane.row(0), &[3.0, 4.0]);
        assert_eq!(plane.row(1), &[1.0, 2.0]);
    }
}
