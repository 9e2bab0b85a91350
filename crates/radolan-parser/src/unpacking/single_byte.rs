//! One byte per value payloads.

use radolan_common::RadolanResult;

use super::{apply_precision, LineCodec, PayloadReader, RowOrder};

/// Byte value marking missing data.
pub const NO_DATA: u8 = 250;

#[derive(Debug, Clone, Copy)]
pub struct ByteCodec {
    precision: i32,
}

impl ByteCodec {
    pub fn new(precision: i32) -> Self {
        Self { precision }
    }

    pub fn decode_value(&self, byte: u8) -> f32 {
        if byte == NO_DATA {
            return f32::NAN;
        }
        apply_precision(i32::from(byte), self.precision)
    }
}

impl LineCodec for ByteCodec {
    const ROW_ORDER: RowOrder = RowOrder::BottomUp;

    fn read_line<'a>(
        &self,
        reader: &mut PayloadReader<'a>,
        width: usize,
    ) -> RadolanResult<&'a [u8]> {
        reader.take(width)
    }

    fn decode_line(&self, line: &[u8], _: usize, dst: &mut [f32]) -> RadolanResult<()> {
        for (dst, &byte) in dst.iter_mut().zip(line) {
            *dst = self.decode_value(byte);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unpacking::unpack;
    use radolan_common::RadolanError;

    #[test]
    fn test_decode_value() {
        let codec = ByteCodec::new(0);
        assert_eq!(codec.decode_value(0), 0.0);
        assert_eq!(codec.decode_value(249), 249.0);
        assert!(codec.decode_value(250).is_nan());
        assert_eq!(codec.decode_value(251), 251.0);
        assert!((ByteCodec::new(-1).decode_value(25) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_lines_fill_bottom_up() {
        let plane = unpack(&ByteCodec::new(0), &[1, 2, 3, 250], 2, 2).unwrap();
        assert_eq!(plane.row(1), &[1.0, 2.0]);
        assert_eq!(plane.get(0, 0), Some(3.0));
        assert!(plane.get(1, 0).is_some_and(f32::is_nan));
    }

    #[test]
    fn test_truncated() {
        let err = unpack(&ByteCodec::new(0), &[1, 2, 3], 2, 2).unwrap_err();
        assert_eq!(
            err,
            RadolanError::TruncatedPayload {
                expected: 2,
                available: 1
            }
        );
    }
}
