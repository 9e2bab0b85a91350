//! Payload decoding.
//!
//! Three line-oriented layouts exist:
//! - run-length ([`runlength`]): variable length lines terminated by `\n`,
//!   written top to bottom
//! - packed ([`packed`]): two bytes per value, written bottom to top
//! - single byte ([`single_byte`]): one byte per value, written bottom to top
//!
//! Every codec implements [`LineCodec`] and is driven by [`unpack`], which
//! reads one line per plane row and places it according to the codec's
//! [`RowOrder`].

pub mod packed;
pub mod runlength;
pub mod single_byte;

use radolan_common::{RadolanError, RadolanResult};

use crate::encoding::Encoding;
use crate::header::Header;
pub use packed::PackedCodec;
pub use runlength::RunLengthCodec;
pub use single_byte::ByteCodec;

/// Row-major grid of decoded values, NaN where no data is available.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Plane {
    /// Plane of `width` x `height` no-data values.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![f32::NAN; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        &mut self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    pub fn values(&self) -> &[f32] {
        &self.data
    }

    pub fn into_values(self) -> Vec<f32> {
        self.data
    }
}

/// Order in which decoded lines fill the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// First line on disk is the first row
    TopDown,
    /// First line on disk is the last row
    BottomUp,
}

/// Cursor over the payload bytes.
#[derive(Debug)]
pub struct PayloadReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PayloadReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Next `n` bytes.
    pub fn take(&mut self, n: usize) -> RadolanResult<&'a [u8]> {
        let available = self.remaining();
        if available < n {
            return Err(RadolanError::TruncatedPayload {
                expected: n,
                available,
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Bytes up to `terminator`, which is consumed but not returned.
    pub fn take_until(&mut self, terminator: u8) -> RadolanResult<&'a [u8]> {
        let rest = &self.data[self.pos..];
        match rest.iter().position(|&b| b == terminator) {
            Some(end) => {
                self.pos += end + 1;
                Ok(&rest[..end])
            }
            None => Err(RadolanError::TruncatedPayload {
                expected: rest.len() + 1,
                available: rest.len(),
            }),
        }
    }
}

/// Decoder for one line-oriented payload layout.
pub trait LineCodec {
    /// Where the n-th line read ends up in the plane.
    const ROW_ORDER: RowOrder;

    /// Read the raw bytes of the next line.
    fn read_line<'a>(
        &self,
        reader: &mut PayloadReader<'a>,
        width: usize,
    ) -> RadolanResult<&'a [u8]>;

    /// Decode one raw line into `dst`, which is pre-filled with NaN.
    ///
    /// `line_index` is the position of the line in the payload.
    fn decode_line(&self, line: &[u8], line_index: usize, dst: &mut [f32]) -> RadolanResult<()>;
}

/// Decode `height` lines of `width` values from `payload`.
pub fn unpack<C: LineCodec>(
    codec: &C,
    payload: &[u8],
    width: usize,
    height: usize,
) -> RadolanResult<Plane> {
    let mut plane = Plane::new(width, height);
    let mut reader = PayloadReader::new(payload);

    for line_index in 0..height {
        let line = codec.read_line(&mut reader, width)?;
        let row = match C::ROW_ORDER {
            RowOrder::TopDown => line_index,
            RowOrder::BottomUp => height - 1 - line_index,
        };
        codec.decode_line(line, line_index, plane.row_mut(row))?;
    }

    Ok(plane)
}

/// Decode the payload following `header` with the given encoding.
pub fn decode_plane(encoding: Encoding, header: &Header, payload: &[u8]) -> RadolanResult<Plane> {
    let (width, height) = (header.plain_width, header.plain_height);
    if width == 0 || height == 0 {
        return Err(RadolanError::BadDimensions(format!(
            "plane of {}x{} values",
            width, height
        )));
    }

    match encoding {
        Encoding::RunLength => {
            let level = header.level.as_deref().unwrap_or(&[]);
            unpack(&RunLengthCodec::new(level), payload, width, height)
        }
        Encoding::Packed => unpack(&PackedCodec::new(header.precision), payload, width, height),
        Encoding::Byte => unpack(&ByteCodec::new(header.precision), payload, width, height),
        Encoding::Unknown => Err(RadolanError::UnknownEncoding {
            data_length: header.data_length,
            width,
            height,
        }),
    }
}

/// Scale a raw integer by `10^precision`.
#[inline]
pub fn apply_precision(value: i32, precision: i32) -> f32 {
    (f64::from(value) * 10f64.powi(precision)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_precision() {
        assert_eq!(apply_precision(123, 0), 123.0);
        assert!((apply_precision(123, -1) - 12.3).abs() < 1e-5);
        assert_eq!(apply_precision(-5, 2), -500.0);
    }

    #[test]
    fn test_plane_starts_empty() {
        let plane = Plane::new(3, 2);
        assert_eq!(plane.values().len(), 6);
        assert!(plane.values().iter().all(|v| v.is_nan()));
        assert_eq!(plane.get(3, 0), None);
        assert_eq!(plane.get(0, 2), None);
    }

    #[test]
    fn test_reader_take() {
        let mut reader = PayloadReader::new(&[1, 2, 3]);
        assert_eq!(reader.take(2).unwrap(), &[1, 2]);
        assert_eq!(
            reader.take(2),
            Err(RadolanError::TruncatedPayload {
                expected: 2,
                available: 1
            })
        );
    }

    #[test]
    fn test_reader_take_until() {
        let mut reader = PayloadReader::new(&[1, 2, 0x0A, 3, 0x0A, 4]);
        assert_eq!(reader.take_until(0x0A).unwrap(), &[1, 2]);
        assert_eq!(reader.take_until(0x0A).unwrap(), &[3]);
        assert!(matches!(
            reader.take_until(0x0A),
            Err(RadolanError::TruncatedPayload { .. })
        ));
    }

    struct Identity;

    impl LineCodec for Identity {
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
                *dst = f32::from(byte);
            }
            Ok(())
        }
    }

    #[test]
    fn test_unpack_bottom_up() {
        let plane = unpack(&Identity, &[1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        assert_eq!(plane.row(0), &[5.0, 6.0]);
        assert_eq!(plane.row(1), &[3.0, 4.0]);
        assert_eq!(plane.row(2), &[1.0, 2.0]);
    }

    #[test]
    fn test_unpack_short_payload() {
        let err = unpack(&Identity, &[1, 2, 3], 2, 2).unwrap_err();
        assert_eq!(
            err,
            RadolanError::TruncatedPayload {
                expected: 2,
                available: 1
            }
        );
    }
}
