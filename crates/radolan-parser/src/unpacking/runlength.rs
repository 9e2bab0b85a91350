//! Run-length encoded payloads.
//!
//! Each line ends with `\n` and starts with a line number byte, followed by an
//! offset and the runs:
//!
//! ```text
//! [line] [offset ...] [run] [run] ... \n
//! ```
//!
//! An offset byte skips `value - 16` positions; 255 announces another offset
//! byte. A run byte `[CCCC|LLLL]` repeats level `L` `C` times. Level 0 and
//! levels beyond the table (border markings) are no data.

use radolan_common::{RadolanError, RadolanResult};

use super::{LineCodec, PayloadReader, RowOrder};

/// Line terminator of run-length payloads.
pub const LINE_TERMINATOR: u8 = 0x0A;

/// Offset bytes are biased by this value.
pub const OFFSET_BIAS: u8 = 16;

/// Offset byte value that chains another offset byte.
pub const OFFSET_CONTINUES: u8 = 255;

/// Decoder mapping level ids onto the header's level table.
#[derive(Debug, Clone, Copy)]
pub struct RunLengthCodec<'a> {
    level: &'a [f32],
}

impl<'a> RunLengthCodec<'a> {
    pub fn new(level: &'a [f32]) -> Self {
        Self { level }
    }

    /// Physical value of a level id.
    pub fn level_value(&self, id: u8) -> f32 {
        match id {
            0 => f32::NAN,
            id => self
                .level
                .get(usize::from(id) - 1)
                .copied()
                .unwrap_or(f32::NAN),
        }
    }
}

impl LineCodec for RunLengthCodec<'_> {
    const ROW_ORDER: RowOrder = RowOrder::TopDown;

    fn read_line<'a>(&self, reader: &mut PayloadReader<'a>, _: usize) -> RadolanResult<&'a [u8]> {
        reader.take_until(LINE_TERMINATOR)
    }

    fn decode_line(&self, line: &[u8], line_index: usize, dst: &mut [f32]) -> RadolanResult<()> {
        let width = dst.len();
        let mut cursor = 0usize;
        let mut offset = true;

        for (position, &byte) in line.iter().enumerate().skip(1) {
            if offset {
                if byte < OFFSET_BIAS {
                    return Err(RadolanError::InvalidOffset {
                        line: line_index,
                        position,
                        value: byte,
                    });
                }
                cursor += usize::from(byte - OFFSET_BIAS);
                offset = byte == OFFSET_CONTINUES;
                continue;
            }

            let count = byte >> 4;
            let value = self.level_value(byte & 0x0F);
            for _ in 0..count {
                let slot = dst.get_mut(cursor).ok_or(RadolanError::DestinationOverflow {
                    line: line_index,
                    width,
                })?;
                *slot = value;
                cursor += 1;
            }
        }

        Ok(())
    }
}
