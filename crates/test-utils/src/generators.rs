//! Synthetic composite files.
//!
//! The encoders here are the inverse of the decoder's codecs and produce
//! payloads in on-disk order. Grids are passed top row first, the way the
//! decoded composite presents them, so the vertical flip of the fixed width
//! layouts happens here.

use bytes::Bytes;

/// Header terminator (ETX).
pub const ETX: u8 = 0x03;

/// Timestamp used when none is given: 2016-06-26 21:15 UTC, station 10000.
pub const DEFAULT_TIMESTAMP: &str = "262115100000616";

/// Builder for a complete composite file: header, ETX and payload.
///
/// The `BY` field is computed from the final header and payload length
/// unless overridden with [`RadolanFileBuilder::byte_count`].
///
/// ```
/// use test_utils::{encode_single_byte, RadolanFileBuilder};
///
/// let file = RadolanFileBuilder::new("RW")
///     .dimensions(2, 2)
///     .payload(encode_single_byte(&[vec![Some(1), Some(2)], vec![None, Some(4)]]))
///     .build();
/// assert_eq!(file.len(), RadolanFileBuilder::new("RW").dimensions(2, 2).header_len() + 4);
/// ```
#[derive(Debug, Clone)]
pub struct RadolanFileBuilder {
    product: String,
    timestamp: String,
    fields: Vec<(String, String)>,
    byte_count: Option<i64>,
    payload: Vec<u8>,
}

impl RadolanFileBuilder {
    pub fn new(product: &str) -> Self {
        Self {
            product: product.to_string(),
            timestamp: DEFAULT_TIMESTAMP.to_string(),
            fields: Vec::new(),
            byte_count: None,
            payload: Vec::new(),
        }
    }

    /// Capture time; `year` is two digits.
    pub fn captured(mut self, day: u32, hour: u32, minute: u32, month: u32, year: u32) -> Self {
        self.timestamp = format!(
            "{:02}{:02}{:02}10000{:02}{:02}",
            day, hour, minute, month, year
        );
        self
    }

    /// Raw header field, appended in call order.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    /// Explicit dimensions field (`GP`).
    pub fn dimensions(self, rows: usize, cols: usize) -> Self {
        self.field("GP", &format!("{:4}x{:4}", rows, cols))
    }

    /// Packed dimensions field (`BG`).
    pub fn packed_dimensions(self, rows: usize, cols: usize) -> Self {
        let digits = rows.to_string().len().max(cols.to_string().len());
        self.field("BG", &format!("{:0w$}{:0w$}", rows, cols, w = digits))
    }

    /// Forecast offset field (`VV`) in minutes.
    pub fn forecast(self, minutes: i64) -> Self {
        self.field("VV", &format!("{:4}", minutes))
    }

    /// Interval field (`INT`) in minutes.
    pub fn interval(self, minutes: i64) -> Self {
        self.field("INT", &format!("{:4}", minutes))
    }

    /// Format version field (`VS`).
    pub fn format_version(self, version: i64) -> Self {
        self.field("VS", &format!("{:2}", version))
    }

    /// Precision field (`PR E-01`).
    pub fn precision(self, exponent: i32) -> Self {
        self.field("PR", " ")
            .field("E", &format!("{}{:02}", if exponent < 0 { '-' } else { '+' }, exponent.abs()))
    }

    /// Level table field (`LV`).
    pub fn levels(self, levels: &[f32]) -> Self {
        let mut value = format!("{:2}", levels.len());
        for level in levels {
            value.push_str(&format!("{:5.1}", level));
        }
        self.field("LV", &value)
    }

    /// Override the `BY` field.
    pub fn byte_count(mut self, total: i64) -> Self {
        self.byte_count = Some(total);
        self
    }

    pub fn payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Header text after the `BY` field.
    fn tail(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}{}", name, value))
            .collect()
    }

    /// Header length including ETX.
    pub fn header_len(&self) -> usize {
        // "BY" plus a fixed width of 7 digits
        self.product.len() + self.timestamp.len() + 9 + self.tail().len() + 1
    }

    /// Assemble the file.
    pub fn build(&self) -> Bytes {
        let total = self
            .byte_count
            .unwrap_or((self.header_len() + self.payload.len()) as i64);

        let mut data = format!(
            "{}{}BY{:7}{}",
            self.product,
            self.timestamp,
            total,
            self.tail()
        )
        .into_bytes();
        data.push(ETX);
        data.extend_from_slice(&self.payload);
        Bytes::from(data)
    }
}

/// Encode one value of the two byte layout, `None` as no data.
///
/// Panics when the magnitude does not fit into 12 bits.
pub fn encode_packed_value(value: Option<i32>) -> [u8; 2] {
    match value {
        None => [0x00, 0x20],
        Some(value) => {
            let magnitude = value.unsigned_abs();
            assert!(magnitude <= 0x0FFF, "{} does not fit 12 bits", value);
            let sign = if value < 0 { 0x40 } else { 0x00 };
            [(magnitude & 0xFF) as u8, ((magnitude >> 8) as u8) | sign]
        }
    }
}

/// Encode a grid (top row first) in the two byte layout.
pub fn encode_packed(rows: &[Vec<Option<i32>>]) -> Vec<u8> {
    rows.iter()
        .rev()
        .flat_map(|row| row.iter().flat_map(|&value| encode_packed_value(value)))
        .collect()
}

/// Encode a grid (top row first) in the single byte layout, `None` as 250.
pub fn encode_single_byte(rows: &[Vec<Option<u8>>]) -> Vec<u8> {
    rows.iter()
        .rev()
        .flat_map(|row| row.iter().map(|value| value.unwrap_or(250)))
        .collect()
}

/// One line of a run-length payload.
///
/// ```
/// use test_utils::RunLengthLine;
///
/// // skip 2 positions, then level 1 three times
/// let line = RunLengthLine::new(0x01).skip(2).run(3, 1).to_bytes();
/// assert_eq!(line, vec![0x01, 0x12, 0x31, 0x0A]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLengthLine {
    number: u8,
    skip: usize,
    runs: Vec<(usize, u8)>,
}

impl RunLengthLine {
    /// Line starting with the given line number byte, which must not be `\n`.
    pub fn new(number: u8) -> Self {
        assert_ne!(number, 0x0A, "line number byte collides with the line terminator");
        Self {
            number,
            skip: 0,
            runs: Vec::new(),
        }
    }

    /// Leave `positions` values at no data before the first run.
    pub fn skip(mut self, positions: usize) -> Self {
        self.skip = positions;
        self
    }

    /// Repeat level id `level` (1-based, 0 is no data) `count` times.
    pub fn run(mut self, count: usize, level: u8) -> Self {
        assert!(level <= 0x0F, "level id {} does not fit 4 bits", level);
        self.runs.push((count, level));
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![self.number];

        let mut skip = self.skip;
        while skip >= 239 {
            bytes.push(255);
            skip -= 239;
        }
        bytes.push(skip as u8 + 16);

        for &(count, level) in &self.runs {
            let mut left = count;
            while left > 0 {
                let chunk = left.min(15);
                bytes.push(((chunk as u8) << 4) | level);
                left -= chunk;
            }
        }

        bytes.push(0x0A);
        bytes
    }
}

/// Concatenate run-length lines into a payload.
pub fn encode_run_length(lines: &[RunLengthLine]) -> Vec<u8> {
    lines.iter().flat_map(RunLengthLine::to_bytes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts_bytes() {
        let file = RadolanFileBuilder::new("RW")
            .dimensions(900, 900)
            .payload(vec![0u8; 10])
            .build();
        let text = String::from_utf8_lossy(&file[..37]);
        assert_eq!(text, "RW262115100000616BY     48GP 900x 900");
        assert_eq!(file[37], ETX);
        assert_eq!(file.len(), 48);
    }

    #[test]
    fn test_header_fields() {
        let file = RadolanFileBuilder::new("FZ")
            .precision(-1)
            .interval(5)
            .levels(&[1.0, 19.0])
            .packed_dimensions(460, 460)
            .build();
        let text = String::from_utf8_lossy(&file);
        assert!(text.contains("PR E-01INT   5LV 2  1.0 19.0BG460460\u{3}"), "{}", text);
    }

    #[test]
    fn test_encode_packed_value() {
        assert_eq!(encode_packed_value(Some(300)), [0x2C, 0x01]);
        assert_eq!(encode_packed_value(Some(-300)), [0x2C, 0x41]);
        assert_eq!(encode_packed_value(None), [0x00, 0x20]);
    }

    #[test]
    fn test_fixed_width_encoders_flip_rows() {
        let bytes = encode_single_byte(&[vec![Some(1), Some(2)], vec![Some(3), None]]);
        assert_eq!(bytes, vec![3, 250, 1, 2]);

        let bytes = encode_packed(&[vec![Some(1)], vec![Some(2)]]);
        assert_eq!(bytes, vec![2, 0, 1, 0]);
    }

    #[test]
    fn test_run_length_long_skip_and_run() {
        let line = RunLengthLine::new(0x07).skip(240).run(17, 2).to_bytes();
        assert_eq!(line, vec![0x07, 255, 17, 0xF2, 0x22, 0x0A]);
    }
}
