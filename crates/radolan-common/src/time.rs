//! Time handling for composite headers.

use chrono::{DateTime, NaiveDate, Utc};
use nom::{bytes::complete::take_while_m_n, combinator::eof, sequence::terminated, IResult};

use crate::{RadolanError, RadolanResult};

fn two_digits(input: &str) -> IResult<&str, u32> {
    let (input, digits) = take_while_m_n(2, 2, |c: char| c.is_ascii_digit())(input)?;
    let value = digits
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    Ok((input, value))
}

/// `DDhhmmMMYY` -> (day, hour, minute, month, year)
fn compact_date(input: &str) -> IResult<&str, (u32, u32, u32, u32, u32)> {
    let (input, day) = two_digits(input)?;
    let (input, hour) = two_digits(input)?;
    let (input, minute) = two_digits(input)?;
    let (input, month) = two_digits(input)?;
    let (input, year) = terminated(two_digits, eof)(input)?;
    Ok((input, (day, hour, minute, month, year)))
}

/// Parse the compact capture time `DDhhmmMMYY` (UTC).
///
/// Two-digit years follow the usual pivot: 69-99 map to the 1900s,
/// 00-68 to the 2000s.
pub fn parse_capture_time(date: &str) -> RadolanResult<DateTime<Utc>> {
    let (_, (day, hour, minute, month, year)) = compact_date(date)
        .map_err(|_| RadolanError::BadCaptureTime(format!("malformed date {:?}", date)))?;

    let year = if year >= 69 { 1900 + year } else { 2000 + year };

    let naive = NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| {
            RadolanError::BadCaptureTime(format!(
                "invalid date: {}-{:02}-{:02} {:02}:{:02}",
                year, month, day, hour, minute
            ))
        })?;

    Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_capture_time() {
        let time = parse_capture_time("2621150616").unwrap();
        assert_eq!(time.year(), 2016);
        assert_eq!(time.month(), 6);
        assert_eq!(time.day(), 26);
        assert_eq!(time.hour(), 21);
        assert_eq!(time.minute(), 15);
    }

    #[test]
    fn test_parse_capture_time_pivot_year() {
        let time = parse_capture_time("0100000199").unwrap();
        assert_eq!(time.year(), 1999);
        let time = parse_capture_time("0100000168").unwrap();
        assert_eq!(time.year(), 2068);
    }

    #[test]
    fn test_parse_capture_time_rejects_garbage() {
        assert!(matches!(
            parse_capture_time("26211506"),
            Err(RadolanError::BadCaptureTime(_))
        ));
        assert!(matches!(
            parse_capture_time("26x1150616"),
            Err(RadolanError::BadCaptureTime(_))
        ));
        assert!(matches!(
            parse_capture_time("262115061600"),
            Err(RadolanError::BadCaptureTime(_))
        ));
        // month 13
        assert!(matches!(
            parse_capture_time("2621151316"),
            Err(RadolanError::BadCaptureTime(_))
        ));
    }
}
