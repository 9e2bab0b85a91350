//! Parsing of reference headers.

use chrono::{Duration, TimeZone, Utc};
use radolan_parser::{Encoding, Header, Unit};
use test_utils::fixtures::headers;

fn with_payload(header: &str, payload: &[u8]) -> Vec<u8> {
    let mut data = header.as_bytes().to_vec();
    data.extend_from_slice(payload);
    data
}

#[test]
fn test_parse_pg_header() {
    let header = Header::parse(&with_payload(headers::PG, b"binarycontent")).unwrap();

    assert_eq!(header.product, "PG");
    assert_eq!(header.header_length, headers::PG_LENGTH);
    assert_eq!(header.data_length, 22205 - 159);
    assert_eq!(
        header.capture_time,
        Utc.with_ymd_and_hms(2016, 6, 26, 21, 15, 0).unwrap()
    );
    assert_eq!(header.forecast_time, header.capture_time);
    assert_eq!(header.interval, Duration::zero());
    assert_eq!((header.plain_width, header.plain_height), (460, 460));
    assert_eq!((header.layer_width, header.layer_height), (460, 460));
    assert_eq!(header.precision, 0);
    assert_eq!(
        header.level.as_deref(),
        Some(&[1.0, 19.0, 28.0, 37.0, 46.0, 55.0][..])
    );
    assert_eq!(header.unit, Unit::Dbz);
    assert_eq!(header.nominal_resolution, None);
    assert_eq!(Encoding::classify(&header), Encoding::RunLength);
}

#[test]
fn test_parse_fz_header() {
    let data = with_payload(headers::FZ, b"binarycontent");
    let header = Header::parse(&data).unwrap();

    assert_eq!(header.product, "FZ");
    assert_eq!(header.header_length, headers::FZ_LENGTH);
    assert_eq!(header.data_length, 405160 - 154);
    assert_eq!(
        header.capture_time,
        Utc.with_ymd_and_hms(2016, 7, 28, 21, 5, 0).unwrap()
    );
    assert_eq!(
        header.forecast_time,
        Utc.with_ymd_and_hms(2016, 7, 28, 22, 45, 0).unwrap()
    );
    assert_eq!(header.interval, Duration::minutes(5));
    assert_eq!(header.format_version, 3);
    assert_eq!((header.plain_width, header.plain_height), (450, 450));
    assert_eq!(header.precision, -1);
    assert_eq!(header.level, None);
    assert_eq!(header.unit, Unit::Dbz);

    // the payload starts right after the terminator
    assert_eq!(&data[header.header_length..], b"binarycontent");

    // 405006 = 450 * 450 * 2 + 6: none of the fixed width layouts match
    assert_eq!(Encoding::classify(&header), Encoding::Unknown);
}

#[test]
fn test_header_text_is_independent_of_payload() {
    let a = Header::parse(&with_payload(headers::FZ, &[0x03, 0x0A, 0xFF])).unwrap();
    let b = Header::parse(&with_payload(headers::FZ, b"")).unwrap();
    assert_eq!(a, b);
}
