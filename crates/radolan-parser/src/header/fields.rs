//! Parsers for the content of individual header fields.

use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0},
    combinator::{map_res, opt, recognize},
    sequence::{pair, preceded, separated_pair},
    IResult,
};

/// Width of one entry of the level table.
pub const LEVEL_WIDTH: usize = 5;

/// Width of the level count prefix.
pub const LEVEL_COUNT_WIDTH: usize = 2;

fn signed_int(input: &str) -> IResult<&str, i64> {
    map_res(
        preceded(
            multispace0,
            recognize(pair(opt(alt((char('+'), char('-')))), digit1)),
        ),
        |digits: &str| digits.parse::<i64>(),
    )(input)
}

fn unsigned(input: &str) -> IResult<&str, usize> {
    map_res(preceded(multispace0, digit1), |digits: &str| {
        digits.parse::<usize>()
    })(input)
}

fn rows_by_cols(input: &str) -> IResult<&str, (usize, usize)> {
    separated_pair(unsigned, preceded(multispace0, char('x')), unsigned)(input)
}

/// Leading (optionally signed) integer, e.g. `" 405160"` or `"-01"`.
///
/// Whitespace before the number is skipped and anything after it ignored.
pub fn leading_int(value: &str) -> Result<i64, String> {
    signed_int(value)
        .map(|(_, number)| number)
        .map_err(|_| format!("expected integer, got {:?}", value))
}

/// Explicit dimensions `"<rows>x<cols>"`, e.g. `" 450x 450"` or `" 1500x1400"`.
///
/// Returns `(rows, cols)`.
pub fn explicit_dimensions(value: &str) -> Result<(usize, usize), String> {
    rows_by_cols(value)
        .map(|(_, dims)| dims)
        .map_err(|_| format!("expected <rows>x<cols>, got {:?}", value))
}

/// Packed dimensions of equal-width halves, e.g. `"460460"`.
///
/// Returns `(rows, cols)`.
pub fn packed_dimensions(value: &str) -> Result<(usize, usize), String> {
    let value = value.trim();
    if value.is_empty() || value.len() % 2 != 0 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("expected two equal-width numbers, got {:?}", value));
    }

    let (rows, cols) = value.split_at(value.len() / 2);
    let rows = rows.parse().map_err(|e| format!("rows {:?}: {}", rows, e))?;
    let cols = cols.parse().map_err(|e| format!("cols {:?}: {}", cols, e))?;
    Ok((rows, cols))
}

/// Level table: a two character count followed by `count` five character
/// values, e.g. `" 6  1.0 19.0 28.0 37.0 46.0 55.0"` or `"12-31.5-31.0..."`.
pub fn level_table(value: &str) -> Result<Vec<f32>, String> {
    let count_field = value
        .get(..LEVEL_COUNT_WIDTH)
        .ok_or_else(|| format!("missing level count in {:?}", value))?;
    let count: usize = count_field
        .trim()
        .parse()
        .map_err(|e| format!("level count {:?}: {}", count_field, e))?;

    let expected = count * LEVEL_WIDTH + LEVEL_COUNT_WIDTH;
    if value.len() != expected {
        return Err(format!(
            "{} levels need {} characters, got {}",
            count,
            expected,
            value.len()
        ));
    }

    (0..count)
        .map(|i| {
            let begin = LEVEL_COUNT_WIDTH + i * LEVEL_WIDTH;
            let chunk = value
                .get(begin..begin + LEVEL_WIDTH)
                .ok_or_else(|| format!("level {} is not valid text", i))?;
            chunk
                .trim()
                .parse::<f32>()
                .map_err(|e| format!("level {} {:?}: {}", i, chunk, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int(" 405160"), Ok(405160));
        assert_eq!(leading_int("22205"), Ok(22205));
        assert_eq!(leading_int("-01"), Ok(-1));
        assert_eq!(leading_int("+00"), Ok(0));
        assert_eq!(leading_int("   5"), Ok(5));
        assert_eq!(leading_int(" 3 trailing"), Ok(3));
        assert!(leading_int("").is_err());
        assert!(leading_int(" x12").is_err());
        assert!(leading_int("-").is_err());
    }

    #[test]
    fn test_explicit_dimensions() {
        assert_eq!(explicit_dimensions(" 450x 450"), Ok((450, 450)));
        assert_eq!(explicit_dimensions(" 1500x1400"), Ok((1500, 1400)));
        assert!(explicit_dimensions(" 450").is_err());
        assert!(explicit_dimensions("x450").is_err());
    }

    #[test]
    fn test_packed_dimensions() {
        assert_eq!(packed_dimensions("460460"), Ok((460, 460)));
        assert_eq!(packed_dimensions("12001100"), Ok((1200, 1100)));
        assert!(packed_dimensions("46046").is_err());
        assert!(packed_dimensions("").is_err());
        assert!(packed_dimensions("46x460").is_err());
    }

    #[test]
    fn test_level_table() {
        let levels = level_table(" 6  1.0 19.0 28.0 37.0 46.0 55.0").unwrap();
        assert_eq!(levels, vec![1.0, 19.0, 28.0, 37.0, 46.0, 55.0]);
    }

    #[test]
    fn test_level_table_negative_values() {
        let levels = level_table(" 3-31.5-31.0  0.5").unwrap();
        assert_eq!(levels, vec![-31.5, -31.0, 0.5]);
    }

    #[test]
    fn test_level_table_rejects_wrong_length() {
        assert!(level_table(" 6  1.0 19.0").is_err());
        assert!(level_table(" 1  1.0 ").is_err());
        assert!(level_table("6").is_err());
        assert!(level_table("xx  1.0").is_err());
        assert!(level_table(" 1  abc").is_err());
    }

    #[test]
    fn test_empty_level_table() {
        assert_eq!(level_table(" 0"), Ok(vec![]));
    }
}
