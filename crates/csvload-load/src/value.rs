//! Parsing of raw CSV text into typed values.

use chrono::{DateTime, FixedOffset};

use crate::types::{ColumnType, SqlValue};

/// Timestamp format: ISO 8601 date and time with a mandatory numeric offset.
///
/// `2021-06-01T10:00:00+02:00` parses; `2021-06-01T10:00:00Z` does not, a UTC
/// timestamp has to be written with `+00:00`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Byte layout of a timestamp: `-`, `-`, `T`, `:`, `:`, offset sign, `:`.
/// Every other position is an ASCII digit.
const DATETIME_SHAPE: &[u8; 25] = b"0000-00-00T00:00:00+00:00";

/// Parses a base-10 signed 64-bit integer with an optional sign.
pub fn parse_bigint(value: &str) -> Option<i64> {
    value.parse().ok()
}

/// Parses a decimal or exponent float. Finite results only, except an
/// explicit `inf`/`infinity` spelling.
pub fn parse_double(value: &str) -> Option<f64> {
    let number: f64 = value.parse().ok()?;
    if number.is_infinite() && !spells_infinity(value) {
        return None;
    }
    Some(number)
}

/// Parses `YYYY-MM-DDTHH:MM:SS+HH:MM` (or `-HH:MM`), two digits per field.
pub fn parse_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    if !has_datetime_shape(value) {
        return None;
    }
    DateTime::parse_from_str(value, DATETIME_FORMAT).ok()
}

fn spells_infinity(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn has_datetime_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == DATETIME_SHAPE.len()
        && bytes
            .iter()
            .zip(DATETIME_SHAPE)
            .all(|(&byte, &expected)| match expected {
                b'0' => byte.is_ascii_digit(),
                b'+' => byte == b'+' || byte == b'-',
                _ => byte == expected,
            })
}

/// Coerces a raw value to `column_type`.
///
/// Returns `None` when the value does not parse as that type. Text always
/// succeeds.
pub fn coerce_value(value: &str, column_type: ColumnType) -> Option<SqlValue> {
    match column_type {
        ColumnType::Text => Some(SqlValue::Text(value.to_owned())),
        ColumnType::Bigint => parse_bigint(value).map(SqlValue::Bigint),
        ColumnType::Double => parse_double(value).map(SqlValue::Double),
        ColumnType::Datetime => parse_datetime(value).map(SqlValue::Datetime),
    }
}
