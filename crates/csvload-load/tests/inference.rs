//! Property tests for column type inference.

use csvload_load::{ColumnType, infer_column_type, parse_datetime};
use proptest::prelude::*;

fn plain_header() -> impl Strategy<Value = String> {
    // Anything that does not start with "pct"
    "[a-oq-z][a-z_]{0,12}"
}

fn pct_header() -> impl Strategy<Value = String> {
    "pct[a-z_0-9]{0,8}"
}

fn timestamp(zulu: bool) -> impl Strategy<Value = String> {
    (
        1970i32..2100,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        any::<bool>(),
        0u32..=14,
        prop::sample::select(vec![0u32, 30, 45]),
    )
        .prop_map(move |(y, mo, d, h, mi, s, negative, oh, om)| {
            let zone = if zulu {
                "Z".to_string()
            } else {
                format!("{}{oh:02}:{om:02}", if negative { '-' } else { '+' })
            };
            format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}{zone}")
        })
}

proptest! {
    #[test]
    fn integers_are_bigint(header in plain_header(), n in any::<i64>()) {
        prop_assert_eq!(infer_column_type(&header, &n.to_string()), ColumnType::Bigint);
    }

    #[test]
    fn pct_integers_are_double(header in pct_header(), n in any::<i64>()) {
        prop_assert_eq!(infer_column_type(&header, &n.to_string()), ColumnType::Double);
    }

    #[test]
    fn fractional_numbers_are_double(header in plain_header(), x in -1.0e6f64..1.0e6) {
        let value = format!("{x:.3}");
        prop_assert_eq!(infer_column_type(&header, &value), ColumnType::Double);
    }

    #[test]
    fn offset_timestamps_are_datetime(header in plain_header(), value in timestamp(false)) {
        prop_assert_eq!(infer_column_type(&header, &value), ColumnType::Datetime);
        prop_assert!(parse_datetime(&value).is_some());
    }

    #[test]
    fn zulu_timestamps_are_text(header in plain_header(), value in timestamp(true)) {
        prop_assert_eq!(infer_column_type(&header, &value), ColumnType::Text);
    }

    #[test]
    fn alphabetic_values_are_text(header in plain_header(), value in "[g-z]{1,10}") {
        // No 'a' or 'f', so "nan" and "inf" cannot be spelled
        prop_assert_eq!(infer_column_type(&header, &value), ColumnType::Text);
    }
}

#[test]
fn pct_used_and_count_example() {
    assert_eq!(infer_column_type("pct_used", "95"), ColumnType::Double);
    assert_eq!(infer_column_type("count", "3"), ColumnType::Bigint);
}

#[test]
fn loose_timestamps_are_text() {
    assert_eq!(infer_column_type("t", "2021-6-1T1:0:0+00:00"), ColumnType::Text);
    assert_eq!(infer_column_type("t", "2021-06-01T10:00:00+0000"), ColumnType::Text);
}

#[test]
fn out_of_range_floats_are_text() {
    assert_eq!(infer_column_type("x", "1e400"), ColumnType::Text);
    assert_eq!(infer_column_type("x", "-1e400"), ColumnType::Text);
    assert_eq!(infer_column_type("x", "1e300"), ColumnType::Double);
}
