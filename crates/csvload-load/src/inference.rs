//! Column type inference from a single sample row.
//!
//! Priority order for inference (first match wins):
//! 1. `bigint` when the value is a base-10 integer, unless the header starts with `pct`
//! 2. `double` when the value is a floating point number
//! 3. `datetime` when the value matches [`DATETIME_FORMAT`](crate::DATETIME_FORMAT)
//! 4. `text` otherwise
//!
//! Only the first data row is sampled. Later rows are never consulted, so a
//! column whose first value is `3` becomes `bigint` even if row 5 holds `n/a`;
//! that row then fails coercion at insert time.

use crate::error::{LoadError, Result};
use crate::types::{ColumnDef, ColumnType, TableSchema};
use crate::value::{parse_bigint, parse_datetime, parse_double};

/// Header prefix for percentile columns, which never become `bigint`.
pub const PERCENTILE_PREFIX: &str = "pct";

/// Infers the type of one column from its header and sample value.
pub fn infer_column_type(header: &str, value: &str) -> ColumnType {
    if parse_bigint(value).is_some() && !header.starts_with(PERCENTILE_PREFIX) {
        ColumnType::Bigint
    } else if parse_double(value).is_some() {
        ColumnType::Double
    } else if parse_datetime(value).is_some() {
        ColumnType::Datetime
    } else {
        ColumnType::Text
    }
}

/// Builds the table schema from the header and the first data row.
pub fn infer_schema(table: &str, header: &[String], first_row: &[String]) -> Result<TableSchema> {
    if first_row.len() != header.len() {
        return Err(LoadError::RowWidth {
            table: table.to_string(),
            row: 1,
            expected: header.len(),
            found: first_row.len(),
        });
    }

    let columns = header
        .iter()
        .zip(first_row)
        .map(|(name, value)| ColumnDef::new(name.clone(), infer_column_type(name, value)))
        .collect();

    Ok(TableSchema {
        table: table.to_string(),
        columns,
    })
}
