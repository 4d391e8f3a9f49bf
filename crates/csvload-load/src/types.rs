//! Core types for schema inference and loading.

use std::fmt;

use chrono::{DateTime, FixedOffset};

/// Column type inferred from a sample value.
///
/// Each variant maps to one SQL column type. The type is chosen once per
/// column from the first data row and every later value must coerce to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Free text, stored verbatim. Fallback when nothing else parses.
    Text,

    /// Base-10 signed 64-bit integer.
    Bigint,

    /// 64-bit floating point number.
    Double,

    /// Timestamp with an explicit `+HH:MM`/`-HH:MM` offset.
    Datetime,
}

impl ColumnType {
    /// SQL type name used in `CREATE TABLE`.
    pub fn sql_name(self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Bigint => "bigint",
            ColumnType::Double => "double",
            ColumnType::Datetime => "datetime",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

/// A single typed column of a generated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name, taken verbatim from the CSV header.
    pub name: String,
    /// Inferred column type.
    pub column_type: ColumnType,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }

    /// Column definition as it appears in `CREATE TABLE`.
    pub fn definition(&self) -> String {
        format!("{} {} not null", self.name, self.column_type)
    }
}

/// Table layout inferred from a header and its first data row.
///
/// The auto-increment `id` primary key is implicit and not listed in
/// `columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// Returns the number of data columns (excluding `id`).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no data columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Comma separated column definitions, without the `id` column.
    pub fn column_definitions(&self) -> String {
        self.columns
            .iter()
            .map(ColumnDef::definition)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A cell value coerced to its column type, ready for parameter binding.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Bigint(i64),
    Double(f64),
    Datetime(DateTime<FixedOffset>),
}

impl SqlValue {
    /// Column type this value belongs to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            SqlValue::Text(_) => ColumnType::Text,
            SqlValue::Bigint(_) => ColumnType::Bigint,
            SqlValue::Double(_) => ColumnType::Double,
            SqlValue::Datetime(_) => ColumnType::Datetime,
        }
    }
}

/// Outcome of loading one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLoad {
    /// The table was recreated and filled.
    Created {
        table: String,
        columns: usize,
        rows: usize,
    },

    /// No data rows, so no schema could be inferred and nothing was created.
    Skipped { table: String },
}

impl TableLoad {
    pub fn table(&self) -> &str {
        match self {
            TableLoad::Created { table, .. } | TableLoad::Skipped { table } => table,
        }
    }

    /// Number of rows inserted (zero when skipped).
    pub fn rows_inserted(&self) -> usize {
        match self {
            TableLoad::Created { rows, .. } => *rows,
            TableLoad::Skipped { .. } => 0,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TableLoad::Skipped { .. })
    }
}
