//! Column type inference and table materialization.
//!
//! Given a table name, a CSV header and raw text rows, this crate infers one
//! SQL type per column from the first row, recreates the table, and inserts
//! every row with per-column coercion through a [`TableSink`].
//!
//! # Example
//!
//! ```ignore
//! use csvload_load::{DbConfig, MySqlSink, build_table};
//!
//! let mut sink = MySqlSink::connect(&db_config)?;
//! let load = build_table(&mut sink, "sales_2023", &header, &rows)?;
//! println!("{} rows into {}", load.rows_inserted(), load.table());
//! ```

mod error;
mod inference;
mod loader;
mod mysql;
mod sink;
mod sql;
mod types;
mod value;

// === Error Types ===
pub use error::{LoadError, Result};

// === Core Types ===
pub use types::{ColumnDef, ColumnType, SqlValue, TableLoad, TableSchema};

// === Inference ===
pub use inference::{PERCENTILE_PREFIX, infer_column_type, infer_schema};
pub use value::{DATETIME_FORMAT, coerce_value, parse_bigint, parse_datetime, parse_double};

// === SQL Generation ===
pub use sql::{
    ID_COLUMN, InsertStatement, TABLE_CHARSET, TABLE_COLLATION, create_table_sql, drop_table_sql,
};

// === Loading ===
pub use loader::{build_table, coerce_row, recreate_table};
pub use sink::{DryRunSink, SinkResult, TableSink};

// === MySQL ===
pub use mysql::{DEFAULT_MYSQL_PORT, DbConfig, MySqlSink};
