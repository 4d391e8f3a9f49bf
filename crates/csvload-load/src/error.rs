//! Error types for table loading.

use thiserror::Error;

use crate::types::ColumnType;

/// Errors that can occur while building or filling a table.
///
/// Every variant is fatal for the batch: callers are expected to stop
/// processing further files once one is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    // === Setup Errors ===
    /// Invalid connection configuration.
    #[error("invalid database configuration: {message}")]
    Config { message: String },

    /// The async runtime driving the database client could not start.
    #[error("failed to start database runtime: {source}")]
    Runtime {
        #[source]
        source: std::io::Error,
    },

    /// Could not connect to the database server.
    #[error("failed to connect to {host} (database {database}): {source}")]
    Connect {
        host: String,
        database: String,
        #[source]
        source: sqlx::Error,
    },

    // === Schema Errors ===
    /// A row does not have one value per header column.
    #[error("table {table}, row {row}: expected {expected} values, found {found}")]
    RowWidth {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// DROP or CREATE statement failed.
    #[error("failed to run DDL for table {table} ({statement}): {source}")]
    Ddl {
        table: String,
        statement: String,
        #[source]
        source: sqlx::Error,
    },

    // === Data Errors ===
    /// A cell does not parse as the type inferred for its column.
    #[error("table {table}, row {row}: cannot coerce {column}={value:?} to {expected}")]
    Coercion {
        table: String,
        row: usize,
        column: String,
        expected: ColumnType,
        value: String,
    },

    /// INSERT statement failed.
    #[error("failed to insert row {row} into {table}: {source}")]
    Insert {
        table: String,
        row: usize,
        #[source]
        source: sqlx::Error,
    },
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion_display() {
        let err = LoadError::Coercion {
            table: "sales".to_string(),
            row: 5,
            column: "count".to_string(),
            expected: ColumnType::Bigint,
            value: "n/a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "table sales, row 5: cannot coerce count=\"n/a\" to bigint"
        );
    }

    #[test]
    fn test_ddl_display_includes_statement() {
        let err = LoadError::Ddl {
            table: "t".to_string(),
            statement: "DROP TABLE IF EXISTS t".to_string(),
            source: sqlx::Error::Protocol("gone".to_string()),
        };
        assert!(err.to_string().contains("DROP TABLE IF EXISTS t"));
    }
}
