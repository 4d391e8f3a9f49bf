//! Destinations for generated statements.

use crate::sql::InsertStatement;
use crate::types::SqlValue;

/// Result of a single statement executed by a sink.
pub type SinkResult = std::result::Result<(), sqlx::Error>;

/// Something that can execute table DDL and parameterized inserts.
///
/// The loader drives a sink strictly in order: DDL statements first, then
/// one `insert_row` call per data row. Implementations must not batch or
/// reorder statements.
pub trait TableSink {
    /// Executes a DDL statement (`DROP TABLE`, `CREATE TABLE`).
    fn execute_ddl(&mut self, statement: &str) -> SinkResult;

    /// Executes `insert` with `values` bound to its placeholders, in order.
    fn insert_row(&mut self, insert: &InsertStatement, values: &[SqlValue]) -> SinkResult;
}

/// Sink that executes nothing and logs every statement instead.
#[derive(Debug, Default)]
pub struct DryRunSink {
    ddl_statements: usize,
    inserted_rows: usize,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ddl_statements(&self) -> usize {
        self.ddl_statements
    }

    pub fn inserted_rows(&self) -> usize {
        self.inserted_rows
    }
}

impl TableSink for DryRunSink {
    fn execute_ddl(&mut self, statement: &str) -> SinkResult {
        self.ddl_statements += 1;
        tracing::info!(statement, "dry run: skipping DDL");
        Ok(())
    }

    fn insert_row(&mut self, insert: &InsertStatement, values: &[SqlValue]) -> SinkResult {
        self.inserted_rows += 1;
        tracing::trace!(sql = %insert.sql, ?values, "dry run: skipping insert");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_counts_statements() {
        let insert = InsertStatement {
            table: "t".to_string(),
            sql: "INSERT INTO t(a) VALUES (?)".to_string(),
            params: 1,
        };
        let mut sink = DryRunSink::new();
        sink.execute_ddl("DROP TABLE IF EXISTS t").unwrap();
        sink.insert_row(&insert, &[SqlValue::Bigint(1)]).unwrap();
        sink.insert_row(&insert, &[SqlValue::Bigint(2)]).unwrap();

        assert_eq!(sink.ddl_statements(), 1);
        assert_eq!(sink.inserted_rows(), 2);
    }
}
