//! Table materialization: infer, recreate, fill.

use crate::error::{LoadError, Result};
use crate::inference::infer_schema;
use crate::sink::TableSink;
use crate::sql::{InsertStatement, create_table_sql, drop_table_sql};
use crate::types::{SqlValue, TableLoad, TableSchema};
use crate::value::coerce_value;

/// Recreates `table` from `header` and `rows` and inserts every row.
///
/// Column types come from `rows[0]` only. Each later value is coerced to
/// its column's type, and the first value that does not coerce aborts the
/// load with [`LoadError::Coercion`]. Rows inserted before the failure are
/// left in place; there is no transaction.
///
/// With no rows nothing is created and [`TableLoad::Skipped`] is returned.
pub fn build_table<S>(
    sink: &mut S,
    table: &str,
    header: &[String],
    rows: &[Vec<String>],
) -> Result<TableLoad>
where
    S: TableSink + ?Sized,
{
    let Some(first_row) = rows.first() else {
        tracing::info!(table, "no rows, cannot infer table structure; skipping");
        return Ok(TableLoad::Skipped {
            table: table.to_string(),
        });
    };

    let schema = infer_schema(table, header, first_row)?;
    recreate_table(sink, &schema)?;
    tracing::info!(
        table,
        columns = %schema.column_definitions(),
        "table created"
    );

    let insert = InsertStatement::for_schema(&schema);
    for (idx, row) in rows.iter().enumerate() {
        let row_number = idx + 1;
        let values = coerce_row(&schema, row_number, row)?;
        sink.insert_row(&insert, &values)
            .map_err(|source| LoadError::Insert {
                table: table.to_string(),
                row: row_number,
                source,
            })?;
    }
    tracing::info!(table, rows = rows.len(), "rows inserted");

    Ok(TableLoad::Created {
        table: table.to_string(),
        columns: schema.len(),
        rows: rows.len(),
    })
}

/// Drops any existing table of the same name and creates it from `schema`.
pub fn recreate_table<S>(sink: &mut S, schema: &TableSchema) -> Result<()>
where
    S: TableSink + ?Sized,
{
    for statement in [drop_table_sql(&schema.table), create_table_sql(schema)] {
        tracing::debug!(table = %schema.table, %statement, "executing DDL");
        sink.execute_ddl(&statement)
            .map_err(|source| LoadError::Ddl {
                table: schema.table.clone(),
                statement: statement.clone(),
                source,
            })?;
    }
    Ok(())
}

/// Coerces every cell of `row` to the type fixed in `schema`.
///
/// `row_number` is 1-based and only used for error context.
pub fn coerce_row(schema: &TableSchema, row_number: usize, row: &[String]) -> Result<Vec<SqlValue>> {
    if row.len() != schema.len() {
        return Err(LoadError::RowWidth {
            table: schema.table.clone(),
            row: row_number,
            expected: schema.len(),
            found: row.len(),
        });
    }

    schema
        .columns
        .iter()
        .zip(row)
        .map(|(column, raw)| {
            coerce_value(raw, column.column_type).ok_or_else(|| LoadError::Coercion {
                table: schema.table.clone(),
                row: row_number,
                column: column.name.clone(),
                expected: column.column_type,
                value: raw.clone(),
            })
        })
        .collect()
}
