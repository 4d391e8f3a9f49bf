//! SQL statement generation.
//!
//! Table and column names are written into the statement text as-is; they
//! come from file names and CSV headers under the operator's control. Cell
//! values are never interpolated and always go through parameter binding.

use crate::types::TableSchema;

/// Character set declared on every generated table.
pub const TABLE_CHARSET: &str = "utf8";

/// Collation declared on every generated table and on the connection.
pub const TABLE_COLLATION: &str = "utf8_unicode_ci";

/// Implicit primary key prepended to every generated table.
pub const ID_COLUMN: &str = "id bigint not null auto_increment primary key";

pub fn drop_table_sql(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {table}")
}

pub fn create_table_sql(schema: &TableSchema) -> String {
    let mut columns = String::from(ID_COLUMN);
    if !schema.is_empty() {
        columns.push_str(", ");
        columns.push_str(&schema.column_definitions());
    }
    format!(
        "CREATE TABLE {} ({columns}) CHARACTER SET {TABLE_CHARSET} COLLATE {TABLE_COLLATION}",
        schema.table
    )
}

/// Parameterized INSERT for one table, built once and reused for every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    pub table: String,
    pub sql: String,
    /// Number of `?` placeholders.
    pub params: usize,
}

impl InsertStatement {
    pub fn for_schema(schema: &TableSchema) -> Self {
        let names = schema
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let marks = vec!["?"; schema.len()].join(", ");
        Self {
            table: schema.table.clone(),
            sql: format!("INSERT INTO {}({names}) VALUES ({marks})", schema.table),
            params: schema.len(),
        }
    }
}
