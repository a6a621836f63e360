//! Statement builder
//!
//! Renders the engine statements for each store operation. Values never
//! appear in the text: every one of them is bound as a `?` parameter.
//! Identifiers are emitted as given, so a bad name is reported by the engine.

use super::target::Target;
use crate::catalog::TableSchema;

/// `CREATE TABLE table (col TYPE [PRIMARY KEY], ...)`
pub fn create_table(table: &str, schema: &TableSchema) -> String {
    let columns = schema
        .columns()
        .iter()
        .map(|col| {
            if schema.is_primary_key(&col.name) {
                format!("{} {} PRIMARY KEY", col.name, col.column_type)
            } else {
                format!("{} {}", col.name, col.column_type)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("CREATE TABLE {} ({})", table, columns)
}

/// `INSERT INTO table VALUES (?, ...)` with one placeholder per column
pub fn insert(table: &str, column_count: usize) -> String {
    let placeholders = vec!["?"; column_count].join(", ");
    format!("INSERT INTO {} VALUES ({})", table, placeholders)
}

/// `SELECT col, ... FROM table [WHERE col op ?]`
pub fn select(table: &str, columns: &[&str], target: Option<&Target>) -> String {
    let mut sql = format!("SELECT {} FROM {}", columns.join(", "), table);
    if let Some(target) = target {
        sql.push_str(&format!(" WHERE {} {} ?", target.column(), target.operator()));
    }
    sql
}

/// `UPDATE table SET col = ? WHERE col = ?`
pub fn update(table: &str, set_column: &str, target_column: &str) -> String {
    format!(
        "UPDATE {} SET {} = ? WHERE {} = ?",
        table, set_column, target_column
    )
}

/// `DELETE FROM table WHERE col = ?`
pub fn delete(table: &str, target_column: &str) -> String {
    format!("DELETE FROM {} WHERE {} = ?", table, target_column)
}
