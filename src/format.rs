//! Rendering of selected rows as text

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::store::{Row, Value};

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// Parse a format name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Render rows in the requested format
pub fn format_rows(format: OutputFormat, columns: &[String], rows: &[Row]) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(columns, rows)),
        OutputFormat::Json => format_json(columns, rows),
    }
}

/// Format query results as an ASCII table
pub fn format_table(columns: &[String], rows: &[Row]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();

    for row in rows {
        for (i, value) in row.values().iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(value.to_string().chars().count());
            }
        }
    }

    let separator: String = widths
        .iter()
        .map(|w| "-".repeat(*w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{}+\n", separator);

    let mut output = String::new();

    output.push_str(&separator);
    let header: String = columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!(" {:^width$} ", c, width = *w))
        .collect::<Vec<_>>()
        .join("|");
    output.push_str(&format!("|{}|\n", header));
    output.push_str(&separator);

    for row in rows {
        let line: String = row
            .values()
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!(" {:>width$} ", v.to_string(), width = *w))
            .collect::<Vec<_>>()
            .join("|");
        output.push_str(&format!("|{}|\n", line));
    }

    if !rows.is_empty() {
        output.push_str(&separator);
    }

    output.push_str(&format!("{} row(s) returned\n", rows.len()));

    output
}

/// Format query results as a JSON array of objects keyed by column name
pub fn format_json(columns: &[String], rows: &[Row]) -> Result<String> {
    let objects: Vec<IndexMap<&str, &Value>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(String::as_str)
                .zip(row.values())
                .collect()
        })
        .collect();

    serde_json::to_string_pretty(&objects).map_err(|e| Error::Internal(e.to_string()))
}
