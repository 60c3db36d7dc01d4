//! SQL literal rendering for `INSERT` statements.
//!
//! Numbers are always written as integers: the fractional part is dropped
//! (`1500.75` becomes `1500`). Downstream loads rely on this, so it is kept
//! even though it loses information.

use crate::domain::models::{CellValue, Record};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralOptions {
    /// Strip surrounding whitespace from text before quoting.
    pub trim_text: bool,
}

pub fn format_value(value: &CellValue) -> String {
    format_value_with(value, LiteralOptions::default())
}

pub fn format_value_with(value: &CellValue, options: LiteralOptions) -> String {
    match value {
        CellValue::Null => "NULL".to_string(),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => match truncated_integer(*f) {
            Some(text) => text,
            None => {
                warn!("Non-finite number {} written as NULL", f);
                "NULL".to_string()
            }
        },
        CellValue::Text(s) if s.is_empty() => "NULL".to_string(),
        CellValue::Text(s) => {
            let text = if options.trim_text { s.trim() } else { s.as_str() };
            quote_text(text)
        }
    }
}

fn truncated_integer(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let whole = value.trunc();
    if whole == 0.0 {
        // avoids "-0" for values in (-1, 0)
        return Some("0".to_string());
    }
    Some(format!("{:.0}", whole))
}

fn quote_text(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// `INSERT INTO <table> ("<c1>", ...) VALUES (<v1>, ...);` plus a newline.
pub fn render_insert(table_name: &str, record: Record<'_>) -> String {
    render_insert_with(table_name, record, LiteralOptions::default())
}

pub fn render_insert_with(table_name: &str, record: Record<'_>, options: LiteralOptions) -> String {
    let mut columns = Vec::with_capacity(record.columns().len());
    let mut values = Vec::with_capacity(record.values().len());
    for (column, value) in record.iter() {
        columns.push(format!("\"{}\"", column));
        values.push(format_value_with(value, options));
    }
    format!(
        "INSERT INTO {} ({}) VALUES ({});\n",
        table_name,
        columns.join(", "),
        values.join(", ")
    )
}
