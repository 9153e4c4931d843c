//! Shared CLI output helpers.
//!
//! Results go to stdout as JSON or an aligned table. Status lines go to
//! stderr so stdout stays machine-readable.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success
//! - Red: errors
//! - Cyan: hints, paths, names

use console::style;
use serde::Serialize;
use serde_json::Value;

use crate::core::constants::NO_RESULTS;
use crate::error::Result;

/// How command results are printed.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

/// A table column: the row field to read and the header to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message (red).
///
/// Example: `✗ secret not found: app/key`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ re-run with --yes`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Format a path or secret name in cyan.
pub fn name(n: &str) -> String {
    if colors_enabled() {
        style(n).cyan().to_string()
    } else {
        n.to_string()
    }
}

/// Serialize records into row objects.
pub fn to_rows<T: Serialize>(records: &[T]) -> Result<Vec<Value>> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(Into::into))
        .collect()
}

/// Pretty-print rows as a JSON array with 2-space indent.
pub fn render_json(rows: &[Value]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Render rows as a fixed-width table.
///
/// Every cell is padded to its column width and columns are joined by two
/// spaces. Missing fields render empty.
pub fn render_table(columns: &[Column], rows: &[Value]) -> String {
    if rows.is_empty() {
        return NO_RESULTS.to_string();
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| cell_text(row.get(c.key))).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(c.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |values: Vec<String>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(line(columns.iter().map(|c| c.label.to_string()).collect()));
    lines.push(line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    lines.extend(cells.into_iter().map(line));
    lines.join("\n")
}

/// Render rows in the requested format.
pub fn render(format: OutputFormat, columns: &[Column], rows: &[Value]) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(rows),
        OutputFormat::Table => Ok(render_table(columns, rows)),
    }
}

/// Serialize, render and print records to stdout.
pub fn print_records<T: Serialize>(format: OutputFormat, columns: &[Column], records: &[T]) -> Result<()> {
    let rows = to_rows(records)?;
    println!("{}", render(format, columns, &rows)?);
    Ok(())
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| cell_text(Some(v)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(k, v)| format!("{}={}", k, cell_text(Some(v))))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}
