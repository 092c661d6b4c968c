//! Output formatting for entity listings and details.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

/// Maximum column width before truncation
const MAX_COLUMN_WIDTH: usize = 32;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Formats command results for display.
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Print a serializable value as pretty JSON.
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a list either as JSON or as a table built by `row`.
    pub fn list<T: Serialize>(
        &self,
        items: &[T],
        headers: &[&str],
        row: impl Fn(&T) -> Vec<String>,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&items),
            OutputFormat::Table => {
                let rows: Vec<Vec<String>> = items.iter().map(row).collect();
                print!("{}", render_table(headers, &rows));
                println!("{} row(s)", rows.len());
                Ok(())
            }
        }
    }

    /// Print one record either as JSON or as aligned `key: value` lines.
    pub fn detail<T: Serialize>(&self, item: &T, pairs: Vec<(&str, String)>) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(item),
            OutputFormat::Table => {
                let width = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
                for (key, value) in pairs {
                    println!("{:>width$}: {}", key, value, width = width);
                }
                Ok(())
            }
        }
    }

    /// Print a bare table, regardless of the configured format. Used for
    /// the secondary tables inside report and order details.
    pub fn table(&self, headers: &[&str], rows: Vec<Vec<String>>) {
        print!("{}", render_table(headers, &rows));
    }

    /// Print a short confirmation line (suppressed in JSON mode, where the
    /// payload already said everything).
    pub fn note(&self, message: &str) {
        if self.format == OutputFormat::Table {
            println!("{}", message);
        }
    }
}

/// Truncate a cell to the column cap with an ellipsis.
fn truncate_value(value: &str, max_width: usize) -> String {
    if value.len() <= max_width {
        value.to_string()
    } else if max_width <= 3 {
        value.chars().take(max_width).collect()
    } else {
        let take = max_width - 3;
        format!("{}...", value.chars().take(take).collect::<String>())
    }
}

/// Render a padded plain-text table.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| truncate_value(cell, MAX_COLUMN_WIDTH))
                .collect()
        })
        .collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    out.push_str(&header_line.join("  "));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let width = widths.get(i).copied().unwrap_or(cell.len());
                format!("{:<width$}", cell, width = width)
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_value() {
        assert_eq!(truncate_value("short", 32), "short");
        assert_eq!(truncate_value("abcdefghij", 6), "abc...");
        assert_eq!(truncate_value("abcdef", 2), "ab");
    }

    #[test]
    fn test_render_table_alignment() {
        let out = render_table(
            &["ID", "NAME"],
            &[
                vec!["p1".to_string(), "Widget".to_string()],
                vec!["p2".to_string(), "Gadget Deluxe".to_string()],
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  NAME");
        assert!(lines[1].starts_with("--"));
        assert_eq!(lines[2], "p1  Widget");
        assert_eq!(lines[3], "p2  Gadget Deluxe");
    }

    #[test]
    fn test_render_table_caps_wide_cells() {
        let long = "x".repeat(100);
        let out = render_table(&["VALUE"], &[vec![long]]);
        let widest = out.lines().map(|l| l.len()).max().unwrap();
        assert!(widest <= MAX_COLUMN_WIDTH);
    }
}
