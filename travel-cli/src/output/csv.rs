//! CSV output formatting for data export.
//!
//! Cells containing commas, quotes or newlines are quoted, with embedded
//! quotes doubled.

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    /// Render a header row followed by data rows.
    pub fn from_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(
            headers
                .iter()
                .map(|h| Self::escape(h))
                .collect::<Vec<_>>()
                .join(","),
        );
        for row in rows {
            lines.push(
                row.iter()
                    .map(|cell| Self::escape(cell))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        lines.join("\n")
    }

    /// Escape a value for CSV output
    pub fn escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
