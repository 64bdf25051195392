//! Table output formatting using the `tabled` crate
//!
//! Provides box-drawn tables with:
//! - Per-column alignment
//! - Terminal width awareness
//! - Compact (borderless) style

use super::OutputConfig;
use tabled::{
    builder::Builder,
    settings::{object::Columns, style::Style, Alignment, Modify, Width},
};

/// Table output formatter
pub struct TableOutput;

impl TableOutput {
    /// Create a table from rows of strings
    ///
    /// Columns listed in `right_aligned` are right-aligned (weights); all
    /// others are left-aligned.
    pub fn from_rows(
        headers: &[&str],
        rows: &[Vec<String>],
        right_aligned: &[usize],
        config: &OutputConfig,
    ) -> String {
        if rows.is_empty() {
            return "(no results)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(headers.iter().copied());

        for row in rows {
            builder.push_record(row.iter().map(|s| s.as_str()));
        }

        let mut table = builder.build();

        if config.compact {
            table.with(Style::blank());
        } else {
            table.with(Style::rounded());
        }

        for &col in right_aligned {
            table.with(Modify::new(Columns::single(col)).with(Alignment::right()));
        }

        if config.should_truncate() {
            let term_width = config.effective_width();
            table.with(Width::wrap(term_width));
        }

        table.to_string()
    }
}
