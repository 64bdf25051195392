//! Output formatting module for the travel CLI
//!
//! Provides unified output formatting across all commands with support for
//! multiple formats: text (fixed-width columns), table (box-drawn),
//! json (machine-readable) and csv.
//!
//! Automatically detects TTY context to adjust colors and truncation behavior.

use clap::ValueEnum;
use serde::Serialize;
use std::io::IsTerminal;
use std::str::FromStr;
use travel_core::Distance;

mod csv;
mod json;
mod table;
mod text;

pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;
pub use self::table::TableOutput;
pub use self::text::TextOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width text columns (default)
    #[default]
    Text,
    /// Box-drawn tables
    Table,
    /// JSON format for machine consumption
    Json,
    /// CSV format for spreadsheet/data processing
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Disable colored output
    pub no_color: bool,
    /// Disable wrapping of wide tables
    pub no_truncate: bool,
    /// Override terminal width (None = auto-detect)
    pub width: Option<usize>,
    /// Compact mode (less whitespace)
    pub compact: bool,
    /// Decimal places for weights
    pub precision: usize,
}

impl OutputConfig {
    /// Create a new OutputConfig with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            no_color: false,
            no_truncate: false,
            width: None,
            compact: false,
            precision: crate::config::DEFAULT_PRECISION,
        }
    }

    /// Create an OutputConfig with automatic TTY detection and optional color override.
    ///
    /// When output is not a TTY (piped or redirected):
    /// - Colors are disabled (unless `color_override` is `Some(true)`)
    /// - Wrapping is disabled
    pub fn auto_detect_with_color_override(
        format: OutputFormat,
        color_override: Option<bool>,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let use_color = color_override.unwrap_or(is_tty);
        Self {
            no_color: !use_color,
            no_truncate: !is_tty,
            ..Self::new(format)
        }
    }

    /// Get the effective terminal width
    pub fn effective_width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            terminal_size::terminal_size()
                .map(|(w, _)| w.0 as usize)
                .unwrap_or(80)
        })
    }

    /// Check if colors should be used
    pub fn use_colors(&self) -> bool {
        !self.no_color
    }

    /// Check if wrapping should be applied
    pub fn should_truncate(&self) -> bool {
        !self.no_truncate
    }

    /// Builder: disable colors
    #[cfg(test)]
    pub fn without_colors(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Builder: disable wrapping
    #[cfg(test)]
    pub fn without_truncation(mut self) -> Self {
        self.no_truncate = true;
        self
    }

    /// Builder: set width
    #[cfg(test)]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Builder: enable compact mode
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Builder: set decimal places
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Format a weight with the configured precision (`INF` when unreachable).
    pub fn weight(&self, distance: Distance) -> String {
        format!("{:.*}", self.precision, distance)
    }
}

/// Bold section heading, plain when colors are off.
pub fn heading(text: &str, config: &OutputConfig) -> String {
    use colored::Colorize;
    if config.use_colors() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Trait for types that can be formatted as output
///
/// Types implementing this trait can be rendered in any supported format.
pub trait Outputter: Serialize {
    /// Render as fixed-width text
    fn to_text(&self, config: &OutputConfig) -> String;

    /// Render as a box-drawn table
    fn to_table(&self, config: &OutputConfig) -> String {
        self.to_text(config)
    }

    /// Render as JSON format
    fn to_json(&self, config: &OutputConfig) -> String {
        JsonOutput::format(self, config)
    }

    /// Render as CSV format
    fn to_csv(&self, config: &OutputConfig) -> String;

    /// Render using the format specified in config
    fn render(&self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Text => self.to_text(config),
            OutputFormat::Table => self.to_table(config),
            OutputFormat::Json => self.to_json(config),
            OutputFormat::Csv => self.to_csv(config),
        }
    }

    /// Render and print to stdout
    fn output(&self, config: &OutputConfig) {
        println!("{}", self.render(config));
    }
}

/// Result wrapper for formatted output with automatic format selection
pub struct Output<'a, T> {
    data: T,
    config: &'a OutputConfig,
}

impl<'a, T: Outputter> Output<'a, T> {
    pub fn new(data: T, config: &'a OutputConfig) -> Self {
        Self { data, config }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        self.data.output(self.config);
        Ok(())
    }

    /// Get the rendered string without printing
    #[cfg(test)]
    pub fn render_to_string(&self) -> String {
        self.data.render(self.config)
    }
}
