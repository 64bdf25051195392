//! Matrix command - show the raw weight matrices
//!
//! - `travel matrix` - every metric
//! - `travel matrix --metric distance` - one metric

use anyhow::Result;
use serde::Serialize;

use crate::network::{Metric, Network};
use crate::output::{
    heading, CsvOutput, Output, OutputConfig, Outputter, TableOutput, TextOutput,
};
use travel_core::Distance;

/// Weight matrices for the selected metrics.
#[derive(Debug, Serialize)]
pub struct MatrixReport {
    pub network: String,
    pub nodes: Vec<String>,
    pub matrices: Vec<MatrixView>,
}

#[derive(Debug, Serialize)]
pub struct MatrixView {
    pub key: String,
    pub title: String,
    #[serde(skip)]
    pub caption: String,
    /// Row-major; `weights[i][j]` is the weight from node i to node j.
    pub weights: Vec<Vec<f64>>,
}

impl MatrixReport {
    pub fn build(network: &Network, metrics: &[&Metric]) -> Self {
        let matrices = metrics
            .iter()
            .map(|metric| MatrixView {
                key: metric.key.clone(),
                title: metric.title.clone(),
                caption: metric.caption.clone(),
                weights: metric.graph.rows().map(<[f64]>::to_vec).collect(),
            })
            .collect();

        Self {
            network: network.name.clone(),
            nodes: network.nodes.clone(),
            matrices,
        }
    }

    fn formatted_row(row: &[f64], config: &OutputConfig) -> Vec<String> {
        row.iter()
            .map(|&w| config.weight(Distance::Finite(w)))
            .collect()
    }

    /// One fixed-width block per matrix, each ending in a newline.
    pub fn text_sections(&self, config: &OutputConfig) -> Vec<String> {
        let formatted: Vec<Vec<Vec<String>>> = self
            .matrices
            .iter()
            .map(|m| {
                m.weights
                    .iter()
                    .map(|row| Self::formatted_row(row, config))
                    .collect()
            })
            .collect();

        let width = TextOutput::column_width(
            self.nodes
                .iter()
                .chain(formatted.iter().flatten().flatten())
                .map(String::as_str),
        );
        let header: Vec<&str> = std::iter::once(" ")
            .chain(self.nodes.iter().map(String::as_str))
            .collect();

        self.matrices
            .iter()
            .zip(&formatted)
            .map(|(matrix, rows)| {
                let mut out = String::new();
                out.push_str(&heading(&format!("{}:", matrix.title), config));
                out.push_str("\n\n");
                out.push_str(&TextOutput::right(&header, width));
                out.push('\n');

                for (name, weights) in self.nodes.iter().zip(rows) {
                    let cells: Vec<&str> = std::iter::once(name.as_str())
                        .chain(weights.iter().map(String::as_str))
                        .collect();
                    out.push_str(&TextOutput::right(&cells, width));
                    out.push('\n');
                }
                out
            })
            .collect()
    }
}

impl Outputter for MatrixReport {
    fn to_text(&self, config: &OutputConfig) -> String {
        self.text_sections(config).join("\n")
    }

    fn to_table(&self, config: &OutputConfig) -> String {
        let headers: Vec<&str> = std::iter::once("")
            .chain(self.nodes.iter().map(String::as_str))
            .collect();
        let weight_columns: Vec<usize> = (1..=self.nodes.len()).collect();

        self.matrices
            .iter()
            .map(|matrix| {
                let rows: Vec<Vec<String>> = self
                    .nodes
                    .iter()
                    .zip(&matrix.weights)
                    .map(|(name, row)| {
                        std::iter::once(name.clone())
                            .chain(Self::formatted_row(row, config))
                            .collect()
                    })
                    .collect();
                format!(
                    "{}\n{}",
                    heading(&matrix.title, config),
                    TableOutput::from_rows(&headers, &rows, &weight_columns, config)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn to_csv(&self, config: &OutputConfig) -> String {
        let headers: Vec<&str> = ["metric", "node"]
            .into_iter()
            .chain(self.nodes.iter().map(String::as_str))
            .collect();

        let rows: Vec<Vec<String>> = self
            .matrices
            .iter()
            .flat_map(|matrix| {
                self.nodes.iter().zip(&matrix.weights).map(move |(name, row)| {
                    [matrix.key.clone(), name.clone()]
                        .into_iter()
                        .chain(Self::formatted_row(row, config))
                        .collect()
                })
            })
            .collect();

        CsvOutput::from_rows(&headers, &rows)
    }
}

/// Run the matrix command.
pub fn run(network: &Network, metric: Option<&str>, config: &OutputConfig) -> Result<()> {
    let metrics = network.select_metrics(metric)?;
    Output::new(MatrixReport::build(network, &metrics), config).render()
}
