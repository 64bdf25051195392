//! Routes command - shortest paths from one node, per metric
//!
//! - `travel routes --from 0` - every metric from Riverside
//! - `travel routes --from 2 --metric cost` - only the cost metric

use anyhow::Result;
use serde::Serialize;
use travel_core::{shortest_paths_parallel, Distance, PathResult};

use super::prompt;
use crate::network::{Metric, Network};
use crate::output::{
    heading, CsvOutput, Output, OutputConfig, Outputter, TableOutput, TextOutput,
};

/// Separator between node names in a rendered path.
pub const PATH_SEPARATOR: &str = " -> ";

/// Shown instead of a path when the destination is unreachable.
pub const NO_PATH: &str = "No Path";

const DESTINATION_HEADER: &str = "Destination";
const WEIGHT_HEADER: &str = "Distance/Cost";

/// Route results for every selected metric from one source node.
#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub network: String,
    pub source: NodeRef,
    pub metrics: Vec<MetricRoutes>,
}

#[derive(Debug, Serialize)]
pub struct NodeRef {
    pub index: usize,
    pub name: String,
}

/// Results of one engine run, with names resolved.
#[derive(Debug, Serialize)]
pub struct MetricRoutes {
    pub key: String,
    pub label: String,
    #[serde(skip)]
    pub progress: String,
    pub routes: Vec<RouteRow>,
}

#[derive(Debug, Serialize)]
pub struct RouteRow {
    pub destination: NodeRef,
    /// `null` when unreachable.
    pub total_weight: Distance,
    pub hops: Option<usize>,
    pub path: Vec<String>,
}

impl RouteRow {
    fn from_result(network: &Network, result: &PathResult) -> Self {
        Self {
            destination: NodeRef {
                index: result.destination,
                name: network.node_name(result.destination).to_string(),
            },
            total_weight: result.total_weight,
            hops: result.hops(),
            path: result
                .path
                .iter()
                .map(|&idx| network.node_name(idx).to_string())
                .collect(),
        }
    }

    /// Path names joined by an arrow, or "No Path".
    pub fn path_display(&self) -> String {
        if self.path.is_empty() {
            NO_PATH.to_string()
        } else {
            self.path.join(PATH_SEPARATOR)
        }
    }
}

impl RouteReport {
    /// Run the engine for every metric (in parallel) and resolve names.
    pub fn build(network: &Network, metrics: &[&Metric], source: usize) -> Result<Self> {
        let graphs: Vec<_> = metrics.iter().map(|m| &m.graph).collect();
        let results = shortest_paths_parallel(&graphs, source)?;

        let metrics = metrics
            .iter()
            .zip(results)
            .map(|(metric, paths)| {
                tracing::debug!(
                    "{}: {} of {} destinations reachable",
                    metric.key,
                    paths.reachable_count(),
                    paths.len()
                );
                MetricRoutes {
                    key: metric.key.clone(),
                    label: metric.label.clone(),
                    progress: metric.progress.clone(),
                    routes: paths
                        .iter()
                        .map(|r| RouteRow::from_result(network, r))
                        .collect(),
                }
            })
            .collect();

        Ok(Self {
            network: network.name.clone(),
            source: NodeRef {
                index: source,
                name: network.node_name(source).to_string(),
            },
            metrics,
        })
    }

    fn title(&self, metric: &MetricRoutes) -> String {
        format!("Results for {} from {}:", metric.label, self.source.name)
    }

    /// One fixed-width block per metric, each ending in a newline.
    pub fn text_sections(&self, config: &OutputConfig) -> Vec<String> {
        let rows = || self.metrics.iter().flat_map(|m| m.routes.iter());
        let weights: Vec<String> = rows().map(|r| config.weight(r.total_weight)).collect();
        let width = TextOutput::column_width(
            rows()
                .map(|r| r.destination.name.as_str())
                .chain(weights.iter().map(String::as_str))
                .chain([DESTINATION_HEADER, WEIGHT_HEADER]),
        );

        let mut sections = Vec::with_capacity(self.metrics.len());
        for metric in &self.metrics {
            let mut out = String::new();
            out.push_str(&heading(&self.title(metric), config));
            out.push('\n');
            out.push_str(&TextOutput::left(&[DESTINATION_HEADER, WEIGHT_HEADER], width));
            out.push_str("Path\n");
            for row in &metric.routes {
                let weight = config.weight(row.total_weight);
                let cells = [row.destination.name.as_str(), weight.as_str()];
                out.push_str(&TextOutput::left(&cells, width));
                out.push_str(&row.path_display());
                out.push('\n');
            }
            sections.push(out);
        }
        sections
    }
}

impl Outputter for RouteReport {
    fn to_text(&self, config: &OutputConfig) -> String {
        self.text_sections(config).join("\n")
    }

    fn to_table(&self, config: &OutputConfig) -> String {
        let mut sections = Vec::with_capacity(self.metrics.len());
        for metric in &self.metrics {
            let rows: Vec<Vec<String>> = metric
                .routes
                .iter()
                .map(|row| {
                    vec![
                        row.destination.name.clone(),
                        config.weight(row.total_weight),
                        row.hops.map(|h| h.to_string()).unwrap_or_else(|| "-".to_string()),
                        row.path_display(),
                    ]
                })
                .collect();
            sections.push(format!(
                "{}\n{}",
                heading(&self.title(metric), config),
                TableOutput::from_rows(
                    &[DESTINATION_HEADER, WEIGHT_HEADER, "Hops", "Path"],
                    &rows,
                    &[1, 2],
                    config
                )
            ));
        }
        sections.join("\n\n")
    }

    fn to_csv(&self, config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .metrics
            .iter()
            .flat_map(|metric| {
                metric.routes.iter().map(move |row| {
                    vec![
                        metric.key.clone(),
                        self.source.name.clone(),
                        row.destination.name.clone(),
                        config.weight(row.total_weight),
                        row.hops.map(|h| h.to_string()).unwrap_or_default(),
                        row.path.join(PATH_SEPARATOR),
                    ]
                })
            })
            .collect();
        CsvOutput::from_rows(
            &["metric", "source", "destination", "total_weight", "hops", "path"],
            &rows,
        )
    }
}

/// Run the routes command.
///
/// `from` is the raw node number; without it the user is prompted.
pub fn run(
    network: &Network,
    from: Option<i64>,
    metric: Option<&str>,
    config: &OutputConfig,
) -> Result<()> {
    let metrics = network.select_metrics(metric)?;
    let source = match from {
        Some(raw) => prompt::validate_source(network, raw)?,
        None => prompt::ask_source(network)?,
    };

    tracing::info!("Planning routes from {}", network.node_name(source));
    let report = RouteReport::build(network, &metrics, source)?;
    Output::new(report, config).render()
}
