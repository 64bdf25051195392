//! Named nodes and their weight matrices.
//!
//! A [`Network`] pairs the ordered node names with one [`GraphModel`] per
//! metric (distance, cost, ...). The engine only ever sees indices; this
//! module is where names live.
//!
//! Networks come either from the built-in Inland Empire data set or from a
//! TOML file:
//!
//! ```toml
//! name = "Inland Empire Solar Sales"
//! nodes = ["Riverside", "Moreno Valley", "Perris", "Hemet"]
//!
//! [[metrics]]
//! key = "distance"
//! label = "Shortest Distance"
//! title = "Distances (Miles)"
//! weights = [[0, 16, 24, 33], [16, 0, 18, 26], [24, 18, 0, 30], [33, 26, 30, 0]]
//! ```
//!
//! `caption` and `progress` are optional and default to
//! "Adjacency Matrix of {title}" and "Calculating {label} paths...".

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use travel_core::{checked_index, GraphError, GraphModel};

const BUILTIN_NAME: &str = "Inland Empire Solar Sales";

const BUILTIN_NODES: [&str; 4] = ["Riverside", "Moreno Valley", "Perris", "Hemet"];

/// Miles between cities.
const BUILTIN_DISTANCES: [[i32; 4]; 4] = [
    [0, 16, 24, 33],
    [16, 0, 18, 26],
    [24, 18, 0, 30],
    [33, 26, 30, 0],
];

/// Dollars between cities.
const BUILTIN_COSTS: [[f64; 4]; 4] = [
    [0.0, 2.40, 3.60, 4.95],
    [2.40, 0.0, 2.70, 4.35],
    [3.60, 2.70, 0.0, 4.80],
    [4.95, 4.35, 4.80, 0.0],
];

/// Problems with a network definition.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Network has no nodes")]
    NoNodes,

    #[error("Duplicate node name: {0}")]
    DuplicateNode(String),

    #[error("Network has no metrics")]
    NoMetrics,

    #[error("Duplicate metric key: {0}")]
    DuplicateMetric(String),

    #[error("Invalid weights for metric '{metric}': {source}")]
    Graph {
        metric: String,
        #[source]
        source: GraphError,
    },

    #[error("Unknown metric '{requested}' (available: {available})")]
    UnknownMetric { requested: String, available: String },
}

/// One weight metric over the network's nodes.
#[derive(Debug, Clone)]
pub struct Metric {
    /// Short identifier used on the command line (`--metric cost`).
    pub key: String,
    /// Heading for route results, e.g. "Lowest Cost".
    pub label: String,
    /// Heading for the matrix, e.g. "Costs (Dollars)".
    pub title: String,
    /// Line announcing the matrix in a session, e.g. "Adjacency Matrix of Costs".
    pub caption: String,
    /// Line announcing the route results, e.g. "Calculating shortest paths...".
    pub progress: String,
    pub graph: GraphModel,
}

impl Metric {
    fn new<W, R>(
        key: &str,
        label: &str,
        title: &str,
        node_count: usize,
        rows: &[R],
    ) -> Result<Self, NetworkError>
    where
        W: Copy + Into<f64>,
        R: AsRef<[W]>,
    {
        let graph = GraphModel::new(node_count, rows).map_err(|source| NetworkError::Graph {
            metric: key.to_string(),
            source,
        })?;
        Ok(Self {
            key: key.to_string(),
            label: label.to_string(),
            title: title.to_string(),
            caption: format!("Adjacency Matrix of {}", title),
            progress: format!("Calculating {} paths...", label.to_lowercase()),
            graph,
        })
    }

    fn with_caption(mut self, caption: Option<&str>) -> Self {
        if let Some(caption) = caption {
            self.caption = caption.to_string();
        }
        self
    }

    fn with_progress(mut self, progress: Option<&str>) -> Self {
        if let Some(progress) = progress {
            self.progress = progress.to_string();
        }
        self
    }
}

/// Ordered node names plus one graph per metric.
#[derive(Debug, Clone)]
pub struct Network {
    pub name: String,
    pub nodes: Vec<String>,
    pub metrics: Vec<Metric>,
}

/// On-disk shape of a network file.
#[derive(Debug, Deserialize)]
struct NetworkFile {
    #[serde(default)]
    name: Option<String>,
    nodes: Vec<String>,
    #[serde(default)]
    metrics: Vec<MetricFile>,
}

#[derive(Debug, Deserialize)]
struct MetricFile {
    key: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    progress: Option<String>,
    weights: Vec<Vec<f64>>,
}

impl Network {
    /// The four Inland Empire cities with distance and cost metrics.
    pub fn builtin() -> Result<Self> {
        let nodes: Vec<String> = BUILTIN_NODES.iter().map(|s| s.to_string()).collect();
        let n = nodes.len();
        let metrics = vec![
            Metric::new(
                "distance",
                "Shortest Distance",
                "Distances (Miles)",
                n,
                &BUILTIN_DISTANCES,
            )?
            .with_caption(Some("Adjacency Matrix of Distances"))
            .with_progress(Some("Calculating shortest paths...")),
            Metric::new("cost", "Lowest Cost", "Costs (Dollars)", n, &BUILTIN_COSTS)?
                .with_caption(Some("Adjacency Matrix of Costs"))
                .with_progress(Some("Calculating most cost-effective paths...")),
        ];
        Ok(Self {
            name: BUILTIN_NAME.to_string(),
            nodes,
            metrics,
        })
    }

    /// Load and validate a network TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read network file: {}", path.display()))?;
        let network = Self::parse(&content)
            .with_context(|| format!("Invalid network file: {}", path.display()))?;
        tracing::info!(
            "Loaded network '{}' ({} nodes, {} metrics) from {}",
            network.name,
            network.nodes.len(),
            network.metrics.len(),
            path.display()
        );
        Ok(network)
    }

    /// Parse and validate network TOML.
    pub fn parse(content: &str) -> Result<Self> {
        let file: NetworkFile = toml::from_str(content).context("Failed to parse network TOML")?;
        Ok(Self::from_file(file)?)
    }

    fn from_file(file: NetworkFile) -> Result<Self, NetworkError> {
        if file.nodes.is_empty() {
            return Err(NetworkError::NoNodes);
        }
        let mut seen = HashSet::new();
        for node in &file.nodes {
            if !seen.insert(node.as_str()) {
                return Err(NetworkError::DuplicateNode(node.clone()));
            }
        }

        if file.metrics.is_empty() {
            return Err(NetworkError::NoMetrics);
        }
        let mut keys = HashSet::new();
        let n = file.nodes.len();
        let mut metrics = Vec::with_capacity(file.metrics.len());
        for metric in &file.metrics {
            if !keys.insert(metric.key.as_str()) {
                return Err(NetworkError::DuplicateMetric(metric.key.clone()));
            }
            let label = metric.label.as_deref().unwrap_or(&metric.key);
            let title = metric.title.as_deref().unwrap_or(&metric.key);
            metrics.push(
                Metric::new(&metric.key, label, title, n, &metric.weights)?
                    .with_caption(metric.caption.as_deref())
                    .with_progress(metric.progress.as_deref()),
            );
        }

        Ok(Self {
            name: file.name.unwrap_or_else(|| "Unnamed network".to_string()),
            nodes: file.nodes,
            metrics,
        })
    }

    /// Resolve the network to use: an explicit file, or the built-in data.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Display name of a node index.
    pub fn node_name(&self, index: usize) -> &str {
        self.nodes.get(index).map(String::as_str).unwrap_or("?")
    }

    /// Validate a raw (possibly negative) node number.
    pub fn node_index(&self, raw: i64) -> Result<usize, GraphError> {
        checked_index(raw, self.nodes.len())
    }

    /// All metrics, or only the one whose key matches `key`.
    pub fn select_metrics(&self, key: Option<&str>) -> Result<Vec<&Metric>, NetworkError> {
        match key {
            None => Ok(self.metrics.iter().collect()),
            Some(key) => self
                .metrics
                .iter()
                .find(|m| m.key.eq_ignore_ascii_case(key))
                .map(|m| vec![m])
                .ok_or_else(|| NetworkError::UnknownMetric {
                    requested: key.to_string(),
                    available: self
                        .metrics
                        .iter()
                        .map(|m| m.key.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
name = "Triangle"
nodes = ["A", "B", "C"]

[[metrics]]
key = "time"
label = "Fastest"
title = "Minutes"
weights = [[0, 5, 0], [5, 0, 2.5], [0, 2.5, 0]]
"#;

    #[test]
    fn test_builtin_network() {
        let network = Network::builtin().unwrap();
        assert_eq!(network.name, BUILTIN_NAME);
        assert_eq!(network.nodes, vec!["Riverside", "Moreno Valley", "Perris", "Hemet"]);
        assert_eq!(network.metrics.len(), 2);
        assert_eq!(network.metrics[0].key, "distance");
        assert_eq!(network.metrics[0].graph.weight_between(0, 3).unwrap(), 33.0);
        assert_eq!(network.metrics[1].key, "cost");
        assert_eq!(network.metrics[1].graph.weight_between(1, 3).unwrap(), 4.35);
    }

    #[test]
    fn test_parse_network() {
        let network = Network::parse(SAMPLE).unwrap();
        assert_eq!(network.name, "Triangle");
        assert_eq!(network.node_count(), 3);
        assert_eq!(network.metrics[0].label, "Fastest");
        assert!(!network.metrics[0].graph.has_edge(0, 2));
        assert_eq!(network.metrics[0].graph.weight_between(1, 2).unwrap(), 2.5);
    }

    #[test]
    fn test_labels_default_to_key() {
        let network = Network::parse(
            "nodes = [\"A\", \"B\"]\n[[metrics]]\nkey = \"fuel\"\nweights = [[0, 1], [1, 0]]\n",
        )
        .unwrap();
        assert_eq!(network.name, "Unnamed network");
        assert_eq!(network.metrics[0].label, "fuel");
        assert_eq!(network.metrics[0].title, "fuel");
        assert_eq!(network.metrics[0].caption, "Adjacency Matrix of fuel");
        assert_eq!(network.metrics[0].progress, "Calculating fuel paths...");
    }

    #[test]
    fn test_session_captions() {
        let network = Network::builtin().unwrap();
        assert_eq!(network.metrics[0].caption, "Adjacency Matrix of Distances");
        assert_eq!(network.metrics[1].progress, "Calculating most cost-effective paths...");

        let network = Network::parse(
            "nodes = [\"A\"]\n[[metrics]]\nkey = \"k\"\ncaption = \"Grid\"\nprogress = \"Working...\"\nweights = [[0]]\n",
        )
        .unwrap();
        assert_eq!(network.metrics[0].caption, "Grid");
        assert_eq!(network.metrics[0].progress, "Working...");
    }

    #[test]
    fn test_rejects_wrong_shape() {
        let err = Network::parse(
            "nodes = [\"A\", \"B\", \"C\"]\n[[metrics]]\nkey = \"x\"\nweights = [[0, 1], [1, 0]]\n",
        )
        .unwrap_err();
        let err = err.downcast::<NetworkError>().unwrap();
        match err {
            NetworkError::Graph { metric, source } => {
                assert_eq!(metric, "x");
                assert!(source.is_shape());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        let err = Network::parse("nodes = [\"A\", \"A\"]\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NetworkError>(),
            Some(NetworkError::DuplicateNode(name)) if name == "A"
        ));

        let err = Network::parse("nodes = []\n").unwrap_err();
        assert!(matches!(err.downcast_ref::<NetworkError>(), Some(NetworkError::NoNodes)));

        let err = Network::parse("nodes = [\"A\"]\n").unwrap_err();
        assert!(matches!(err.downcast_ref::<NetworkError>(), Some(NetworkError::NoMetrics)));

        let err = Network::parse(
            "nodes = [\"A\"]\n[[metrics]]\nkey = \"k\"\nweights = [[0]]\n[[metrics]]\nkey = \"k\"\nweights = [[0]]\n",
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NetworkError>(),
            Some(NetworkError::DuplicateMetric(_))
        ));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let err = Network::parse(
            "nodes = [\"A\", \"B\"]\n[[metrics]]\nkey = \"k\"\nweights = [[0, -3], [1, 0]]\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid weights for metric 'k'"));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_node_index() {
        let network = Network::builtin().unwrap();
        assert_eq!(network.node_index(2).unwrap(), 2);
        assert!(network.node_index(-1).unwrap_err().is_out_of_range());
        assert!(network.node_index(4).unwrap_err().is_out_of_range());
        assert_eq!(network.node_name(3), "Hemet");

        let graph = &network.metrics[0].graph;
        for raw in -2..6 {
            assert_eq!(network.node_index(raw), graph.node_index(raw));
        }
    }

    #[test]
    fn test_select_metrics() {
        let network = Network::builtin().unwrap();
        assert_eq!(network.select_metrics(None).unwrap().len(), 2);

        let selected = network.select_metrics(Some("COST")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "Lowest Cost");

        let err = network.select_metrics(Some("time")).unwrap_err();
        assert!(err.to_string().contains("distance, cost"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Network::load(Path::new("/nonexistent/network.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read network file"));
    }
}
