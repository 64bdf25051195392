//! Nodes command - list the numbered nodes of the network

use anyhow::Result;
use serde::Serialize;

use crate::network::Network;
use crate::output::{CsvOutput, Output, OutputConfig, Outputter, TableOutput};

#[derive(Debug, Serialize)]
pub struct NodeList {
    pub network: String,
    pub nodes: Vec<NodeEntry>,
}

#[derive(Debug, Serialize)]
pub struct NodeEntry {
    pub index: usize,
    pub name: String,
}

impl NodeList {
    pub fn build(network: &Network) -> Self {
        Self {
            network: network.name.clone(),
            nodes: network
                .nodes
                .iter()
                .enumerate()
                .map(|(index, name)| NodeEntry {
                    index,
                    name: name.clone(),
                })
                .collect(),
        }
    }
}

impl Outputter for NodeList {
    fn to_text(&self, _config: &OutputConfig) -> String {
        self.nodes
            .iter()
            .map(|n| format!("{}: {}", n.index, n.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_table(&self, config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .nodes
            .iter()
            .map(|n| vec![n.index.to_string(), n.name.clone()])
            .collect();
        TableOutput::from_rows(&["#", "Name"], &rows, &[0], config)
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .nodes
            .iter()
            .map(|n| vec![n.index.to_string(), n.name.clone()])
            .collect();
        CsvOutput::from_rows(&["index", "name"], &rows)
    }
}

/// Run the nodes command.
pub fn run(network: &Network, config: &OutputConfig) -> Result<()> {
    Output::new(NodeList::build(network), config).render()
}
