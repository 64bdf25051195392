//! Interactive session - what `travel` does with no subcommand
//!
//! Greets the user, lists the numbered cities, asks for a starting city and
//! prints every matrix followed by every metric's routes.

use anyhow::Result;
use serde::Serialize;

use super::matrix::MatrixReport;
use super::nodes::NodeList;
use super::prompt;
use super::routes::RouteReport;
use crate::network::Network;
use crate::output::{heading, Output, OutputConfig, OutputFormat, Outputter};

/// Matrices and routes from one session, rendered together.
#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub matrices: MatrixReport,
    pub routes: RouteReport,
}

impl SessionReport {
    pub fn build(network: &Network, source: usize) -> Result<Self> {
        let metrics = network.select_metrics(None)?;
        Ok(Self {
            matrices: MatrixReport::build(network, &metrics),
            routes: RouteReport::build(network, &metrics, source)?,
        })
    }
}

impl Outputter for SessionReport {
    fn to_text(&self, config: &OutputConfig) -> String {
        let matrices = self
            .matrices
            .matrices
            .iter()
            .map(|m| m.caption.as_str())
            .zip(self.matrices.text_sections(config));
        let routes = self
            .routes
            .metrics
            .iter()
            .map(|m| m.progress.as_str())
            .zip(self.routes.text_sections(config));

        matrices
            .map(|(caption, section)| format!("{}:\n{}", caption, section))
            .chain(routes.map(|(progress, section)| format!("{}\n{}", progress, section)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_table(&self, config: &OutputConfig) -> String {
        format!(
            "{}\n\n{}",
            self.matrices.to_table(config),
            self.routes.to_table(config)
        )
    }

    fn to_csv(&self, config: &OutputConfig) -> String {
        format!(
            "{}\n\n{}",
            self.matrices.to_csv(config),
            self.routes.to_csv(config)
        )
    }
}

/// Banner shown before the city list.
pub fn banner(network: &Network, config: &OutputConfig) -> String {
    format!(
        "{}\nHere are the cities:\n{}",
        heading(&format!("Welcome to the {} Travel Program!", network.name), config),
        NodeList::build(network).to_text(config)
    )
}

/// Run the interactive session.
pub fn run(network: &Network, config: &OutputConfig) -> Result<()> {
    // Machine-readable formats keep stdout to the report alone.
    if matches!(config.format, OutputFormat::Text | OutputFormat::Table) {
        println!("{}\n", banner(network, config));
    }

    let source = prompt::ask_source(network)?;
    tracing::info!("Starting city: {}", network.node_name(source));

    Output::new(SessionReport::build(network, source)?, config).render()
}
