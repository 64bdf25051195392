//! travel - route planning over small weighted networks
//!
//! Finds the cheapest way from one city to every other under each metric
//! (distance, cost, ...) of a network, and prints the weight matrices the
//! answers were computed from.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod network;
mod output;

use commands::*;
use config::TravelConfig;
use network::Network;
use output::{OutputConfig, OutputFormat};

/// Shortest routes between cities, by distance and by cost.
#[derive(Parser)]
#[command(name = "travel")]
#[command(author, version)]
#[command(about = "Shortest routes between cities, by distance and by cost")]
#[command(propagate_version = true)]
#[command(next_help_heading = "Options")]
#[command(after_help = "Quick Start:
  travel                      Pick a starting city interactively
  travel routes --from 0      Routes from Riverside under every metric
  travel matrix               Show the weight matrices
  travel nodes                List cities and their numbers")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Network file to plan over (defaults to the built-in cities)
    #[arg(long, global = true, value_name = "FILE")]
    network: Option<PathBuf>,

    /// Decimal places for weights
    #[arg(long, global = true, value_name = "N")]
    precision: Option<usize>,

    /// Compact output (borderless tables, single-line JSON)
    #[arg(long, global = true)]
    compact: bool,

    /// Show detailed version information
    #[arg(long = "version-verbose")]
    version_verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest routes from one city under each metric
    #[command(visible_alias = "r")]
    Routes {
        /// Number of the starting city (prompted for when omitted)
        #[arg(long, short, allow_negative_numbers = true)]
        from: Option<i64>,

        /// Only this metric (e.g. distance, cost)
        #[arg(long, short)]
        metric: Option<String>,
    },

    /// Show the weight matrices
    #[command(visible_alias = "m")]
    Matrix {
        /// Only this metric (e.g. distance, cost)
        #[arg(long, short)]
        metric: Option<String>,
    },

    /// List cities with their numbers
    Nodes,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Print verbose version information
fn print_verbose_version() {
    use colored::Colorize;

    let cli_version = env!("CARGO_PKG_VERSION");
    let platform = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    println!("travel {}", cli_version);
    println!("  {:<12} {}", "travel-cli:".cyan(), cli_version);
    println!("  {:<12} {}", "travel-core:".cyan(), travel_core::version());
    println!("  {:<12} {}", "Platform:".cyan(), platform);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Handle verbose version flag
    if cli.version_verbose {
        print_verbose_version();
        return Ok(());
    }

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .travelrc.toml
    let config = TravelConfig::load(Path::new("."));

    // Resolve output format: CLI flag > config default > Text
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    });

    let mut output = OutputConfig::auto_detect_with_color_override(format, config.use_color())
        .with_precision(cli.precision.unwrap_or_else(|| config.precision()));
    if cli.compact {
        output = output.compact();
    }
    colored::control::set_override(output.use_colors());

    // Network file: CLI flag > config > built-in
    let network_path = cli
        .network
        .clone()
        .or_else(|| config.network_path().map(PathBuf::from));
    let load_network = || Network::resolve(network_path.as_deref());

    match cli.command {
        None => interactive::run(&load_network()?, &output),
        Some(Commands::Routes { from, metric }) => {
            let from = from.or_else(|| config.default_source());
            routes::run(&load_network()?, from, metric.as_deref(), &output)
        }
        Some(Commands::Matrix { metric }) => {
            matrix::run(&load_network()?, metric.as_deref(), &output)
        }
        Some(Commands::Nodes) => nodes::run(&load_network()?, &output),
    }
}
