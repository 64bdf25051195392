//! Travel configuration loading from `.travelrc.toml`.
//!
//! Configuration is optional. Without a config file the built-in network is
//! used, results are printed as plain text, and weights get two decimals.
//!
//! # Example Configuration
//!
//! ```toml
//! [network]
//! path = "networks/inland-empire.toml"
//!
//! [output]
//! format = "table"
//! color = true
//! precision = 2
//!
//! [routes]
//! default_source = 0
//! ```

use serde::Deserialize;
use std::path::Path;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".travelrc.toml";

/// Decimal places used when nothing else is configured.
pub const DEFAULT_PRECISION: usize = 2;

/// Root configuration structure loaded from `.travelrc.toml`.
///
/// All sections are optional and fall back to defaults.
#[derive(Debug, Deserialize, Default)]
pub struct TravelConfig {
    /// Which network (nodes + weight matrices) to plan over.
    #[serde(default)]
    pub network: NetworkSettings,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,

    /// Defaults for the `routes` command.
    #[serde(default)]
    pub routes: RouteSettings,
}

/// Network source selection.
#[derive(Debug, Deserialize, Default)]
pub struct NetworkSettings {
    /// Path to a network TOML file, relative to the working directory.
    ///
    /// When unset, the built-in Inland Empire network is used.
    #[serde(default)]
    pub path: Option<String>,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format.
    ///
    /// Valid values: `text`, `table`, `json`, `csv`
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Defaults to TTY detection.
    #[serde(default)]
    pub color: Option<bool>,

    /// Decimal places for weights.
    #[serde(default)]
    pub precision: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RouteSettings {
    /// Starting node used when `routes` is run without `--from`.
    #[serde(default)]
    pub default_source: Option<i64>,
}

impl TravelConfig {
    /// Load configuration from `.travelrc.toml` in the given directory.
    ///
    /// If the file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {}", config_path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Configured network file, if any.
    pub fn network_path(&self) -> Option<&str> {
        self.network.path.as_deref()
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Configured color preference, or `None` to auto-detect.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    /// Decimal places for weights.
    pub fn precision(&self) -> usize {
        self.output.precision.unwrap_or(DEFAULT_PRECISION)
    }

    pub fn default_source(&self) -> Option<i64> {
        self.routes.default_source
    }
}
