//! Application configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/tally/config/tally.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/tally.toml");

/// Server bind and CORS settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: vec![],
        }
    }
}

/// Sizes of the list-style report views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    pub chart_months: usize,
    pub top_categories: usize,
    pub recent_transactions: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            chart_months: 6,
            top_categories: 5,
            recent_transactions: 5,
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Suggested categories; transactions are not restricted to these
    pub categories: Vec<String>,
    pub server: ServerSettings,
    pub reports: ReportSettings,
}

impl Config {
    /// Load from an explicit path, the data-dir override, or the embedded default
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(override_path) => {
                    tracing::debug!(path = %override_path.display(), "Using config override");
                    fs::read_to_string(&override_path)
                        .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
                }
                None => DEFAULT_CONFIG.to_string(),
            },
        };

        Self::parse(&content)
    }

    /// The embedded defaults
    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG)
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Config::default();

        if let Some(categories) = raw.categories {
            config.categories = categories;
        }

        if let Some(server) = raw.server {
            if let Some(host) = server.host {
                config.server.host = host;
            }
            if let Some(port) = server.port {
                config.server.port = port;
            }
            if let Some(origins) = server.allowed_origins {
                config.server.allowed_origins = origins;
            }
        }

        if let Some(reports) = raw.reports {
            if let Some(months) = reports.chart_months {
                config.reports.chart_months = months;
            }
            if let Some(top) = reports.top_categories {
                config.reports.top_categories = top;
            }
            if let Some(recent) = reports.recent_transactions {
                config.reports.recent_transactions = recent;
            }
        }

        Ok(config)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config").join("tally.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    categories: Option<Vec<String>>,
    server: Option<RawServer>,
    reports: Option<RawReports>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawReports {
    chart_months: Option<usize>,
    top_categories: Option<usize>,
    recent_transactions: Option<usize>,
}
