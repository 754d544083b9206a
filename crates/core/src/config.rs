use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::buffer::{SizeLimits, MAX_BUFFER_SIZE, MIN_BUFFER_SIZE};

/// Default traversal depth for directory scans.
pub const DEFAULT_MAX_DEPTH: i32 = 16;

fn default_min_file_size() -> usize {
    MIN_BUFFER_SIZE
}

fn default_max_file_size() -> usize {
    MAX_BUFFER_SIZE
}

fn default_max_depth() -> i32 {
    DEFAULT_MAX_DEPTH
}

fn default_include_hidden() -> bool {
    true
}

/// Serializable analyzer settings.
///
/// Every field has a default, so an empty JSON object (or YAML document) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Smallest accepted file, in bytes.
    #[serde(default = "default_min_file_size")]
    pub min_file_size: usize,
    /// Largest accepted file, in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
    /// Scan depth used when the caller does not give one.
    #[serde(default = "default_max_depth")]
    pub max_depth: i32,
    /// Visit entries whose name starts with a dot.
    #[serde(default = "default_include_hidden")]
    pub include_hidden: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_file_size: default_min_file_size(),
            max_file_size: default_max_file_size(),
            max_depth: default_max_depth(),
            include_hidden: default_include_hidden(),
        }
    }
}

impl AnalyzerConfig {
    /// Load a config file, picking the format from its extension
    /// (`json`, `yaml` or `yml`).
    pub fn load(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let config: AnalyzerConfig = match ext {
            "json" => serde_json::from_str(&body).context("Failed to parse config JSON")?,
            "yaml" | "yml" => serde_yaml::from_str(&body).context("Failed to parse config YAML")?,
            other => {
                return Err(anyhow!(
                    "Unsupported config format '{}' for {}; use .json, .yaml or .yml",
                    other,
                    path.display()
                ))
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the size window against the fixed buffer bounds.
    pub fn validate(&self) -> Result<()> {
        self.size_limits()?;
        Ok(())
    }

    pub fn size_limits(&self) -> Result<SizeLimits> {
        SizeLimits::new(self.min_file_size, self.max_file_size).context("Invalid config")
    }
}
