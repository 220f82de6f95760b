use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::chart_dimensions::{
    ChartDimensions, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH,
};

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub remediation: RemediationConfig,
}

/// Size of the per-process trend chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
}

/// Extra remediation checklists, keyed by process name. Entries replace the
/// built-in checklist of the same name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemediationConfig {
    #[serde(default)]
    pub checklists: BTreeMap<String, Vec<String>>,
}

// --- Defaults ---

const fn default_width() -> usize {
    DEFAULT_CHART_WIDTH
}

const fn default_height() -> usize {
    DEFAULT_CHART_HEIGHT
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load the config file from the default location, falling back to
    /// defaults when there is none. Nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load an explicit config file if one is given, else the default one.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        explicit.map_or_else(Self::load, Self::load_from)
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("memtrend").join("config.toml"))
    }
}

impl From<&ChartConfig> for ChartDimensions {
    fn from(config: &ChartConfig) -> Self {
        Self::new(config.width, config.height)
    }
}

/// Expand a leading `~` in a user-supplied path.
#[must_use]
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
