//! Configuration management for wayfind.
//!
//! Configuration is an optional YAML file. Every field has a default, so a
//! partial file (or none at all) is valid:
//!
//! ```yaml
//! demo:
//!   vertices: 16
//!   directed: false
//!   weighted: true
//!   seed: 42
//! output:
//!   precision: 2
//!   colors: true
//! ```

use crate::demo::DemoOptions;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "wayfind.yaml";

/// Default number of decimals when printing distances
pub const DEFAULT_PRECISION: usize = 2;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Demo graph generation
    pub demo: DemoOptions,

    /// Text output settings
    pub output: OutputSettings,
}

/// Output section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Decimals shown for distances and weights
    pub precision: usize,

    /// Colorize text output
    pub colors: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            colors: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load an explicit config file, or `wayfind.yaml` from `working_dir` if it
    /// exists, or fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing or any file found is
    /// malformed.
    pub fn load_or_default(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "Loading config");
            return Self::load(path);
        }

        let candidate = working_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Loading config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
