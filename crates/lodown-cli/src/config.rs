//! `lodown.toml` configuration.
//!
//! ```toml
//! [output]
//! pretty = true
//!
//! [log]
//! level = "warn"
//! ```
//!
//! Every field is optional. Lookup order: an explicit `--config` path, then
//! `lodown.toml` in the working directory, then built-in defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::CliError;

/// File name searched for in the working directory.
pub const CONFIG_FILE: &str = "lodown.toml";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// How results are written to stdout.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Default tracing filter, used when `RUST_LOG` is not set.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Config, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Config, CliError> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Resolve the configuration for this run.
    ///
    /// An explicit path must exist; the working-directory file is optional.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Config, CliError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let default_path = cwd.join(CONFIG_FILE);
        if default_path.is_file() {
            Self::from_file(&default_path)
        } else {
            Ok(Config::default())
        }
    }
}
