//! CLI configuration file.
//!
//! ```toml
//! ledger = "ledgercc.json"
//! log_level = "info"
//! read_only = false
//! output = "human"
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::format::OutputMode;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "ledgercc.toml";

/// Config file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Harness settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Ledger snapshot file
    pub ledger: PathBuf,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Reject mutating operations and skip saving
    pub read_only: bool,
    /// Output mode
    pub output: OutputMode,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ledger: PathBuf::from("ledgercc.json"),
            log_level: "info".to_string(),
            read_only: false,
            output: OutputMode::Human,
        }
    }
}

impl CliConfig {
    /// Load `path`, or [`DEFAULT_CONFIG_FILE`] if it exists, or defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command-line flags. `read_only` only ever turns read-only on.
    pub fn with_overrides(
        mut self,
        ledger: Option<PathBuf>,
        read_only: bool,
        output: Option<OutputMode>,
    ) -> Self {
        if let Some(ledger) = ledger {
            self.ledger = ledger;
        }
        self.read_only |= read_only;
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}
