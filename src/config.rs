//! Optional project configuration for trustcheck.
//!
//! Loaded from `trustcheck.yaml` (or `.trustcheck.yaml`) in the scanned
//! project, or from an explicit `--config` path.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::TrustcheckError;
use crate::score::DEFAULT_THRESHOLD;

/// Config file names searched for in the project root.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["trustcheck.yaml", ".trustcheck.yaml"];

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Glob patterns (relative to the project root) to skip, e.g. "sample/**".
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Minimum score for a passing run.
    #[serde(default)]
    pub pass_threshold: Option<i32>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, TrustcheckError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TrustcheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
            .map_err(|e| TrustcheckError::Config(format!("{}: {}", path.display(), e)))
    }

    fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is a valid, empty config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load the explicit config if given, else the first default-named file
    /// in `root`, else defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, TrustcheckError> {
        match explicit {
            Some(path) => Self::parse_file(path),
            None => match discover(root) {
                Some(path) => Self::parse_file(path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Returns the pass threshold (defaults to 70).
    pub fn threshold(&self) -> i32 {
        self.pass_threshold.unwrap_or(DEFAULT_THRESHOLD)
    }
}

/// Find a default-named config file in `root`.
pub fn discover(root: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}
