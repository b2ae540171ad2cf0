//! Diagnostic runner that orchestrates detection, rules and scoring.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::errors::TrustcheckError;

use super::locate::Locator;
use super::platform::detect_platform;
use super::rules::rules_for;
use super::{Category, DiagnosticReport, Issue, Platform};

/// Runs one diagnostic pass over a project root.
pub struct Runner {
    root: PathBuf,
    locator: Locator,
}

impl Runner {
    /// Create a runner for `root` with default settings.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, TrustcheckError> {
        Self::with_config(root, &Config::default())
    }

    /// Create a runner that honors the config's path exclusions.
    pub fn with_config<P: AsRef<Path>>(root: P, config: &Config) -> Result<Self, TrustcheckError> {
        let root = resolve_root(root.as_ref())?;
        let locator = Locator::with_exclusions(&root, &config.excluded_paths)?;
        Ok(Self { root, locator })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Classify the project without running any rules.
    pub fn detect_platform(&self) -> Platform {
        detect_platform(&self.locator)
    }

    /// Detect the platform, run its rules and build the report.
    pub fn run(&self) -> DiagnosticReport {
        let platform = self.detect_platform();
        info!(platform = %platform, root = %self.root.display(), "detected platform");

        let issues = match rules_for(platform) {
            Some(rules) => rules.scan(&self.locator),
            None => vec![Issue::error(
                Category::Platform,
                "Unknown platform - could not detect project type",
            )
            .with_suggestion(
                "Run inside an Android, iOS, React Native, or Flutter project directory",
            )],
        };

        let report = DiagnosticReport::new(platform, self.root.to_string_lossy(), issues);
        info!(
            score = report.score,
            issues = report.issues.len(),
            sdk_found = report.sdk_found,
            "diagnostic complete"
        );
        report
    }
}

fn resolve_root(root: &Path) -> Result<PathBuf, TrustcheckError> {
    let resolved = root
        .canonicalize()
        .map_err(|_| TrustcheckError::MissingRoot(root.to_path_buf()))?;
    if !resolved.is_dir() {
        return Err(TrustcheckError::NotADirectory(root.to_path_buf()));
    }
    Ok(resolved)
}
