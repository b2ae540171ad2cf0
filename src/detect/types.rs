//! Core types for diagnostic results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::score;

/// Severity levels for issues.
///
/// Variant order is the presentation priority: errors first, successes last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// Project platform. Decided once per run by the platform detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "android")]
    Android,
    #[serde(rename = "ios")]
    Ios,
    #[serde(rename = "react-native")]
    ReactNative,
    #[serde(rename = "flutter")]
    Flutter,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::ReactNative => "react-native",
            Platform::Flutter => "flutter",
            Platform::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Short label grouping related issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dependency,
    Initialization,
    Permissions,
    Implementation,
    Configuration,
    Architecture,
    Platform,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dependency => "Dependency",
            Category::Initialization => "Initialization",
            Category::Permissions => "Permissions",
            Category::Implementation => "Implementation",
            Category::Configuration => "Configuration",
            Category::Architecture => "Architecture",
            Category::Platform => "Platform",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single finding produced by one rule check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    #[serde(default)]
    pub file: Option<String>,
    /// 1-based line number
    #[serde(default)]
    pub line: Option<usize>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, category: Category, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            file: None,
            line: None,
            suggestion: None,
        }
    }

    pub fn error(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, category, message)
    }

    pub fn warning(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, category, message)
    }

    pub fn info(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, category, message)
    }

    pub fn success(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, category, message)
    }

    pub fn with_file(mut self, file: impl AsRef<std::path::Path>) -> Self {
        self.file = Some(file.as_ref().to_string_lossy().to_string());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    fn is(&self, severity: Severity, category: Category) -> bool {
        self.severity == severity && self.category == category
    }
}

/// A file that passed a check's relevance filter, with its full text.
#[derive(Debug, Clone)]
pub struct ArtifactMatch {
    pub path: PathBuf,
    pub content: String,
}

/// Complete result of one diagnostic run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub platform: Platform,
    pub project_path: String,
    /// Issues in the order the checks ran.
    pub issues: Vec<Issue>,
    pub sdk_found: bool,
    pub initialization_found: bool,
    pub score: i32,
}

impl DiagnosticReport {
    /// Aggregate issues into a report, deriving the summary flags and score.
    pub fn new(platform: Platform, project_path: impl Into<String>, issues: Vec<Issue>) -> Self {
        let sdk_found = issues
            .iter()
            .any(|i| i.is(Severity::Success, Category::Dependency));
        let initialization_found = issues
            .iter()
            .any(|i| i.is(Severity::Success, Category::Initialization));
        let score = score::calculate(&issues, sdk_found);

        Self {
            platform,
            project_path: project_path.into(),
            issues,
            sdk_found,
            initialization_found,
            score,
        }
    }

    /// Number of issues with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    /// Issues of one severity, in check order.
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}
