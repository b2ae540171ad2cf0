//! Detection of consent SDK integration problems.

pub mod locate;
pub mod manifest;
mod platform;
pub mod rules;
mod runner;
mod types;

pub use locate::Locator;
pub use platform::detect_platform;
pub use rules::{rules_for, RuleSet};
pub use runner::Runner;
pub use types::{ArtifactMatch, Category, DiagnosticReport, Issue, Platform, Severity};
