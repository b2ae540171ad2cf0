//! Trustcheck - TrustArc consent SDK integration diagnostics.
//!
//! Trustcheck inspects a mobile project on disk, decides which platform it
//! targets and runs that platform's checks: SDK dependency declaration,
//! required permissions, usage in source and initialization order. Findings
//! are collected into a [`DiagnosticReport`] with a 0-100 health score.
//!
//! # Architecture
//!
//! - `detect`: file location, platform detection, manifest parsing and the
//!   per-platform rule sets
//! - `config`: optional YAML project configuration
//! - `report`: output formatting (text, JSON)
//! - `score`: health score calculation
//!
//! # Adding a New Platform
//!
//! Implement `RuleSet` in `src/detect/rules/` and return it from
//! `rules_for`.

pub mod cli;
pub mod config;
pub mod detect;
pub mod errors;
pub mod report;
pub mod score;

pub use config::Config;
pub use detect::{Category, DiagnosticReport, Issue, Platform, Runner, Severity};
pub use errors::TrustcheckError;
