//! Output formatting for trustcheck results.
//!
//! Supports two output formats:
//! - Text: colored terminal output grouped by severity
//! - JSON: structured output for CI pipelines

use colored::*;
use serde::{Deserialize, Serialize};

use crate::detect::{DiagnosticReport, Issue, Severity};
use crate::score;

// =============================================================================
// JSON Format
// =============================================================================

#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub platform: String,
    pub project_path: String,
    pub sdk_found: bool,
    pub initialization_found: bool,
    pub score: i32,
    pub passed: bool,
    pub threshold: i32,
    pub issues: Vec<JsonIssue>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonIssue {
    pub severity: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonReport {
    pub fn from_report(report: &DiagnosticReport, threshold: i32) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            platform: report.platform.to_string(),
            project_path: report.project_path.clone(),
            sdk_found: report.sdk_found,
            initialization_found: report.initialization_found,
            score: report.score,
            passed: score::passed(report.score, threshold),
            threshold,
            issues: report.issues.iter().map(issue_to_json).collect(),
        }
    }
}

fn issue_to_json(issue: &Issue) -> JsonIssue {
    JsonIssue {
        severity: issue.severity.to_string(),
        category: issue.category.to_string(),
        message: issue.message.clone(),
        file: issue.file.clone(),
        line: issue.line,
        suggestion: issue.suggestion.clone(),
    }
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &DiagnosticReport, threshold: i32) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from_report(
        report, threshold,
    ))?)
}

/// Write results in JSON format.
pub fn write_json(report: &DiagnosticReport, threshold: i32) -> anyhow::Result<()> {
    println!("{}", render_json(report, threshold)?);
    Ok(())
}

// =============================================================================
// Text Format
// =============================================================================

/// Severity groups in display order.
const SECTIONS: &[(Severity, &str)] = &[
    (Severity::Success, "Passed"),
    (Severity::Error, "Errors"),
    (Severity::Warning, "Warnings"),
    (Severity::Info, "Info"),
];

/// Render the report as human-readable text.
pub fn render_text(report: &DiagnosticReport, threshold: i32) -> String {
    let mut out = String::new();

    // Header
    out.push('\n');
    out.push_str(&format!(
        "  {} v{}\n\n",
        "trustcheck".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!("  {}{}\n", "Project:  ".dimmed(), report.project_path));
    out.push_str(&format!("  {}{}\n", "Platform: ".dimmed(), report.platform));
    out.push_str(&format!(
        "  {}{}\n\n",
        "SDK:      ".dimmed(),
        if report.sdk_found {
            "found".green()
        } else {
            "not found".red()
        }
    ));

    for (severity, title) in SECTIONS {
        let issues: Vec<&Issue> = report.by_severity(*severity).collect();
        if issues.is_empty() {
            continue;
        }
        out.push_str(&format!("  {} ({}):\n\n", title.bold(), issues.len()));
        for issue in issues {
            write_issue(&mut out, issue);
        }
    }

    write_final_status(&mut out, report.score, threshold);
    out
}

/// Write results in text format.
pub fn write_text(report: &DiagnosticReport, threshold: i32) {
    print!("{}", render_text(report, threshold));
}

fn write_issue(out: &mut String, issue: &Issue) {
    out.push_str(&format!(
        "    {} {} {}\n",
        severity_tag(issue.severity),
        format!("[{}]", issue.category).dimmed(),
        issue.message
    ));
    match (&issue.file, issue.line) {
        (Some(file), Some(line)) => out.push_str(&format!("            {}:{}\n", file, line)),
        (Some(file), None) => out.push_str(&format!("            {}\n", file)),
        _ => {}
    }
    if let Some(suggestion) = &issue.suggestion {
        out.push_str(&format!("            {} {}\n", "fix:".cyan(), suggestion));
    }
    out.push('\n');
}

fn severity_tag(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "ERROR".red(),
        Severity::Warning => "WARN ".yellow(),
        Severity::Info => "INFO ".blue(),
        Severity::Success => "OK   ".green(),
    }
}

fn colored_score(s: i32) -> ColoredString {
    match s {
        s if s >= 90 => s.to_string().green().bold(),
        s if s >= score::DEFAULT_THRESHOLD => s.to_string().green(),
        s if s >= 50 => s.to_string().yellow(),
        _ => s.to_string().red(),
    }
}

fn write_final_status(out: &mut String, s: i32, threshold: i32) {
    let status = if score::passed(s, threshold) {
        "PASSED".green()
    } else {
        "FAILED".red()
    };
    out.push_str(&format!(
        "  Score: {}/100 (threshold {})  {}\n\n",
        colored_score(s),
        threshold,
        status
    ));
}
