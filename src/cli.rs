//! Command-line interface for trustcheck.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::detect::Runner;
use crate::report;
use crate::score;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Diagnose TrustArc consent SDK integrations in mobile projects.
///
/// Trustcheck inspects an Android, iOS, React Native or Flutter project for
/// the SDK dependency, required permissions and correct initialization, and
/// reports a 0-100 health score.
#[derive(Parser)]
#[command(name = "trustcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every check for the detected platform
    #[command(visible_alias = "check")]
    Scan(ScanArgs),
    /// Print the detected platform and exit
    Platform(PlatformArgs),
}

/// Arguments for the scan command.
#[derive(Parser)]
pub struct ScanArgs {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Path to config YAML file (default: trustcheck.yaml in the project)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum passing score (overrides the config file)
    #[arg(short, long)]
    pub threshold: Option<i32>,
}

/// Arguments for the platform command.
#[derive(Parser)]
pub struct PlatformArgs {
    /// Project root to inspect
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "text" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'text' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let config = Config::load(&args.path, args.config.as_deref())
        .context("failed to load config")?;
    let threshold = args.threshold.unwrap_or_else(|| config.threshold());

    let runner = Runner::with_config(&args.path, &config)?;
    let result = runner.run();

    match args.format.as_str() {
        "json" => report::write_json(&result, threshold)?,
        _ => report::write_text(&result, threshold),
    }

    if score::passed(result.score, threshold) {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the platform command.
pub fn run_platform(args: &PlatformArgs) -> anyhow::Result<i32> {
    let runner = Runner::new(&args.path)?;
    println!("{}", runner.detect_platform());
    Ok(EXIT_SUCCESS)
}
