//! Dart `pubspec.yaml` manifest.

use regex::Regex;
use std::path::PathBuf;
use tracing::debug;

use super::{capture_version, ManifestFormat, SdkDeclaration};
use crate::detect::locate::Locator;

lazy_static::lazy_static! {
    static ref PUB_VERSION: Regex = Regex::new(
        r#"(?im)^\s*[\w-]*trustarc[\w-]*\s*:\s*["']?[\^~>=<\s]*(\d+\.\d+\.\d+)"#
    ).unwrap();
}

/// Root `pubspec.yaml` of a Flutter app.
pub struct Pubspec;

impl ManifestFormat for Pubspec {
    fn name(&self) -> &'static str {
        "pubspec.yaml"
    }

    fn candidates(&self, locator: &Locator) -> Vec<PathBuf> {
        locator.at_root("pubspec.yaml").into_iter().collect()
    }

    fn find_sdk(&self, content: &str) -> Option<SdkDeclaration> {
        if let Err(e) = serde_yaml::from_str::<serde_yaml::Value>(content) {
            debug!(error = %e, "pubspec.yaml is not valid YAML");
            return None;
        }
        if !content.to_lowercase().contains("trustarc") {
            return None;
        }
        Some(SdkDeclaration {
            version: capture_version(&PUB_VERSION, content),
        })
    }
}
