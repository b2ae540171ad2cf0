//! Trait-based dependency manifest inspection.
//!
//! Each manifest format a platform supports implements [`ManifestFormat`].
//! The dependency check walks the formats in priority order and stops at
//! the first manifest that declares the SDK.
//!
//! ```text
//! ManifestFormat trait
//!     ├── GradleScript     (build.gradle, build.gradle.kts)
//!     ├── VersionCatalog   (gradle/libs.versions.toml)
//!     ├── SwiftPackage     (Package.swift)
//!     ├── Podfile          (CocoaPods)
//!     ├── PackageJson      (npm / yarn)
//!     └── Pubspec          (pub)
//! ```

use regex::Regex;
use std::path::PathBuf;
use tracing::debug;

mod gradle;
mod npm;
mod pubspec;
mod swift;

pub use gradle::{GradleScript, VersionCatalog};
pub use npm::PackageJson;
pub use pubspec::Pubspec;
pub use swift::{Podfile, SwiftPackage};

use super::locate::{read_source, Locator};

/// What a manifest says about the SDK.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdkDeclaration {
    /// Declared version, when one could be read.
    pub version: Option<String>,
}

/// A manifest that declares the SDK.
#[derive(Debug, Clone)]
pub struct DeclarationMatch {
    pub manifest: PathBuf,
    pub format: &'static str,
    pub declaration: SdkDeclaration,
}

/// One dependency manifest format.
pub trait ManifestFormat: Send + Sync {
    /// Human-readable manifest name used in messages.
    fn name(&self) -> &'static str;

    /// Manifest files of this format under the project root.
    fn candidates(&self, locator: &Locator) -> Vec<PathBuf>;

    /// Inspect one manifest's content.
    ///
    /// Returns `None` when the SDK is not declared, including when the
    /// content is not valid for the format.
    fn find_sdk(&self, content: &str) -> Option<SdkDeclaration>;
}

/// Find the first manifest declaring the SDK.
///
/// Formats are tried in order; within a format every candidate is tried
/// before moving on to the next format.
pub fn find_declaration(
    locator: &Locator,
    formats: &[&dyn ManifestFormat],
) -> Option<DeclarationMatch> {
    for format in formats {
        for manifest in format.candidates(locator) {
            let Some(content) = read_source(&manifest) else {
                continue;
            };
            if let Some(declaration) = format.find_sdk(&content) {
                return Some(DeclarationMatch {
                    manifest,
                    format: format.name(),
                    declaration,
                });
            }
            debug!(manifest = %manifest.display(), format = format.name(), "SDK not declared");
        }
    }
    None
}

/// Pull the first capture group of `re` out of `text`.
pub(crate) fn capture_version(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

lazy_static::lazy_static! {
    /// Plain `x.y.z` version anywhere in a string.
    pub(crate) static ref SEMVER: Regex = Regex::new(r"(\d+\.\d+\.\d+)").unwrap();
}
