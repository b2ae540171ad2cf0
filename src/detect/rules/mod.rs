//! Per-platform rule sets.
//!
//! Every platform runs the same shape of checks, in order: dependency
//! declaration, platform capabilities (Android only), then SDK usage and
//! initialization. Checks only append issues.

use regex::Regex;

use super::locate::Locator;
use super::manifest::{find_declaration, ManifestFormat};
use super::{ArtifactMatch, Category, Issue, Platform};

mod android;
pub mod android_init;
mod flutter;
mod ios;
mod react_native;

pub use android::AndroidRules;
pub use android_init::{Architecture, FileRoles, InitializationAnalyzer, LineOrder};
pub use flutter::FlutterRules;
pub use ios::IosRules;
pub use react_native::ReactNativeRules;

/// A platform's collection of checks.
pub trait RuleSet: Send + Sync {
    fn platform(&self) -> Platform;

    /// Run every check and return the issues in check order.
    fn scan(&self, locator: &Locator) -> Vec<Issue>;
}

/// The rule set for a platform, or `None` for an unknown project.
pub fn rules_for(platform: Platform) -> Option<Box<dyn RuleSet>> {
    match platform {
        Platform::Android => Some(Box::new(AndroidRules)),
        Platform::Ios => Some(Box::new(IosRules)),
        Platform::ReactNative => Some(Box::new(ReactNativeRules)),
        Platform::Flutter => Some(Box::new(FlutterRules)),
        Platform::Unknown => None,
    }
}

/// Issue text for a dependency that no manifest declares.
pub(crate) struct MissingDependency {
    pub message: &'static str,
    pub suggestion: &'static str,
}

/// Emit one success for the first manifest declaring the SDK, or one error.
pub(crate) fn check_dependency(
    locator: &Locator,
    formats: &[&dyn ManifestFormat],
    missing: &MissingDependency,
) -> Issue {
    match find_declaration(locator, formats) {
        Some(found) => {
            let message = match &found.declaration.version {
                Some(version) => {
                    format!("TrustArc SDK found in {} (version {})", found.format, version)
                }
                None => format!("TrustArc SDK found in {}", found.format),
            };
            Issue::success(Category::Dependency, message).with_file(&found.manifest)
        }
        None => Issue::error(Category::Dependency, missing.message)
            .with_suggestion(missing.suggestion),
    }
}

/// Source files with one of `extensions` whose content passes `filter`.
pub(crate) fn find_usage<F>(locator: &Locator, extensions: &[&str], filter: F) -> Vec<ArtifactMatch>
where
    F: Fn(&str) -> bool + Sync,
{
    let paths = locator.source_files(extensions);
    locator.read_matching(&paths, filter)
}

/// Case-insensitive SDK mention, the relevance filter for JS and Dart.
pub(crate) fn mentions_sdk(content: &str) -> bool {
    content.to_lowercase().contains("trustarc")
}

lazy_static::lazy_static! {
    static ref CROSS_PLATFORM_INIT: Regex =
        Regex::new(r"\.(initialize|start)\s*\(").unwrap();
}

/// Initialization check shared by the JS and Dart bindings: one success if
/// any file calls `initialize(` / `start(`, otherwise one informational note.
pub(crate) fn check_cross_platform_init(files: &[ArtifactMatch], suggestion: &str) -> Issue {
    match files.iter().find(|f| CROSS_PLATFORM_INIT.is_match(&f.content)) {
        Some(f) => Issue::success(Category::Initialization, "TrustArc SDK initialization call found")
            .with_file(&f.path),
        None => Issue::info(
            Category::Initialization,
            "TrustArc is referenced but no initialization call was found",
        )
        .with_file(&files[0].path)
        .with_suggestion(suggestion),
    }
}
