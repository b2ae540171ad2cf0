//! Android rules: Gradle dependency, manifest permissions, initialization.

use tracing::debug;

use super::android_init::{is_usage_file, InitializationAnalyzer};
use super::{check_dependency, MissingDependency, RuleSet};
use crate::detect::locate::{read_source, Locator};
use crate::detect::manifest::{GradleScript, VersionCatalog};
use crate::detect::{Category, Issue, Platform};

const SOURCE_EXTENSIONS: &[&str] = &["kt", "java"];

const INTERNET_PERMISSION: &str = "android.permission.INTERNET";
const NETWORK_STATE_PERMISSION: &str = "android.permission.ACCESS_NETWORK_STATE";

const MISSING: MissingDependency = MissingDependency {
    message: "TrustArc SDK dependency not found in gradle files",
    suggestion: "Add: implementation(\"com.trustarc:trustarc-consent-sdk:VERSION\")",
};

pub struct AndroidRules;

impl RuleSet for AndroidRules {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn scan(&self, locator: &Locator) -> Vec<Issue> {
        let mut issues = vec![check_dependency(
            locator,
            &[&GradleScript, &VersionCatalog],
            &MISSING,
        )];
        issues.extend(check_permissions(locator));
        issues.extend(check_initialization(locator));
        issues
    }
}

/// Permissions the SDK needs to fetch consent configuration.
fn check_permissions(locator: &Locator) -> Vec<Issue> {
    let mut has_internet = false;
    let mut has_network_state = false;

    for manifest in locator.find_files(&["AndroidManifest.xml"]) {
        let Some(content) = read_source(&manifest) else {
            continue;
        };
        has_internet |= content.contains(INTERNET_PERMISSION);
        has_network_state |= content.contains(NETWORK_STATE_PERMISSION);
    }

    let mut issues = Vec::new();
    if !has_internet {
        issues.push(
            Issue::error(Category::Permissions, "Missing required permission: INTERNET")
                .with_suggestion(format!(
                    "Add: <uses-permission android:name=\"{}\" />",
                    INTERNET_PERMISSION
                )),
        );
    }
    if !has_network_state {
        issues.push(
            Issue::warning(
                Category::Permissions,
                "Missing recommended permission: ACCESS_NETWORK_STATE",
            )
            .with_suggestion(format!(
                "Add: <uses-permission android:name=\"{}\" />",
                NETWORK_STATE_PERMISSION
            )),
        );
    }
    issues
}

fn check_initialization(locator: &Locator) -> Vec<Issue> {
    let paths = locator.source_files(SOURCE_EXTENSIONS);
    let sources = locator.read_matching(&paths, |_| true);

    if !sources.iter().any(|s| is_usage_file(&s.content)) {
        return vec![Issue::error(
            Category::Implementation,
            "No TrustArc SDK usage found in Kotlin/Java files",
        )
        .with_suggestion("Import com.truste.androidmobileconsentsdk.TrustArc and initialize the SDK")];
    }

    let analyzer = InitializationAnalyzer::new(&sources);
    debug!(architecture = ?analyzer.architecture(), files = sources.len(), "analyzing initialization");
    analyzer.analyze()
}
