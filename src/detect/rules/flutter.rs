//! Flutter rules: pubspec dependency and Dart usage.

use super::{
    check_cross_platform_init, check_dependency, find_usage, mentions_sdk, MissingDependency,
    RuleSet,
};
use crate::detect::locate::Locator;
use crate::detect::manifest::Pubspec;
use crate::detect::{Category, Issue, Platform};

const MISSING: MissingDependency = MissingDependency {
    message: "TrustArc package not found in pubspec.yaml",
    suggestion: "Add the TrustArc Flutter SDK under dependencies in pubspec.yaml",
};

pub struct FlutterRules;

impl RuleSet for FlutterRules {
    fn platform(&self) -> Platform {
        Platform::Flutter
    }

    fn scan(&self, locator: &Locator) -> Vec<Issue> {
        let mut issues = vec![check_dependency(locator, &[&Pubspec], &MISSING)];

        let files = find_usage(locator, &["dart"], mentions_sdk);
        if files.is_empty() {
            issues.push(
                Issue::warning(Category::Implementation, "No TrustArc SDK usage found in Dart files")
                    .with_suggestion("Import and use the TrustArc SDK in your code"),
            );
        } else {
            issues.push(check_cross_platform_init(
                &files,
                "Call TrustArc.initialize(domain: 'your.domain') before runApp()",
            ));
        }

        issues
    }
}
