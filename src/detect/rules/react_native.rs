//! React Native rules: package.json dependency and JS/TS usage.

use super::{
    check_cross_platform_init, check_dependency, find_usage, mentions_sdk, MissingDependency,
    RuleSet,
};
use crate::detect::locate::Locator;
use crate::detect::manifest::PackageJson;
use crate::detect::{Category, Issue, Platform};

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

const MISSING: MissingDependency = MissingDependency {
    message: "TrustArc package not found in package.json dependencies",
    suggestion: "Add the TrustArc React Native SDK: npm install @trustarc/react-native-sdk",
};

pub struct ReactNativeRules;

impl RuleSet for ReactNativeRules {
    fn platform(&self) -> Platform {
        Platform::ReactNative
    }

    fn scan(&self, locator: &Locator) -> Vec<Issue> {
        let mut issues = vec![check_dependency(locator, &[&PackageJson], &MISSING)];

        let files = find_usage(locator, SOURCE_EXTENSIONS, mentions_sdk);
        if files.is_empty() {
            issues.push(
                Issue::warning(
                    Category::Implementation,
                    "No TrustArc SDK usage found in JavaScript/TypeScript files",
                )
                .with_suggestion("Import and use the TrustArc SDK in your code"),
            );
        } else {
            issues.push(check_cross_platform_init(
                &files,
                "Call TrustArc.initialize({ domain: 'your.domain' }) at app startup",
            ));
        }

        issues
    }
}
