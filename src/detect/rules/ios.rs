//! iOS rules: SPM / CocoaPods dependency and Swift usage.

use regex::Regex;

use super::{check_dependency, find_usage, MissingDependency, RuleSet};
use crate::detect::locate::Locator;
use crate::detect::manifest::{Podfile, SwiftPackage};
use crate::detect::{ArtifactMatch, Category, Issue, Platform};

const SDK_IMPORT: &str = "import TrustArcMobileConsent";

const MISSING: MissingDependency = MissingDependency {
    message: "TrustArc SDK dependency not found",
    suggestion: "Add TrustArcMobileConsent via Swift Package Manager or CocoaPods",
};

lazy_static::lazy_static! {
    static ref CONSTRUCTOR_CALL: Regex = Regex::new(r"\bTrustArc\s*\(\s*context:").unwrap();
    static ref SHARED_INSTANCE: Regex = Regex::new(r"\b(sharedInstance|TASharedInstance)\b").unwrap();
    static ref START_CALL: Regex = Regex::new(r"\.start\s*\(").unwrap();
}

pub struct IosRules;

impl RuleSet for IosRules {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn scan(&self, locator: &Locator) -> Vec<Issue> {
        let mut issues = vec![check_dependency(
            locator,
            &[&SwiftPackage, &Podfile],
            &MISSING,
        )];
        issues.extend(check_swift_usage(locator));
        issues
    }
}

fn check_swift_usage(locator: &Locator) -> Vec<Issue> {
    let files = find_usage(locator, &["swift"], |c| {
        c.contains("TrustArc") && c.contains(SDK_IMPORT)
    });

    if files.is_empty() {
        return vec![Issue::error(
            Category::Implementation,
            "No TrustArc SDK usage found in Swift files",
        )
        .with_suggestion("Add `import TrustArcMobileConsent` and initialize the SDK")];
    }

    check_swift_patterns(&files)
}

fn check_swift_patterns(files: &[ArtifactMatch]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for f in files {
        let constructs = CONSTRUCTOR_CALL.is_match(&f.content);
        if constructs && !START_CALL.is_match(&f.content) {
            issues.push(
                Issue::error(
                    Category::Initialization,
                    "TrustArc instance created but start() never called",
                )
                .with_file(&f.path)
                .with_suggestion("Call trustArc.start(domainName: \"your.domain\")"),
            );
        }
    }

    let started = files.iter().find(|f| {
        START_CALL.is_match(&f.content)
            && (CONSTRUCTOR_CALL.is_match(&f.content) || SHARED_INSTANCE.is_match(&f.content))
    });
    if let Some(f) = started {
        issues.push(
            Issue::success(Category::Initialization, "TrustArc SDK is created and started")
                .with_file(&f.path),
        );
    }

    issues
}
