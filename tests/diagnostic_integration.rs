//! Integration tests for the full diagnostic pipeline.
//!
//! These tests run the `Runner` against the fixture projects in `testdata/`
//! and against small projects built in temp dirs.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use trustcheck::detect::{Category, Platform, Runner, Severity};
use trustcheck::{Config, DiagnosticReport};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

fn scan(root: &Path) -> DiagnosticReport {
    Runner::new(root).expect("fixture root should exist").run()
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_android_traditional_fixture_is_healthy() {
    let report = scan(&fixture("android_traditional"));

    assert_eq!(report.platform, Platform::Android);
    assert!(report.sdk_found);
    assert!(report.initialization_found);
    assert!(!report.has_errors());
    assert_eq!(report.count(Severity::Warning), 0);
    assert_eq!(report.score, 100);
    assert!(report.issues[0].message.contains("3.2.1"));
}

#[test]
fn test_android_di_fixture() {
    let report = scan(&fixture("android_di"));

    assert_eq!(report.platform, Platform::Android);
    assert!(!report.has_errors());

    let architecture: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.category == Category::Architecture && i.severity == Severity::Success)
        .collect();
    assert_eq!(architecture.len(), 2);

    // ACCESS_NETWORK_STATE is missing from the fixture manifest.
    assert_eq!(report.count(Severity::Warning), 1);
    assert_eq!(report.score, 90);
}

#[test]
fn test_ios_fixture() {
    let report = scan(&fixture("ios_pods"));

    assert_eq!(report.platform, Platform::Ios);
    assert!(report.sdk_found);
    assert!(report.initialization_found);
    assert_eq!(report.score, 100);
    assert!(report.issues[0].message.contains("Podfile"));
}

#[test]
fn test_react_native_fixture() {
    let report = scan(&fixture("react_native"));

    assert_eq!(report.platform, Platform::ReactNative);
    assert!(report.issues.iter().all(|i| i.severity == Severity::Success));
    assert_eq!(report.score, 100);
}

#[test]
fn test_flutter_fixture() {
    let report = scan(&fixture("flutter"));

    assert_eq!(report.platform, Platform::Flutter);
    assert!(report.sdk_found);
    assert!(report.initialization_found);
    assert_eq!(report.score, 100);
}

#[test]
fn test_scans_are_idempotent() {
    for name in ["android_traditional", "android_di", "ios_pods", "react_native", "flutter"] {
        let first = scan(&fixture(name));
        let second = scan(&fixture(name));
        assert_eq!(first.issues, second.issues, "fixture {}", name);
        assert_eq!(first.score, second.score);
    }
}

#[test]
fn test_unknown_project() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "docs/index.md", "# docs");

    let report = scan(temp.path());
    assert_eq!(report.platform, Platform::Unknown);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].severity, Severity::Error);
    assert_eq!(report.issues[0].category, Category::Platform);
    assert!(!report.sdk_found);
}

#[test]
fn test_android_start_before_constructor() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "build.gradle",
        "dependencies { implementation 'com.trustarc:trustarc-consent-sdk:3.0.0' }\n",
    );
    write(
        temp.path(),
        "app/src/main/AndroidManifest.xml",
        "<uses-permission android:name=\"android.permission.INTERNET\" />\n\
         <uses-permission android:name=\"android.permission.ACCESS_NETWORK_STATE\" />\n",
    );
    write(
        temp.path(),
        "app/src/main/java/Consent.kt",
        "import com.truste.androidmobileconsentsdk.TrustArc\n\
         import com.truste.androidmobileconsentsdk.SdkMode\n\
         fun setup(context: Context) {\n\
         trustArc.start(domainName = \"d\")\n\
         val unused = 0\n\
         val trustArc = TrustArc(context, SdkMode.Standard)\n\
         }\n",
    );

    let report = scan(temp.path());
    let errors: Vec<_> = report.by_severity(Severity::Error).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].category, Category::Initialization);
    assert_eq!(errors[0].line, Some(4));
    assert_eq!(report.score, 80);
}

#[test]
fn test_android_cross_file_singleton() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "app/build.gradle",
        "implementation \"com.trustarc:trustarc-consent-sdk:3.0.0\"\n",
    );
    write(
        temp.path(),
        "app/src/main/java/App.kt",
        "import com.truste.androidmobileconsentsdk.TrustArc\n\
         import com.truste.androidmobileconsentsdk.SdkMode\n\
         class App : Application() {\n\
         override fun onCreate() { TASharedInstance = TrustArc(this, SdkMode.Standard) }\n\
         }\n",
    );
    write(
        temp.path(),
        "app/src/main/java/MainActivity.kt",
        "import com.truste.androidmobileconsentsdk.TrustArc\n\
         class MainActivity {\n\
         fun onStart() { TASharedInstance.start(domainName = \"d\") }\n\
         }\n",
    );

    let report = scan(temp.path());
    let init: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.category == Category::Initialization)
        .collect();
    assert_eq!(init.len(), 1);
    assert_eq!(init[0].severity, Severity::Success);
    assert!(report.initialization_found);
}

#[test]
fn test_score_bounds_hold_for_broken_project() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "build.gradle", "");
    write(temp.path(), "src/Main.kt", "fun main() {}\n");

    let report = scan(temp.path());
    assert!(report.score >= 0 && report.score <= 100);
    // Missing dependency, missing INTERNET, no usage: 100 - 60 - 10 - 30.
    assert_eq!(report.score, 0);
}

#[test]
fn test_config_exclusions() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "pubspec.yaml", "name: app\ndependencies:\n  flutter:\n    sdk: flutter\n");
    write(
        temp.path(),
        "example/lib/main.dart",
        "import 'package:trustarc_sdk/trustarc_sdk.dart';\nvoid main() { TrustArc.initialize(); }\n",
    );

    let plain = scan(temp.path());
    assert_eq!(plain.issues[1].severity, Severity::Success);

    let config = Config {
        excluded_paths: vec!["example".to_string()],
        ..Default::default()
    };
    let excluded = Runner::with_config(temp.path(), &config).unwrap().run();
    assert_eq!(excluded.issues[1].severity, Severity::Warning);
    assert_eq!(excluded.issues[1].category, Category::Implementation);
}
