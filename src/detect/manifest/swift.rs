//! iOS manifests: Swift Package Manager and CocoaPods.

use regex::Regex;
use std::path::PathBuf;

use super::{capture_version, ManifestFormat, SdkDeclaration};
use crate::detect::locate::Locator;

/// Module name of the iOS SDK.
pub const SDK_MODULE: &str = "TrustArcMobileConsent";
const SDK_REPOSITORY: &str = "trustarc-mobile-consent";

lazy_static::lazy_static! {
    static ref SPM_VERSION: Regex = Regex::new(
        r#"(?i)trustarc-mobile-consent[^\n]*?(?:from|exact)\s*:\s*"(\d+\.\d+\.\d+)""#
    ).unwrap();
    static ref POD_VERSION: Regex = Regex::new(
        r#"pod\s+['"]TrustArcMobileConsent['"]\s*,\s*['"][~>=<\s]*(\d+\.\d+(?:\.\d+)?)"#
    ).unwrap();
}

/// `Package.swift`.
pub struct SwiftPackage;

impl ManifestFormat for SwiftPackage {
    fn name(&self) -> &'static str {
        "Package.swift"
    }

    fn candidates(&self, locator: &Locator) -> Vec<PathBuf> {
        locator.find_files(&["Package.swift"]).collect()
    }

    fn find_sdk(&self, content: &str) -> Option<SdkDeclaration> {
        if !content.contains(SDK_MODULE) && !content.contains(SDK_REPOSITORY) {
            return None;
        }
        Some(SdkDeclaration {
            version: capture_version(&SPM_VERSION, content),
        })
    }
}

/// CocoaPods `Podfile`.
pub struct Podfile;

impl ManifestFormat for Podfile {
    fn name(&self) -> &'static str {
        "Podfile"
    }

    fn candidates(&self, locator: &Locator) -> Vec<PathBuf> {
        locator.find_files(&["Podfile"]).collect()
    }

    fn find_sdk(&self, content: &str) -> Option<SdkDeclaration> {
        if !content.contains(SDK_MODULE) {
            return None;
        }
        Some(SdkDeclaration {
            version: capture_version(&POD_VERSION, content),
        })
    }
}
