//! Gradle manifests: build scripts and version catalogs.

use regex::Regex;
use std::path::PathBuf;
use toml::{Table, Value};
use tracing::debug;

use super::{capture_version, ManifestFormat, SdkDeclaration, SEMVER};
use crate::detect::locate::Locator;

/// Maven coordinate of the Android SDK artifact.
pub const SDK_COORDINATE: &str = "com.trustarc:trustarc-consent-sdk";
const SDK_GROUP: &str = "com.trustarc";
const SDK_ARTIFACT: &str = "trustarc-consent-sdk";

lazy_static::lazy_static! {
    static ref SCRIPT_VERSION: Regex =
        Regex::new(r#"trustarc-consent-sdk["']?\s*:\s*["']?(\d+\.\d+\.\d+)"#).unwrap();
}

/// Legacy `build.gradle` / `build.gradle.kts` dependency blocks.
pub struct GradleScript;

impl ManifestFormat for GradleScript {
    fn name(&self) -> &'static str {
        "gradle build script"
    }

    fn candidates(&self, locator: &Locator) -> Vec<PathBuf> {
        locator.find_files(&["build.gradle*"]).collect()
    }

    fn find_sdk(&self, content: &str) -> Option<SdkDeclaration> {
        if !content.contains(SDK_COORDINATE) {
            return None;
        }
        Some(SdkDeclaration {
            version: capture_version(&SCRIPT_VERSION, content),
        })
    }
}

/// Centralized `*.versions.toml` version catalog.
pub struct VersionCatalog;

impl ManifestFormat for VersionCatalog {
    fn name(&self) -> &'static str {
        "version catalog"
    }

    fn candidates(&self, locator: &Locator) -> Vec<PathBuf> {
        locator.find_files(&["*.versions.toml"]).collect()
    }

    fn find_sdk(&self, content: &str) -> Option<SdkDeclaration> {
        let catalog: Table = match toml::from_str(content) {
            Ok(t) => t,
            Err(e) => {
                debug!(error = %e, "version catalog is not valid TOML");
                return None;
            }
        };

        let versions = catalog.get("versions").and_then(Value::as_table);
        let libraries = catalog.get("libraries").and_then(Value::as_table)?;

        libraries
            .values()
            .find_map(|lib| library_version(lib, versions))
    }
}

/// If `lib` is the SDK, its declaration (with resolved version if any).
fn library_version(lib: &Value, versions: Option<&Table>) -> Option<SdkDeclaration> {
    match lib {
        // "group:name:version" shorthand
        Value::String(notation) => {
            if !notation.starts_with(SDK_COORDINATE) {
                return None;
            }
            Some(SdkDeclaration {
                version: capture_version(&SEMVER, notation),
            })
        }
        Value::Table(entry) => {
            let is_sdk = match entry.get("module").and_then(Value::as_str) {
                Some(module) => module == SDK_COORDINATE,
                None => {
                    entry.get("group").and_then(Value::as_str) == Some(SDK_GROUP)
                        && entry.get("name").and_then(Value::as_str) == Some(SDK_ARTIFACT)
                }
            };
            if !is_sdk {
                return None;
            }
            let version = entry
                .get("version")
                .and_then(|v| resolve_version(v, versions))
                .and_then(|v| capture_version(&SEMVER, &v));
            Some(SdkDeclaration { version })
        }
        _ => None,
    }
}

/// Resolve a catalog version: a literal, a `ref` into `[versions]`, or a
/// rich version table.
fn resolve_version(version: &Value, versions: Option<&Table>) -> Option<String> {
    match version {
        Value::String(s) => Some(s.clone()),
        Value::Table(t) => {
            if let Some(key) = t.get("ref").and_then(Value::as_str) {
                return versions
                    .and_then(|vs| vs.get(key))
                    .and_then(|v| resolve_version(v, None));
            }
            ["strictly", "require", "prefer"]
                .iter()
                .find_map(|k| t.get(*k).and_then(Value::as_str))
                .map(str::to_string)
        }
        _ => None,
    }
}
