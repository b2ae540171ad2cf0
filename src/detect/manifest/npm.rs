//! npm `package.json` manifest.

use serde_json::Value as Json;
use std::path::PathBuf;
use tracing::debug;

use super::{capture_version, ManifestFormat, SdkDeclaration, SEMVER};
use crate::detect::locate::Locator;

const DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies"];

/// Root `package.json` of a React Native app.
pub struct PackageJson;

impl ManifestFormat for PackageJson {
    fn name(&self) -> &'static str {
        "package.json"
    }

    fn candidates(&self, locator: &Locator) -> Vec<PathBuf> {
        locator.at_root("package.json").into_iter().collect()
    }

    fn find_sdk(&self, content: &str) -> Option<SdkDeclaration> {
        let data: Json = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(e) => {
                debug!(error = %e, "package.json is not valid JSON");
                return None;
            }
        };

        DEPENDENCY_SECTIONS
            .iter()
            .filter_map(|section| data.get(section).and_then(Json::as_object))
            .flat_map(|deps| deps.iter())
            .find(|(name, _)| name.to_lowercase().contains("trustarc"))
            .map(|(_, spec)| SdkDeclaration {
                version: spec.as_str().and_then(|s| capture_version(&SEMVER, s)),
            })
    }
}
