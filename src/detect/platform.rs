//! Project platform detection from marker files.

use serde_json::Value as Json;
use tracing::debug;

use super::locate::{read_source, Locator};
use super::Platform;

/// Classify the project under the locator's root.
///
/// Rules are checked in priority order and the first match wins. A marker
/// file that cannot be read or parsed simply does not match its rule.
pub fn detect_platform(locator: &Locator) -> Platform {
    if is_flutter(locator) {
        return Platform::Flutter;
    }
    if is_react_native(locator) {
        return Platform::ReactNative;
    }
    if is_ios(locator) {
        return Platform::Ios;
    }
    if is_android(locator) {
        return Platform::Android;
    }
    Platform::Unknown
}

fn is_flutter(locator: &Locator) -> bool {
    locator
        .at_root("pubspec.yaml")
        .and_then(|p| read_source(&p))
        .map(|content| content.to_lowercase().contains("flutter"))
        .unwrap_or(false)
}

fn is_react_native(locator: &Locator) -> bool {
    let Some(content) = locator.at_root("package.json").and_then(|p| read_source(&p)) else {
        return false;
    };
    let data: Json = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, "package.json is not valid JSON");
            return false;
        }
    };

    ["dependencies", "devDependencies"].iter().any(|section| {
        data.get(section)
            .and_then(Json::as_object)
            .map(|deps| deps.contains_key("react-native"))
            .unwrap_or(false)
    })
}

fn is_ios(locator: &Locator) -> bool {
    locator.at_root("Podfile").is_some()
        || locator
            .find(&["*.xcodeproj", "*.xcworkspace"])
            .next()
            .is_some()
}

fn is_android(locator: &Locator) -> bool {
    locator.at_root("build.gradle").is_some()
        || locator.at_root("build.gradle.kts").is_some()
        || locator
            .find_files(&["build.gradle", "build.gradle.kts"])
            .next()
            .is_some()
}
