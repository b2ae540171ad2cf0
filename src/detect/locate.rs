//! Artifact discovery: finds manifests and source files under a project root.

use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::ArtifactMatch;
use crate::errors::TrustcheckError;

/// Directories that hold dependencies or build output, never project sources.
const PRUNED_DIRS: &[&str] = &[
    "node_modules",
    "Pods",
    "Carthage",
    "DerivedData",
    "build",
    "vendor",
];

/// Walks a project root and yields paths whose file name matches a pattern.
#[derive(Debug, Clone)]
pub struct Locator {
    root: PathBuf,
    excluded: GlobSet,
}

impl Locator {
    /// Create a locator with no user exclusions.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            excluded: GlobSet::empty(),
        }
    }

    /// Create a locator that also skips paths matching `excluded_paths`.
    ///
    /// Patterns are matched against the path relative to the root.
    pub fn with_exclusions<P: AsRef<Path>>(
        root: P,
        excluded_paths: &[String],
    ) -> Result<Self, TrustcheckError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in excluded_paths {
            let glob = Glob::new(pattern).map_err(|e| {
                TrustcheckError::Config(format!("invalid excluded path {:?}: {}", pattern, e))
            })?;
            builder.add(glob);
        }
        let excluded = builder
            .build()
            .map_err(|e| TrustcheckError::Config(format!("building exclusions: {}", e)))?;

        Ok(Self {
            root: root.as_ref().to_path_buf(),
            excluded,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a file directly under the root, if it exists.
    pub fn at_root(&self, name: &str) -> Option<PathBuf> {
        let path = self.root.join(name);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    /// Lazily walk the tree, yielding every file or directory whose name
    /// matches one of `names` (glob syntax, e.g. `build.gradle*`).
    pub fn find<'a>(&'a self, names: &[&str]) -> impl Iterator<Item = PathBuf> + 'a {
        let matcher = name_matcher(names);
        self.walk()
            .filter(move |e| matcher.is_match(e.file_name()))
            .map(|e| e.into_path())
    }

    /// Like [`Locator::find`] but only regular files.
    pub fn find_files<'a>(&'a self, names: &[&str]) -> impl Iterator<Item = PathBuf> + 'a {
        self.find(names).filter(|p| p.is_file())
    }

    /// All files with one of the given extensions (without the dot).
    pub fn source_files(&self, extensions: &[&str]) -> Vec<PathBuf> {
        let patterns: Vec<String> = extensions.iter().map(|e| format!("*.{}", e)).collect();
        let patterns: Vec<&str> = patterns.iter().map(String::as_str).collect();
        self.find_files(&patterns).collect()
    }

    /// Read each path and keep those whose content passes `filter`.
    ///
    /// Unreadable files are skipped. Reads may run in parallel; the result
    /// keeps the input order.
    pub fn read_matching<F>(&self, paths: &[PathBuf], filter: F) -> Vec<ArtifactMatch>
    where
        F: Fn(&str) -> bool + Sync,
    {
        paths
            .par_iter()
            .filter_map(|path| {
                let content = read_source(path)?;
                if filter(&content) {
                    Some(ArtifactMatch {
                        path: path.clone(),
                        content,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    fn walk(&self) -> impl Iterator<Item = DirEntry> + '_ {
        WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| !self.is_pruned(e))
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    None
                }
            })
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        if entry.file_type().is_dir() {
            let name = entry.file_name().to_string_lossy();
            if name.starts_with('.') || PRUNED_DIRS.contains(&name.as_ref()) {
                return true;
            }
        }

        match entry.path().strip_prefix(&self.root) {
            Ok(rel) => self.excluded.is_match(rel),
            Err(_) => false,
        }
    }
}

/// Read a file as UTF-8 text, logging and swallowing failures.
pub fn read_source(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable file");
            None
        }
    }
}

fn name_matcher(names: &[&str]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for name in names {
        match Glob::new(name) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => debug!(pattern = %name, error = %e, "ignoring invalid name pattern"),
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}
