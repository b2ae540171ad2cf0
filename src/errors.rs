//! Errors that abort a diagnostic run.
//!
//! Findings about the scanned project are never errors; they are reported as
//! [`crate::detect::Issue`]s. These variants cover invalid invocations only.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrustcheckError {
    #[error("project path {0:?} does not exist")]
    MissingRoot(PathBuf),
    #[error("project path {0:?} is not a directory")]
    NotADirectory(PathBuf),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
