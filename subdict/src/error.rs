//! All error types for the subdict crate.
//!
//! Recoverable parse conditions are not errors; they surface as
//! [`crate::types::Warning`] values. Everything here is fatal to a run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input path did not resolve to a readable file. Reported separately
    /// from other read failures so callers can name the missing path.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
