//! Load-time errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while building a [`crate::CatalogStore`].
///
/// Requests never produce errors; these only occur at load time.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file {}: {source}", path.display())]
    Io {
        /// File that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the catalog shape.
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A poster template without exactly one `%s`.
    #[error("invalid poster URL template {template:?}: {reason}")]
    InvalidPosterTemplate {
        /// Template as given.
        template: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Result alias for store construction.
pub type Result<T> = std::result::Result<T, StoreError>;
