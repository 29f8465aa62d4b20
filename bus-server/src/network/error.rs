//! Network store error types.

use std::path::PathBuf;

/// Errors that can occur when loading a network snapshot.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The snapshot file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not valid network JSON
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
