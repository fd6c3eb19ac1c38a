//! Error types for `mamlgen`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the help generation pipeline.
#[derive(Debug, Error)]
pub enum MamlgenError {
    /// The module descriptor could not be parsed.
    #[error("failed to parse module descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    /// A filesystem operation failed. Output write failures are fatal; the
    /// run aborts rather than leaving a partial artifact behind.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path involved in the failed operation.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid input that does not fit a more specific variant.
    #[error("{0}")]
    Message(String),
}
