use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when reading, writing, or parsing character data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A trait name did not match any of the five traits.
    #[error("unknown trait: \"{0}\"")]
    UnknownTrait(String),

    /// The record file could not be read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        /// The file that was being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The record blob was not valid character JSON.
    #[error("invalid character record: {0}")]
    Json(#[from] serde_json::Error),
}
