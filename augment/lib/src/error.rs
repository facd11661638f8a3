use std::path::PathBuf;

/// Errors raised while loading or saving an OpenAPI document.
///
/// Structural gaps inside a document are never errors: patches create the
/// containers they need and skip targets that are absent.
#[derive(Debug, thiserror::Error)]
pub enum AugmentError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid JSON.
    #[error("failed to parse {} as JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The patched document could not be serialized.
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type for augmentation operations.
pub type Result<T> = std::result::Result<T, AugmentError>;
