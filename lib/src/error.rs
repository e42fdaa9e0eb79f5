/// Custom error type for the zenmarks library
///
/// The classification/rendering pipeline itself is total over well-typed
/// input; errors only arise at the boundaries (parsing a session snapshot,
/// persisting files through a sink).
#[derive(Debug, thiserror::Error)]
pub enum ZenmarksError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session snapshot could not be parsed
    #[error("Snapshot parse error: {0}")]
    Snapshot(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using ZenmarksError
pub type Result<T> = std::result::Result<T, ZenmarksError>;

impl From<serde_json::Error> for ZenmarksError {
    fn from(err: serde_json::Error) -> Self {
        ZenmarksError::Snapshot(err.to_string())
    }
}

impl From<String> for ZenmarksError {
    fn from(s: String) -> Self {
        ZenmarksError::Other(s)
    }
}

impl From<&str> for ZenmarksError {
    fn from(s: &str) -> Self {
        ZenmarksError::Other(s.to_string())
    }
}
