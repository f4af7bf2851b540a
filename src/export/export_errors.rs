use thiserror::Error;

/// Custom error type for export operations
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
