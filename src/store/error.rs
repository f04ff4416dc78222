/// Error types for the element store
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Data file could not be read
    #[error("Failed to read element data {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not a JSON array of elements
    #[error("Invalid element data in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
