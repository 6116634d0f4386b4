use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or saving a record collection
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Data file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace {} with {}: {source}", path.display(), temp.display())]
    Replace {
        temp: PathBuf,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whole-collection persistence for one resource type.
///
/// Every call reads or writes the complete ordered collection. Implementations
/// give no locking or versioning guarantees: two concurrent load/modify/save
/// cycles may overwrite each other.
#[async_trait]
pub trait RecordStore<T>: Send + Sync {
    /// Read the full collection in stored order
    async fn load(&self) -> Result<Vec<T>, StorageError>;

    /// Replace the full collection
    async fn save(&self, records: &[T]) -> Result<(), StorageError>;

    /// Human-readable location, attached to service logs
    fn location(&self) -> String;
}
