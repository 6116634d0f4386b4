use async_trait::async_trait;
use std::sync::Mutex;

use super::store::{RecordStore, StorageError};

/// In-process record store, used by tests and as a stand-in backend.
///
/// `None` models an absent backing file so storage faults can be exercised.
pub struct MemoryStore<T> {
    records: Mutex<Option<Vec<T>>>,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(Some(records)),
        }
    }

    /// A store whose collection does not exist
    pub fn missing() -> Self {
        Self {
            records: Mutex::new(None),
        }
    }

    /// Current contents, or `None` when missing
    pub fn snapshot(&self) -> Option<Vec<T>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl<T> RecordStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> Result<Vec<T>, StorageError> {
        self.snapshot()
            .ok_or_else(|| StorageError::Missing(self.location().into()))
    }

    async fn save(&self, records: &[T]) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(records.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
