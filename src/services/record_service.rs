use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::database::{RecordStore, StorageError};
use crate::models::Record;
use crate::validation::{Validate, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// CRUD over one resource collection.
///
/// Every operation loads the whole collection, works on it in memory and, for
/// mutations, saves the whole collection back. Input is validated before the
/// store is touched.
pub struct RecordService<T> {
    store: Arc<dyn RecordStore<T>>,
}

impl<T> Clone for RecordService<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Record> RecordService<T> {
    pub fn new(store: Arc<dyn RecordStore<T>>) -> Self {
        Self { store }
    }

    /// Where the collection lives, for logs
    pub fn location(&self) -> String {
        self.store.location()
    }

    pub async fn list(&self) -> Result<Vec<T>, RecordError> {
        Ok(self.store.load().await?)
    }

    pub async fn get(&self, id: &str) -> Result<T, RecordError> {
        self.store
            .load()
            .await?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or(RecordError::NotFound)
    }

    /// All records matching `predicate` in stored order; NotFound when none do
    pub async fn find_where<F>(&self, predicate: F) -> Result<Vec<T>, RecordError>
    where
        F: Fn(&T) -> bool + Send,
    {
        let matches: Vec<T> = self
            .store
            .load()
            .await?
            .into_iter()
            .filter(|record| predicate(record))
            .collect();

        if matches.is_empty() {
            return Err(RecordError::NotFound);
        }
        Ok(matches)
    }

    pub async fn create(&self, draft: T::Draft) -> Result<T, RecordError> {
        draft.validate()?;

        let mut records = self.store.load().await?;
        let record = T::from_draft(fresh_id(&records), draft);
        records.push(record.clone());
        self.store.save(&records).await?;

        info!(id = record.id(), store = %self.location(), "created {}", T::KIND);
        Ok(record)
    }

    pub async fn update(&self, id: &str, patch: T::Patch) -> Result<T, RecordError> {
        patch.validate()?;

        let mut records = self.store.load().await?;
        let slot = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(RecordError::NotFound)?;
        let updated = slot.merge(patch);
        *slot = updated.clone();
        self.store.save(&records).await?;

        info!(id, store = %self.location(), "updated {}", T::KIND);
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), RecordError> {
        let records = self.store.load().await?;
        let before = records.len();
        let remaining: Vec<T> = records.into_iter().filter(|record| record.id() != id).collect();
        if remaining.len() == before {
            return Err(RecordError::NotFound);
        }
        self.store.save(&remaining).await?;

        info!(id, store = %self.location(), "deleted {}", T::KIND);
        Ok(())
    }
}

/// Random id, regenerated on the (unlikely) chance it is already taken
fn fresh_id<T: Record>(records: &[T]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !records.iter().any(|record| record.id() == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use crate::models::{NewStoreOverwrite, NewStoreTime, StoreOverwrite, StoreTime, StoreTimePatch};
    use std::collections::HashSet;

    fn store_time(id: &str, day_of_week: i32) -> StoreTime {
        StoreTime {
            id: id.to_string(),
            day_of_week,
            is_open: true,
            start_time: Some("09:00".to_string()),
            end_time: Some("17:00".to_string()),
        }
    }

    fn service(records: Vec<StoreTime>) -> (Arc<MemoryStore<StoreTime>>, RecordService<StoreTime>) {
        let store = Arc::new(MemoryStore::new(records));
        let service = RecordService::new(store.clone() as Arc<dyn RecordStore<StoreTime>>);
        (store, service)
    }

    fn new_store_time(day_of_week: i32) -> NewStoreTime {
        NewStoreTime {
            day_of_week,
            is_open: true,
            start_time: Some("09:00".to_string()),
            end_time: Some("18:00".to_string()),
        }
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let (store, service) = service(vec![]);
        for day in 0..7 {
            for _ in 0..5 {
                service.create(new_store_time(day)).await.unwrap();
            }
        }

        let records = store.snapshot().unwrap();
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(records.len(), 35);
        assert_eq!(ids.len(), 35);
    }

    #[tokio::test]
    async fn test_create_appends_and_returns_record() {
        let (store, service) = service(vec![store_time("a", 0)]);
        let created = service.create(new_store_time(1)).await.unwrap();

        assert_eq!(created.day_of_week, 1);
        assert_eq!(created.start_time.as_deref(), Some("09:00"));
        let records = store.snapshot().unwrap();
        assert_eq!(records.last(), Some(&created));
        assert_eq!(records[0].id, "a");
    }

    #[tokio::test]
    async fn test_find_where_preserves_order() {
        let (_, service) = service(vec![
            store_time("a", 1),
            store_time("b", 2),
            store_time("c", 1),
            store_time("d", 1),
        ]);

        let found = service.find_where(|t| t.day_of_week == 1).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);

        let err = service.find_where(|t| t.day_of_week == 5).await.unwrap_err();
        assert!(matches!(err, RecordError::NotFound));
    }

    #[tokio::test]
    async fn test_update_merges_and_persists() {
        let (store, service) = service(vec![store_time("a", 1), store_time("b", 2)]);
        let patch = StoreTimePatch {
            end_time: Some(Some("20:00".to_string())),
            ..Default::default()
        };

        let updated = service.update("b", patch).await.unwrap();
        assert_eq!(updated.end_time.as_deref(), Some("20:00"));
        assert_eq!(updated.start_time.as_deref(), Some("09:00"));
        assert_eq!(store.snapshot().unwrap()[1], updated);
    }

    #[tokio::test]
    async fn test_update_missing_id() {
        let (_, service) = service(vec![store_time("a", 1)]);
        let err = service.update("zzz", StoreTimePatch::default()).await.unwrap_err();
        assert!(matches!(err, RecordError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_collection_unchanged() {
        let (store, service) = service(vec![store_time("a", 1), store_time("b", 2)]);

        let err = service.delete("zzz").await.unwrap_err();
        assert!(matches!(err, RecordError::NotFound));
        assert_eq!(store.snapshot().unwrap().len(), 2);

        service.delete("a").await.unwrap();
        let remaining = store.snapshot().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "b");
    }

    #[tokio::test]
    async fn test_invalid_overwrite_never_touches_storage() {
        let store = Arc::new(MemoryStore::<StoreOverwrite>::missing());
        let service = RecordService::new(store.clone() as Arc<dyn RecordStore<StoreOverwrite>>);
        let draft = NewStoreOverwrite {
            day: 32,
            month: 13,
            is_open: true,
            start_time: "09:00".to_string(),
            end_time: "18:00".to_string(),
        };

        // A missing store would surface as Storage, so Validation proves no load happened
        let err = service.create(draft).await.unwrap_err();
        assert!(matches!(err, RecordError::Validation(_)));
        assert!(store.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_missing_collection_is_storage_error() {
        let store = Arc::new(MemoryStore::<StoreTime>::missing());
        let service = RecordService::new(store as Arc<dyn RecordStore<StoreTime>>);
        assert!(matches!(service.list().await.unwrap_err(), RecordError::Storage(_)));
    }

    #[test]
    fn test_location_names_backing_store() {
        let (_, memory) = service(vec![]);
        assert_eq!(memory.location(), "memory");

        let file = RecordService::new(Arc::new(crate::database::JsonFileStore::<StoreTime>::new(
            "/data/store_times.json",
        )) as Arc<dyn RecordStore<StoreTime>>);
        assert_eq!(file.location(), "/data/store_times.json");
    }
}
