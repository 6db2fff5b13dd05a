use async_trait::async_trait;
use models::record::{Record, RecordMap, RecordPatch};

use crate::storage::memory_map_store::MemoryMapStore;

/// Storage seam for records. Each method is one atomic step against the store.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn get(&self, id: &str) -> Option<Record>;
    /// First record whose name equals `name`, in storage iteration order.
    async fn find_by_name(&self, name: &str) -> Option<Record>;
    /// Insert or overwrite `id`, returning the whole store as it stands afterwards.
    async fn upsert(&self, id: String, record: Record) -> RecordMap;
    /// Apply `patch` in place; `None` when `id` is absent.
    async fn patch(&self, id: &str, patch: &RecordPatch) -> Option<Record>;
    async fn remove(&self, id: &str) -> Option<Record>;
}

/// Process-local repository; contents are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryRecordRepository {
    store: MemoryMapStore<String, Record>,
}

impl MemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordRepository for MemoryRecordRepository {
    async fn get(&self, id: &str) -> Option<Record> {
        self.store.get(&id.to_string()).await
    }

    async fn find_by_name(&self, name: &str) -> Option<Record> {
        self.store.find(|r| r.name == name).await
    }

    async fn upsert(&self, id: String, record: Record) -> RecordMap {
        self.store
            .update_map(|map| {
                map.insert(id, record);
                map.clone()
            })
            .await
    }

    async fn patch(&self, id: &str, patch: &RecordPatch) -> Option<Record> {
        self.store
            .update_map(|map| {
                let existing = map.get_mut(id)?;
                patch.apply(existing);
                Some(existing.clone())
            })
            .await
    }

    async fn remove(&self, id: &str) -> Option<Record> {
        self.store.remove(&id.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_returns_whole_store_and_overwrites() {
        let repo = MemoryRecordRepository::new();
        let all = repo.upsert("a1".into(), Record::new("Widget", 100)).await;
        assert_eq!(all.len(), 1);
        let all = repo.upsert("a2".into(), Record::new("Gadget", 5)).await;
        assert_eq!(all.len(), 2);
        let all = repo.upsert("a1".into(), Record::new("Sprocket", 9)).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all["a1"], Record::new("Sprocket", 9));
    }

    #[tokio::test]
    async fn patch_and_remove_on_missing_id_are_none() {
        let repo = MemoryRecordRepository::new();
        let patch = RecordPatch { price: Some(1), ..Default::default() };
        assert_eq!(repo.patch("nope", &patch).await, None);
        assert_eq!(repo.remove("nope").await, None);
        assert_eq!(repo.get("nope").await, None);
    }

    #[tokio::test]
    async fn find_by_name_matches_exactly() {
        let repo = MemoryRecordRepository::new();
        repo.upsert("a1".into(), Record::new("Widget", 100)).await;
        assert_eq!(repo.find_by_name("Widget").await, Some(Record::new("Widget", 100)));
        assert_eq!(repo.find_by_name("widget").await, None);
    }
}
