use std::sync::Arc;
use tracing::{debug, info, instrument};

use models::record::{Record, RecordMap, RecordPatch};

use crate::errors::ServiceError;
use crate::records::repository::RecordRepository;

pub const NAME_NOT_FOUND: &str = "Data not found!";
pub const MISSING_FIELDS: &str = "Provide all function headers.";
pub const UPDATE_NOT_FOUND: &str = "Data is not present!";
pub const DELETE_NOT_FOUND: &str = "Data not present!";

/// Application service encapsulating record store business rules.
/// The repository is supplied by the caller, so tests and alternative
/// backends can swap it freely.
#[derive(Clone)]
pub struct RecordService {
    repo: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self { Self { repo } }

    /// Absence is a normal result, never an error.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Option<Record> {
        self.repo.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: Option<&str>) -> Result<Record, ServiceError> {
        let Some(name) = name else {
            return Err(ServiceError::NotFound(NAME_NOT_FOUND.into()));
        };
        self.repo
            .find_by_name(name)
            .await
            .ok_or_else(|| ServiceError::NotFound(NAME_NOT_FOUND.into()))
    }

    /// Insert or silently overwrite `id`; returns the full store.
    #[instrument(skip(self, record), fields(name = %record.name, price = record.price))]
    pub async fn create(&self, id: String, record: Record) -> Result<RecordMap, ServiceError> {
        if let Err(e) = record.validate() {
            debug!(reason = %e, "create rejected");
            return Err(ServiceError::Validation(MISSING_FIELDS.into()));
        }
        let all = self.repo.upsert(id, record).await;
        info!(count = all.len(), "record stored");
        Ok(all)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: &str, patch: RecordPatch) -> Result<Record, ServiceError> {
        let updated = self
            .repo
            .patch(id, &patch)
            .await
            .ok_or_else(|| ServiceError::NotFound(UPDATE_NOT_FOUND.into()))?;
        info!("record updated");
        Ok(updated)
    }

    /// Returns the record as it was right before removal.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Record, ServiceError> {
        let removed = self
            .repo
            .remove(id)
            .await
            .ok_or_else(|| ServiceError::NotFound(DELETE_NOT_FOUND.into()))?;
        info!("record deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::repository::MemoryRecordRepository;

    fn setup() -> RecordService {
        RecordService::new(Arc::new(MemoryRecordRepository::new()))
    }

    fn widget() -> Record { Record::new("Widget", 100) }

    #[tokio::test]
    async fn create_then_get_returns_equal_record() -> Result<(), anyhow::Error> {
        let svc = setup();
        let all = svc.create("a1".into(), widget()).await?;
        assert_eq!(all.len(), 1);
        let got = svc.get("a1").await;
        assert_eq!(got, Some(Record { name: "Widget".into(), price: 100, description: String::new() }));
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_is_none() {
        let svc = setup();
        assert_eq!(svc.get("missing").await, None);
    }

    #[tokio::test]
    async fn find_by_name_hits_and_misses() -> Result<(), anyhow::Error> {
        let svc = setup();
        svc.create("a1".into(), widget()).await?;
        assert_eq!(svc.find_by_name(Some("Widget")).await?, widget());

        let err = svc.find_by_name(Some("Gadget")).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound(NAME_NOT_FOUND.into()));
        let err = svc.find_by_name(None).await.unwrap_err();
        assert_eq!(err.message(), "Data not found!");
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_falsy_fields_and_leaves_store_unchanged() {
        let svc = setup();
        for bad in [Record::new("Widget", 0), Record::new("", 100), Record::new("", 0)] {
            let err = svc.create("a1".into(), bad).await.unwrap_err();
            assert_eq!(err, ServiceError::Validation(MISSING_FIELDS.into()));
        }
        assert_eq!(svc.get("a1").await, None);
    }

    #[tokio::test]
    async fn create_overwrites_existing_id() -> Result<(), anyhow::Error> {
        let svc = setup();
        svc.create("a1".into(), widget()).await?;
        let all = svc.create("a1".into(), Record::new("Gadget", 3)).await?;
        assert_eq!(all.len(), 1);
        assert_eq!(svc.get("a1").await, Some(Record::new("Gadget", 3)));
        Ok(())
    }

    #[tokio::test]
    async fn update_changes_price_and_keeps_name() -> Result<(), anyhow::Error> {
        let svc = setup();
        svc.create("a1".into(), widget()).await?;
        let patch = RecordPatch { price: Some(150), ..Default::default() };
        let updated = svc.update("a1", patch).await?;
        assert_eq!(updated.price, 150);
        assert_eq!(updated.name, "Widget");
        assert_eq!(svc.get("a1").await, Some(updated));
        Ok(())
    }

    #[tokio::test]
    async fn update_with_zero_price_keeps_existing() -> Result<(), anyhow::Error> {
        let svc = setup();
        svc.create("a1".into(), widget()).await?;
        let updated = svc.update("a1", RecordPatch { price: Some(0), ..Default::default() }).await?;
        assert_eq!(updated, widget());
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = setup();
        let err = svc.update("a1", RecordPatch { price: Some(1), ..Default::default() }).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound(UPDATE_NOT_FOUND.into()));
        assert_eq!(svc.get("a1").await, None);
    }

    #[tokio::test]
    async fn delete_returns_previous_record_then_absent() -> Result<(), anyhow::Error> {
        let svc = setup();
        svc.create("a1".into(), widget()).await?;
        svc.create("a2".into(), Record::new("Gadget", 5)).await?;
        assert_eq!(svc.delete("a1").await?, widget());
        assert_eq!(svc.get("a1").await, None);
        assert_eq!(svc.get("a2").await, Some(Record::new("Gadget", 5)));

        let err = svc.delete("a1").await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound(DELETE_NOT_FOUND.into()));
        Ok(())
    }
}
