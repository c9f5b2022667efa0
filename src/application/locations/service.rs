//! Location use cases

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    validate_draft, DomainError, DomainResult, Location, LocationDraft, LocationId,
    LocationRepository,
};

/// Service for the location resource.
///
/// Every operation is a single store round trip; nothing is cached or
/// shared between calls apart from the repository handle.
pub struct LocationService {
    repo: Arc<dyn LocationRepository>,
}

impl LocationService {
    pub fn new(repo: Arc<dyn LocationRepository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<dyn LocationRepository> {
        &self.repo
    }

    pub async fn list_all(&self) -> DomainResult<Vec<Location>> {
        self.repo.find_all().await
    }

    /// Store a new location. Every field must be present; nothing is
    /// written when validation fails.
    pub async fn create(&self, draft: LocationDraft) -> DomainResult<Location> {
        validate_draft(&draft)?;
        let new_location = draft.require_all()?;

        let stored = self.repo.insert(new_location).await?;
        metrics::counter!("locations_created_total").increment(1);
        info!(id = %stored.id, phone_org = %stored.phone_org, "Location created");
        Ok(stored)
    }

    pub async fn get(&self, raw_id: &str) -> DomainResult<Location> {
        let id = LocationId::parse(raw_id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::location_not_found(raw_id))
    }

    /// Overwrite the fields carried by `draft`.
    ///
    /// Unlike [`create`](Self::create), field presence is not enforced:
    /// absent fields keep their stored value.
    pub async fn update(&self, raw_id: &str, draft: LocationDraft) -> DomainResult<Location> {
        validate_draft(&draft)?;
        let id = LocationId::parse(raw_id)?;

        let updated = self
            .repo
            .update(id, draft)
            .await?
            .ok_or_else(|| DomainError::location_not_found(raw_id))?;
        info!(id = %updated.id, "Location updated");
        Ok(updated)
    }

    /// Remove a location and hand back what was stored.
    pub async fn delete(&self, raw_id: &str) -> DomainResult<Location> {
        let id = LocationId::parse(raw_id)?;

        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::location_not_found(raw_id))?;
        metrics::counter!("locations_deleted_total").increment(1);
        info!(id = %deleted.id, "Location deleted");
        Ok(deleted)
    }

    /// All locations whose `phone_org` equals the given value exactly.
    /// No match yields an empty list.
    pub async fn list_by_phone_org(&self, phone_org: &str) -> DomainResult<Vec<Location>> {
        let locations = self.repo.find_by_phone_org(phone_org).await?;
        debug!(phone_org, count = locations.len(), "Locations by phone_org");
        Ok(locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::model::tests::shelter_draft;
    use crate::infrastructure::storage::InMemoryLocationRepository;

    fn service() -> LocationService {
        LocationService::new(Arc::new(InMemoryLocationRepository::new()))
    }

    #[tokio::test]
    async fn create_then_get_returns_same_record() {
        let svc = service();
        let created = svc.create(shelter_draft()).await.unwrap();
        let fetched = svc.get(&created.id.to_string()).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn create_with_missing_field_persists_nothing() {
        let svc = service();
        let mut draft = shelter_draft();
        draft.phone_org = None;

        let err = svc.create(draft).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let svc = service();
        let err = svc.get(&LocationId::generate().to_string()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn malformed_id_is_a_store_error() {
        let svc = service();
        assert!(matches!(svc.get("123").await, Err(DomainError::Storage(_))));
        assert!(matches!(
            svc.update("123", LocationDraft::default()).await,
            Err(DomainError::Storage(_))
        ));
        assert!(matches!(svc.delete("123").await, Err(DomainError::Storage(_))));
    }

    #[tokio::test]
    async fn update_does_not_require_every_field() {
        let svc = service();
        let created = svc.create(shelter_draft()).await.unwrap();

        let changes = LocationDraft {
            status: Some(Some("resolved".into())),
            ..Default::default()
        };
        let updated = svc.update(&created.id.to_string(), changes).await.unwrap();

        assert_eq!(updated.status, "resolved");
        assert_eq!(updated.name, created.name);
        assert_eq!(svc.get(&created.id.to_string()).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_rejects_empty_text() {
        let svc = service();
        let created = svc.create(shelter_draft()).await.unwrap();

        let changes = LocationDraft {
            name: Some(Some(String::new())),
            ..Default::default()
        };
        let err = svc.update(&created.id.to_string(), changes).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(svc.get(&created.id.to_string()).await.unwrap().name, "Shelter A");
    }

    #[tokio::test]
    async fn update_with_null_is_a_store_error() {
        let svc = service();
        let created = svc.create(shelter_draft()).await.unwrap();

        let changes = LocationDraft {
            name: Some(None),
            status: Some(Some("resolved".into())),
            ..Default::default()
        };
        let err = svc.update(&created.id.to_string(), changes).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        assert_eq!(svc.get(&created.id.to_string()).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = service();
        let err = svc
            .update(&LocationId::generate().to_string(), shelter_draft())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_returns_snapshot_and_removes() {
        let svc = service();
        let created = svc.create(shelter_draft()).await.unwrap();
        let id = created.id.to_string();

        assert_eq!(svc.delete(&id).await.unwrap(), created);
        assert!(matches!(svc.get(&id).await, Err(DomainError::NotFound { .. })));
        assert!(matches!(svc.delete(&id).await, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn phone_org_without_match_is_empty() {
        let svc = service();
        svc.create(shelter_draft()).await.unwrap();
        assert!(svc.list_by_phone_org("OrgB").await.unwrap().is_empty());
        assert_eq!(svc.list_by_phone_org("OrgA").await.unwrap().len(), 1);
    }
}
