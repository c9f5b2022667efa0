//! In-memory location store for development and testing

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainResult, Location, LocationDraft, LocationId, LocationRepository, NewLocation};

/// Location store kept in process memory.
///
/// Listing returns records in insertion order, like a document store's
/// natural order.
pub struct InMemoryLocationRepository {
    locations: DashMap<LocationId, (u64, Location)>,
    sequence: AtomicU64,
}

impl InMemoryLocationRepository {
    pub fn new() -> Self {
        Self {
            locations: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    fn sorted(&self, filter: impl Fn(&Location) -> bool) -> Vec<Location> {
        let mut rows: Vec<(u64, Location)> = self
            .locations
            .iter()
            .filter(|entry| filter(&entry.value().1))
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, location)| location).collect()
    }
}

impl Default for InMemoryLocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn find_all(&self) -> DomainResult<Vec<Location>> {
        Ok(self.sorted(|_| true))
    }

    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>> {
        Ok(self.locations.get(&id).map(|entry| entry.value().1.clone()))
    }

    async fn find_by_phone_org(&self, phone_org: &str) -> DomainResult<Vec<Location>> {
        Ok(self.sorted(|location| location.phone_org == phone_org))
    }

    async fn insert(&self, location: NewLocation) -> DomainResult<Location> {
        let id = LocationId::generate();
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let stored = location.with_id(id);
        self.locations.insert(id, (seq, stored.clone()));
        Ok(stored)
    }

    async fn update(&self, id: LocationId, changes: LocationDraft) -> DomainResult<Option<Location>> {
        let Some(mut entry) = self.locations.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(&mut entry.value_mut().1)?;
        Ok(Some(entry.value().1.clone()))
    }

    async fn delete(&self, id: LocationId) -> DomainResult<Option<Location>> {
        Ok(self.locations.remove(&id).map(|(_, (_, location))| location))
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::model::tests::shelter_draft;

    fn new_location(name: &str, phone_org: &str) -> NewLocation {
        let mut draft = shelter_draft();
        draft.name = Some(Some(name.to_string()));
        draft.phone_org = Some(Some(phone_org.to_string()));
        draft.require_all().unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let repo = InMemoryLocationRepository::new();
        let a = repo.insert(new_location("A", "OrgA")).await.unwrap();
        let b = repo.insert(new_location("B", "OrgA")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(repo.find_by_id(a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo = InMemoryLocationRepository::new();
        for name in ["first", "second", "third"] {
            repo.insert(new_location(name, "OrgA")).await.unwrap();
        }
        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn phone_org_match_is_exact() {
        let repo = InMemoryLocationRepository::new();
        repo.insert(new_location("A", "OrgA")).await.unwrap();
        repo.insert(new_location("B", "orga")).await.unwrap();

        let found = repo.find_by_phone_org("OrgA").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
        assert!(repo.find_by_phone_org("Org").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_missing_return_none() {
        let repo = InMemoryLocationRepository::new();
        let id = LocationId::generate();
        assert!(repo.update(id, LocationDraft::default()).await.unwrap().is_none());
        assert!(repo.delete(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_returns_snapshot() {
        let repo = InMemoryLocationRepository::new();
        let stored = repo.insert(new_location("A", "OrgA")).await.unwrap();
        assert_eq!(repo.delete(stored.id).await.unwrap(), Some(stored.clone()));
        assert!(repo.find_by_id(stored.id).await.unwrap().is_none());
    }
}
