//! Location repository interface

use async_trait::async_trait;

use super::model::{Location, LocationDraft, LocationId, NewLocation};
use crate::shared::DomainResult;

/// Port to the document store holding locations.
///
/// `update` and `delete` return `Ok(None)` when no record has the given
/// identifier.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Location>>;
    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>>;
    async fn find_by_phone_org(&self, phone_org: &str) -> DomainResult<Vec<Location>>;
    async fn insert(&self, location: NewLocation) -> DomainResult<Location>;
    async fn update(&self, id: LocationId, changes: LocationDraft) -> DomainResult<Option<Location>>;
    async fn delete(&self, id: LocationId) -> DomainResult<Option<Location>>;

    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> DomainResult<()>;
}
