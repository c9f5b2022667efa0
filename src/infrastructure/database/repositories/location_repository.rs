//! SeaORM implementation of LocationRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use tracing::debug;

use crate::domain::{DomainResult, Location, LocationDraft, LocationId, LocationRepository, NewLocation};
use crate::infrastructure::database::entities::location;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: location::Model) -> DomainResult<Location> {
    Ok(Location {
        id: LocationId::parse(&m.id)?,
        name: m.name,
        latitude: m.latitude,
        longitude: m.longitude,
        request_sender: m.request_sender,
        request_type: m.request_type,
        status: m.status,
        number_people: m.number_people,
        phone_number: m.phone_number,
        date: m.date,
        phone_org: m.phone_org,
    })
}

fn domain_to_active(l: Location) -> location::ActiveModel {
    location::ActiveModel {
        id: Set(l.id.to_string()),
        name: Set(l.name),
        latitude: Set(l.latitude),
        longitude: Set(l.longitude),
        request_sender: Set(l.request_sender),
        request_type: Set(l.request_type),
        status: Set(l.status),
        number_people: Set(l.number_people),
        phone_number: Set(l.phone_number),
        date: Set(l.date),
        phone_org: Set(l.phone_org),
    }
}

/// A row deleted between the read and the write is reported as absent.
fn updated_or_gone(result: Result<location::Model, DbErr>) -> DomainResult<Option<Location>> {
    match result {
        Ok(model) => entity_to_domain(model).map(Some),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn models_to_domain(models: Vec<location::Model>) -> DomainResult<Vec<Location>> {
    models.into_iter().map(entity_to_domain).collect()
}

// ── SeaOrmLocationRepository ────────────────────────────────────

pub struct SeaOrmLocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn find_all(&self) -> DomainResult<Vec<Location>> {
        let models = location::Entity::find().all(&self.db).await?;
        models_to_domain(models)
    }

    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>> {
        location::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .map(entity_to_domain)
            .transpose()
    }

    async fn find_by_phone_org(&self, phone_org: &str) -> DomainResult<Vec<Location>> {
        let models = location::Entity::find()
            .filter(location::Column::PhoneOrg.eq(phone_org))
            .all(&self.db)
            .await?;
        models_to_domain(models)
    }

    async fn insert(&self, new_location: NewLocation) -> DomainResult<Location> {
        let model = domain_to_active(new_location.with_id(LocationId::generate()));
        let inserted = model.insert(&self.db).await?;
        debug!("Location row inserted: {}", inserted.id);
        entity_to_domain(inserted)
    }

    async fn update(&self, id: LocationId, changes: LocationDraft) -> DomainResult<Option<Location>> {
        let Some(existing) = location::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut current = entity_to_domain(existing)?;
        changes.apply_to(&mut current)?;

        updated_or_gone(domain_to_active(current).update(&self.db).await)
    }

    async fn delete(&self, id: LocationId) -> DomainResult<Option<Location>> {
        let Some(existing) = location::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let result = location::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            // Removed by a concurrent request between the read and the delete
            return Ok(None);
        }
        entity_to_domain(existing).map(Some)
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db.ping().await?;
        Ok(())
    }
}
