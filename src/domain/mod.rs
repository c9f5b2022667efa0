//! Core domain types and the store port

pub mod location;

pub use location::{
    validate_draft, Location, LocationDraft, LocationId, LocationRepository, NewLocation,
};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::{DomainError, DomainResult};
