//! Location aggregate
//!
//! The single entity of the service: a reported point with the request
//! details attached to it.

pub mod model;
pub mod repository;

pub use model::{validate_draft, Location, LocationDraft, LocationId, NewLocation};
pub use repository::LocationRepository;
