//! # Location Service
//!
//! Location-reporting backend: one `Location` resource exposed over HTTP
//! with create/read/update/delete and lookup by `phone_org`, backed by a
//! SeaORM store.
//!
//! ## Architecture
//!
//! - **domain**: the Location entity, its validation rules and the store port
//! - **application**: `LocationService`, one method per resource operation
//! - **infrastructure**: SeaORM and in-memory store adapters
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: error types and graceful shutdown
//! - **server**: startup and shutdown of the whole process

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmLocationRepository};

// Re-export API router
pub use interfaces::http::create_api_router;
