//! External concerns: the SeaORM document store and the in-memory store

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig, SeaOrmLocationRepository};
pub use storage::InMemoryLocationRepository;
