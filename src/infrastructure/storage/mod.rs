//! Non-database storage backends

pub mod memory;

pub use memory::InMemoryLocationRepository;
