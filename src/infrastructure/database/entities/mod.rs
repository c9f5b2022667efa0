//! Database entities module

pub mod location;

pub use location::Entity as Location;
