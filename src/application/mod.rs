pub mod locations;

pub use locations::LocationService;
