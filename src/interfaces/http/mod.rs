//! HTTP REST API interfaces
//!
//! - `common`: shared response bodies and the validated JSON extractor
//! - `modules`: handlers and middleware per concern
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
