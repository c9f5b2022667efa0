//! Location resource: CRUD plus lookup by `phone_org`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
