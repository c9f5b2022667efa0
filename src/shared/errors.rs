use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    /// Any failure reported by the document store (connectivity, query,
    /// malformed identifier).
    #[error("Store error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn location_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity: "Location",
            field: "id",
            value: id.into(),
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Storage(e.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
