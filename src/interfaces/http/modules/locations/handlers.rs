//! Location REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, warn};

use super::dto::{LocationEnvelope, LocationResponse};
use crate::application::LocationService;
use crate::domain::{DomainError, Location, LocationDraft};
use crate::interfaces::http::common::{ErrorResponse, ValidatedJson};

/// State shared by the location handlers
#[derive(Clone)]
pub struct LocationState {
    pub service: Arc<LocationService>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error to its HTTP answer. `context` names the failed
/// operation in 500 responses; `invalid` is the message for 400s.
fn failure(err: DomainError, context: &str, invalid: &str) -> HandlerError {
    match err {
        DomainError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Location not found")),
        ),
        DomainError::Validation(detail) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_error(invalid, detail)),
        ),
        DomainError::Storage(detail) => {
            error!("{}: {}", context, detail);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_error(context, detail)),
            )
        }
    }
}

fn to_responses(locations: Vec<Location>) -> Vec<LocationResponse> {
    locations.into_iter().map(Into::into).collect()
}

#[utoipa::path(
    get,
    path = "/locations",
    tag = "Locations",
    responses(
        (status = 200, description = "All stored locations", body = [LocationResponse]),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn list_locations(
    State(state): State<LocationState>,
) -> Result<Json<Vec<LocationResponse>>, HandlerError> {
    match state.service.list_all().await {
        Ok(locations) => Ok(Json(to_responses(locations))),
        Err(e) => Err(failure(e, "Error fetching locations", "Invalid request")),
    }
}

#[utoipa::path(
    post,
    path = "/locations",
    tag = "Locations",
    request_body = LocationDraft,
    responses(
        (status = 201, description = "Created", body = LocationEnvelope),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn create_location(
    State(state): State<LocationState>,
    ValidatedJson(draft): ValidatedJson<LocationDraft>,
) -> Result<(StatusCode, Json<LocationEnvelope>), HandlerError> {
    match state.service.create(draft).await {
        Ok(location) => Ok((
            StatusCode::CREATED,
            Json(LocationEnvelope::new("Location added successfully", location)),
        )),
        Err(e) => {
            if let DomainError::Validation(detail) = &e {
                warn!("Rejected location: {}", detail);
            }
            Err(failure(e, "Error adding location", "All fields are required"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/locations/{id}",
    tag = "Locations",
    params(("id" = String, Path, description = "Location identifier")),
    responses(
        (status = 200, description = "Location details", body = LocationResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Store error or malformed identifier", body = ErrorResponse)
    )
)]
pub async fn get_location(
    State(state): State<LocationState>,
    Path(id): Path<String>,
) -> Result<Json<LocationResponse>, HandlerError> {
    match state.service.get(&id).await {
        Ok(location) => Ok(Json(location.into())),
        Err(e) => Err(failure(e, "Error fetching location", "Invalid request")),
    }
}

#[utoipa::path(
    put,
    path = "/locations/{id}",
    tag = "Locations",
    params(("id" = String, Path, description = "Location identifier")),
    request_body = LocationDraft,
    responses(
        (status = 200, description = "Updated", body = LocationEnvelope),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn update_location(
    State(state): State<LocationState>,
    Path(id): Path<String>,
    ValidatedJson(draft): ValidatedJson<LocationDraft>,
) -> Result<Json<LocationEnvelope>, HandlerError> {
    match state.service.update(&id, draft).await {
        Ok(location) => Ok(Json(LocationEnvelope::new(
            "Location updated successfully",
            location,
        ))),
        Err(e) => Err(failure(e, "Error updating location", "Invalid location data")),
    }
}

#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = "Locations",
    params(("id" = String, Path, description = "Location identifier")),
    responses(
        (status = 200, description = "Deleted; body holds the removed record", body = LocationEnvelope),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn delete_location(
    State(state): State<LocationState>,
    Path(id): Path<String>,
) -> Result<Json<LocationEnvelope>, HandlerError> {
    match state.service.delete(&id).await {
        Ok(location) => Ok(Json(LocationEnvelope::new(
            "Location deleted successfully",
            location,
        ))),
        Err(e) => Err(failure(e, "Error deleting location", "Invalid request")),
    }
}

#[utoipa::path(
    get,
    path = "/locations/phone_org/{phone_org}",
    tag = "Locations",
    params(("phone_org" = String, Path, description = "Exact, case-sensitive phone_org value")),
    responses(
        (status = 200, description = "Matching locations, possibly empty", body = [LocationResponse]),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn list_locations_by_phone_org(
    State(state): State<LocationState>,
    Path(phone_org): Path<String>,
) -> Result<Json<Vec<LocationResponse>>, HandlerError> {
    match state.service.list_by_phone_org(&phone_org).await {
        Ok(locations) => Ok(Json(to_responses(locations))),
        Err(e) => Err(failure(e, "Error fetching location", "Invalid request")),
    }
}
