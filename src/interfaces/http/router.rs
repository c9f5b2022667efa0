//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::LocationService;
use crate::domain::LocationDraft;

use super::common::ErrorResponse;
use super::modules::health::{self, HealthState};
use super::modules::locations::{self, LocationEnvelope, LocationResponse, LocationState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::request_id::request_id_middleware;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        locations::list_locations,
        locations::create_location,
        locations::get_location,
        locations::update_location,
        locations::delete_location,
        locations::list_locations_by_phone_org,
    ),
    components(
        schemas(
            ErrorResponse,
            LocationDraft,
            LocationResponse,
            LocationEnvelope,
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Locations", description = "Reported locations: create, read, update, delete, lookup by phone_org"),
    ),
    info(
        title = "Location Service API",
        version = "1.0.0",
        description = "REST API for reporting locations and rendering them on a map",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Cross-origin policy: any origin, the four resource verbs, and the
/// `Content-Type` / `Authorization` request headers.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Create the API router with all routes.
///
/// `/metrics` is mounted only when a Prometheus handle is supplied.
pub fn create_api_router(
    service: Arc<LocationService>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Router {
    let health_state = HealthState {
        repo: service.repository().clone(),
        started_at: Arc::new(Instant::now()),
    };

    let location_routes = Router::new()
        .route(
            "/locations",
            get(locations::list_locations).post(locations::create_location),
        )
        .route(
            "/locations/phone_org/{phone_org}",
            get(locations::list_locations_by_phone_org),
        )
        .route(
            "/locations/{id}",
            get(locations::get_location)
                .put(locations::update_location)
                .delete(locations::delete_location),
        )
        .route_layer(middleware::from_fn(http_metrics_middleware))
        .with_state(LocationState { service });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(location_routes);

    if let Some(handle) = prometheus_handle {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

// ── Tests ──────────────────────────────────────────────────────
