//! Router configuration for the API.
//!
//! Centralized route registration, OpenAPI document assembly, and
//! middleware configuration.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, not_found_fallback, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `POST /signup`, `POST /login` - Authentication
/// - `/listings` - Listing CRUD with nested image retrieval
/// - `/users` - Profiles and per-user mailboxes
/// - `/messages` - Message deletion
/// - `/upload` - Listing image upload
/// - `/health` - Probes
/// - `/docs` - Swagger UI over the generated OpenAPI document
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added
/// runs first): request IDs are assigned before the logging layer reads
/// them.
pub fn create_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(handlers::auth::auth_routes())
        .merge(handlers::health::health_routes())
        .nest("/listings", handlers::listings::listing_routes())
        .nest("/users", handlers::users::user_routes())
        .nest("/messages", handlers::messages::message_routes())
        .nest("/upload", handlers::uploads::upload_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .fallback(not_found_fallback)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // Middleware is applied in reverse order - last added runs first
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
