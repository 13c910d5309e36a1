//! Listing CRUD request handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::LISTING_TAG;
use crate::api::dto::{
    CreateListingRequest, ListingDeletedResponse, ListingDetailEnvelope, ListingEnvelope,
    ListingResponse, ListingsEnvelope, UpdateListingRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates the listing routes.
///
/// # Routes
/// - `GET /`          - Browse all listings (public)
/// - `POST /`         - Create a listing (owner only)
/// - `GET /{id}`      - Get a listing with its images (public)
/// - `PATCH /{id}`    - Partially update a listing (owner only)
/// - `DELETE /{id}`   - Delete a listing (owner only)
pub fn listing_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_listings, create_listing))
        .routes(routes!(get_listing, update_listing, delete_listing))
}

/// GET /listings - Browse all listings
#[utoipa::path(
    get,
    path = "/",
    tag = LISTING_TAG,
    responses(
        (status = 200, description = "All listings", body = ListingsEnvelope)
    )
)]
async fn list_listings(State(state): State<AppState>) -> AppResult<Json<ListingsEnvelope>> {
    let listings = state.services.listings.list_listings().await?;
    Ok(Json(ListingsEnvelope {
        listings: listings.into_iter().map(ListingResponse::from).collect(),
    }))
}

/// POST /listings - Create a listing
///
/// The owner username in the body must match the authenticated caller.
#[utoipa::path(
    post,
    path = "/",
    tag = LISTING_TAG,
    request_body = CreateListingRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Listing created", body = ListingEnvelope),
        (status = 400, description = "Invalid request data"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Listing owner is not the caller")
    )
)]
async fn create_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateListingRequest>,
) -> AppResult<(StatusCode, Json<ListingEnvelope>)> {
    let listing = state
        .services
        .listings
        .create_listing(payload.into_new_listing(), &auth.username)
        .await?;

    Ok((StatusCode::CREATED, Json(ListingEnvelope::from(listing))))
}

/// GET /listings/{id} - Get a listing with its images
#[utoipa::path(
    get,
    path = "/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "Listing detail", body = ListingDetailEnvelope),
        (status = 404, description = "Listing not found")
    )
)]
async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ListingDetailEnvelope>> {
    let detail = state.services.listings.get_listing(id).await?;
    Ok(Json(ListingDetailEnvelope::from(detail)))
}

/// PATCH /listings/{id} - Partially update a listing
///
/// Only fields present in the body change; omitted fields keep their
/// values.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing ID")),
    request_body = UpdateListingRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Listing updated", body = ListingEnvelope),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller does not own the listing"),
        (status = 404, description = "Listing not found")
    )
)]
async fn update_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateListingRequest>,
) -> AppResult<Json<ListingEnvelope>> {
    let listing = state
        .services
        .listings
        .update_listing(id, payload.into_update_listing(), &auth.username)
        .await?;

    Ok(Json(ListingEnvelope::from(listing)))
}

/// DELETE /listings/{id} - Delete a listing
///
/// Attached images are removed with the listing.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing ID")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Listing deleted", body = ListingDeletedResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller does not own the listing"),
        (status = 404, description = "Listing not found")
    )
)]
async fn delete_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ListingDeletedResponse>> {
    state
        .services
        .listings
        .delete_listing(id, &auth.username)
        .await?;

    Ok(Json(ListingDeletedResponse::new()))
}
