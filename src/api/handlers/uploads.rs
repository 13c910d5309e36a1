//! Image upload handler.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::UPLOAD_TAG;
use crate::api::dto::ImageEnvelope;
use crate::api::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Creates the upload routes.
///
/// # Routes
/// - `POST /` - Upload a listing image
pub fn upload_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(upload_image))
}

/// Parsed multipart payload: the target listing plus one file part.
struct UploadParts {
    listing_id: i32,
    filename: String,
    bytes: Vec<u8>,
}

/// Drains the multipart stream into an [`UploadParts`].
///
/// Expects a `listing_id` text field and a `file` part; order does not
/// matter, unknown fields are ignored.
async fn read_upload_parts(mut multipart: Multipart) -> AppResult<UploadParts> {
    let mut listing_id: Option<i32> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?
    {
        match field.name() {
            Some("listing_id") => {
                let text = field.text().await.map_err(|e| AppError::BadRequest {
                    message: e.to_string(),
                })?;
                let id = text.trim().parse().map_err(|_| {
                    AppError::validation("listing_id", "Must be an integer listing id")
                })?;
                listing_id = Some(id);
            }
            Some("file") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::validation("file", "File part needs a filename"))?;
                let bytes = field.bytes().await.map_err(|e| AppError::BadRequest {
                    message: e.to_string(),
                })?;
                file = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let listing_id =
        listing_id.ok_or_else(|| AppError::validation("listing_id", "Field is required"))?;
    let (filename, bytes) =
        file.ok_or_else(|| AppError::validation("file", "File part is required"))?;

    if bytes.is_empty() {
        return Err(AppError::validation("file", "File is empty"));
    }

    Ok(UploadParts {
        listing_id,
        filename,
        bytes,
    })
}

/// POST /upload - Upload a listing image
///
/// Accepts a multipart form with a `listing_id` field and a `file`
/// part. The file lands in the bucket first; the image row is recorded
/// only after the store confirms the write.
#[utoipa::path(
    post,
    path = "/",
    tag = UPLOAD_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Image stored and recorded", body = ImageEnvelope),
        (status = 400, description = "Missing field or disallowed file type"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Listing not found"),
        (status = 502, description = "Object storage failure")
    )
)]
async fn upload_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ImageEnvelope>)> {
    let parts = read_upload_parts(multipart).await?;

    let image = state
        .services
        .uploads
        .upload(parts.bytes, &parts.filename, parts.listing_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ImageEnvelope::from(image))))
}
