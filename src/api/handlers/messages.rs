//! Standalone message handlers.
//!
//! Mailbox listing and sending live under `/users/{username}/messages`;
//! deletion addresses a message directly by id.

use axum::{
    Json,
    extract::{Path, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::MESSAGE_TAG;
use crate::api::dto::MessageDeletedResponse;
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

/// Creates the message routes.
///
/// # Routes
/// - `DELETE /{id}` - Delete a sent message
pub fn message_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(delete_message))
}

/// DELETE /messages/{id} - Delete a message
///
/// Only the sender of the message may delete it.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message ID")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Message deleted", body = MessageDeletedResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not the sender"),
        (status = 404, description = "Message not found")
    )
)]
async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageDeletedResponse>> {
    state
        .services
        .messages
        .delete_message(id, &auth.username)
        .await?;

    Ok(Json(MessageDeletedResponse::new()))
}
