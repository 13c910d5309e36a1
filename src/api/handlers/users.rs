//! User profile and mailbox request handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::{MESSAGE_TAG, USER_TAG};
use crate::api::dto::{
    MessageEnvelope, MessagesEnvelope, SendMessageRequest, UpdateUserRequest, UserDeletedResponse,
    UserEnvelope,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates the user routes.
///
/// # Routes
/// - `GET /{username}`           - Public profile
/// - `POST /{username}`          - Edit own profile
/// - `DELETE /{username}`        - Delete own account
/// - `GET /{username}/messages`  - Own mailbox (sent and received)
/// - `POST /{username}/messages` - Send a message as `{username}`
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_user, update_user, delete_user))
        .routes(routes!(list_messages, send_message))
}

/// GET /users/{username} - Public profile
#[utoipa::path(
    get,
    path = "/{username}",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User profile", body = UserEnvelope),
        (status = 404, description = "User not found")
    )
)]
async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserEnvelope>> {
    let user = state.services.users.get_user(&username).await?;
    Ok(Json(UserEnvelope::from(user)))
}

/// POST /users/{username} - Edit profile
///
/// Partial update; a supplied password is re-hashed before storage.
#[utoipa::path(
    post,
    path = "/{username}",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Username")),
    request_body = UpdateUserRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Profile updated", body = UserEnvelope),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the profile owner"),
        (status = 404, description = "User not found")
    )
)]
async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserEnvelope>> {
    let user = state
        .services
        .users
        .update_profile(&username, payload.into_update_user(), &auth.username)
        .await?;

    Ok(Json(UserEnvelope::from(user)))
}

/// DELETE /users/{username} - Delete account
///
/// The user's messages and listings are removed with the account.
#[utoipa::path(
    delete,
    path = "/{username}",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Username")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Account deleted", body = UserDeletedResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "User not found")
    )
)]
async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> AppResult<Json<UserDeletedResponse>> {
    state
        .services
        .users
        .delete_user(&username, &auth.username)
        .await?;

    Ok(Json(UserDeletedResponse::new()))
}

/// GET /users/{username}/messages - Mailbox
///
/// Returns the user's sent and received messages; owner only.
#[utoipa::path(
    get,
    path = "/{username}/messages",
    tag = MESSAGE_TAG,
    params(("username" = String, Path, description = "Username")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Sent and received messages", body = MessagesEnvelope),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the mailbox owner"),
        (status = 404, description = "User not found")
    )
)]
async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> AppResult<Json<MessagesEnvelope>> {
    let mailbox = state
        .services
        .messages
        .messages_for_user(&username, &auth.username)
        .await?;

    Ok(Json(MessagesEnvelope::from(mailbox)))
}

/// POST /users/{username}/messages - Send a message
///
/// `from_user` must equal both the path username and the caller.
#[utoipa::path(
    post,
    path = "/{username}/messages",
    tag = MESSAGE_TAG,
    params(("username" = String, Path, description = "Sender username")),
    request_body = SendMessageRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Message sent", body = MessageEnvelope),
        (status = 400, description = "Unknown participant"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Sender is not the caller")
    )
)]
async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    ValidatedJson(payload): ValidatedJson<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<MessageEnvelope>)> {
    if payload.from_user != username {
        return Err(crate::error::AppError::validation(
            "from_user",
            "Sender must match the username in the path",
        ));
    }

    let message = state
        .services
        .messages
        .send_message(payload.into_new_message(), &auth.username)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageEnvelope::from(message))))
}
