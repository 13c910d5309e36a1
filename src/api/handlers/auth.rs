//! Authentication handlers for signup and login.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{LoginRequest, SignupRequest, TokenResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::jwt::generate_token;
use crate::utils::validate::ValidatedJson;

/// Creates the authentication routes
///
/// # Routes
/// - `POST /signup` - Register a new user and get a token
/// - `POST /login` - Authenticate and get a token
pub fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(signup))
        .routes(routes!(login))
}

/// POST /signup - Register a new user
///
/// Hashes the password, stores the user, and returns a bearer token
/// asserting the new username.
#[utoipa::path(
    post,
    path = "/signup",
    tag = AUTH_TAG,
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User registered", body = TokenResponse),
        (status = 400, description = "Invalid request data"),
        (status = 409, description = "Username or email already taken")
    )
)]
async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = state.services.users.register(payload.into_new_user()).await?;

    let token = generate_token(
        &user.username,
        &state.jwt_config.secret,
        state.jwt_config.token_expiration,
    )?;

    Ok(Json(TokenResponse { token }))
}

/// POST /login - Authenticate a user
///
/// Verifies the credentials and returns a freshly issued token.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = state
        .services
        .users
        .authenticate(&payload.username, &payload.password)
        .await?;

    let token = generate_token(
        &user.username,
        &state.jwt_config.secret,
        state.jwt_config.token_expiration,
    )?;

    Ok(Json(TokenResponse { token }))
}
