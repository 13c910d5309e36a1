//! Bearer-token authentication.
//!
//! `AuthUser` is an extractor: any handler that takes it as an argument
//! requires a valid token, and rejects with 401 before the handler body
//! runs. Routes without it stay public.

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_token};

/// Authenticated caller, extracted from the `Authorization` header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// Username asserted by the validated token
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    /// Validates `Authorization: Bearer <token>` against the signing
    /// secret.
    ///
    /// # Errors
    /// Returns 401 Unauthorized if the header is missing, malformed,
    /// or the token is invalid or expired.
    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format. Expected: Bearer <token>")
        })?;

        let claims = validate_token(token, &state.jwt_config.secret)?;

        Ok(AuthUser::from(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_user_takes_username_from_sub() {
        let claims = Claims {
            sub: "belle".to_string(),
            iat: 0,
            exp: 9_999_999_999,
        };

        let auth_user = AuthUser::from(claims);
        assert_eq!(auth_user.username, "belle");
    }
}
