use jiff::Timestamp;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// JWT claims asserting a username.
///
/// Tokens always carry an expiry; a token without `exp` never validates.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Issued at (unix timestamp)
    pub iat: i64,
    /// Expiration time (unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    ///
    /// # Arguments
    /// * `username` - The authenticated username
    /// * `expiration_hours` - Token validity duration in hours
    pub fn new(username: &str, expiration_hours: i64) -> Self {
        let iat = Timestamp::now().as_second();
        Self {
            sub: username.to_string(),
            iat,
            exp: iat + expiration_hours * 3600,
        }
    }
}

/// Generates a signed token asserting `username`.
///
/// # Arguments
/// * `username` - The authenticated username
/// * `secret` - The secret key for signing the token
/// * `expiration_hours` - Token validity duration in hours
pub fn generate_token(username: &str, secret: &str, expiration_hours: i64) -> AppResult<String> {
    let claims = Claims::new(username, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate token: {}", e),
    })
}

/// Validates and decodes a token, returning its claims.
///
/// Expired, malformed, and wrongly signed tokens all map to
/// `Unauthorized` so the HTTP layer answers 401 uniformly.
pub fn validate_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::Unauthorized {
            message: "Token has expired".to_string(),
        },
        jsonwebtoken::errors::ErrorKind::InvalidToken => AppError::Unauthorized {
            message: "Invalid token".to_string(),
        },
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::Unauthorized {
            message: "Invalid token signature".to_string(),
        },
        _ => AppError::Unauthorized {
            message: format!("Token validation failed: {}", e),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test_secret_key_at_least_32_characters_long";

    #[test]
    fn generated_token_has_three_segments() {
        let token = generate_token("belle", TEST_SECRET, 24).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn token_round_trips_username() {
        let token = generate_token("belle", TEST_SECRET, 24).unwrap();
        let claims = validate_token(&token, TEST_SECRET).unwrap();

        assert_eq!(claims.sub, "belle");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_token("belle", TEST_SECRET, 24).unwrap();
        let result = validate_token(&token, "some_other_secret_of_decent_length");

        match result {
            Err(AppError::Unauthorized { message }) => {
                assert!(message.contains("signature"));
            }
            other => panic!("Expected Unauthorized error, got: {:?}", other),
        }
    }

    #[test]
    fn malformed_token_is_rejected() {
        let result = validate_token("not.a.token", TEST_SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Negative hours produce an already-expired token.
        let token = generate_token("belle", TEST_SECRET, -1).unwrap();
        let result = validate_token(&token, TEST_SECRET);

        match result {
            Err(AppError::Unauthorized { message }) => {
                assert!(message.contains("expired"));
            }
            other => panic!("Expected Unauthorized error, got: {:?}", other),
        }
    }

    #[test]
    fn claims_expiry_is_hours_after_issue() {
        let claims = Claims::new("dan", 2);
        assert_eq!(claims.exp - claims.iat, 2 * 3600);
        assert_eq!(claims.sub, "dan");
    }
}
