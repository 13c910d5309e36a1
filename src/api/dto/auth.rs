//! Authentication-related Data Transfer Objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{DEFAULT_PROFILE_IMAGE_URL, NewUser};

/// Signup request payload
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SignupRequest {
    /// Username (unique, becomes the account's identity)
    #[validate(length(min = 3, max = 30, message = "Username must be between 3 and 30 characters"))]
    #[schema(example = "belle", min_length = 3, max_length = 30)]
    pub username: String,
    /// User's email address (unique)
    #[validate(email(message = "Invalid email format"), length(max = 50, message = "Email must be at most 50 characters"))]
    #[schema(example = "belle@belle.com", format = "email")]
    pub email: String,
    /// User's password (plain text, will be hashed)
    #[validate(length(min = 2, max = 72, message = "Password must be between 2 and 72 characters"))]
    #[schema(example = "pw", format = "password", min_length = 2, max_length = 72)]
    pub password: String,
    /// Short self-description
    #[serde(default)]
    pub bio: String,
    /// Home location
    #[validate(length(max = 30, message = "Location must be at most 30 characters"))]
    #[serde(default)]
    #[schema(example = "NY")]
    pub location: String,
    /// Profile image URL; a placeholder is used when absent
    #[validate(url(message = "Invalid profile image URL"))]
    pub profile_image_url: Option<String>,
}

impl SignupRequest {
    /// Converts the request DTO into a NewUser model.
    ///
    /// The password is still plaintext here; the user service hashes it.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            username: self.username,
            email: self.email,
            password: self.password,
            profile_image_url: self
                .profile_image_url
                .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE_URL.to_string()),
            bio: self.bio,
            location: self.location,
        }
    }
}

/// Login request payload
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    /// Username
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    #[schema(example = "belle")]
    pub username: String,
    /// User's password (plain text)
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    #[schema(example = "pw", format = "password")]
    pub password: String,
}

/// Token response returned by signup and login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed bearer token asserting the username
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_defaults_profile_image() {
        let request = SignupRequest {
            username: "belle".to_string(),
            email: "belle@belle.com".to_string(),
            password: "pw".to_string(),
            bio: "x".to_string(),
            location: "NY".to_string(),
            profile_image_url: None,
        };

        let new_user = request.into_new_user();
        assert_eq!(new_user.profile_image_url, DEFAULT_PROFILE_IMAGE_URL);
        assert_eq!(new_user.username, "belle");
    }

    #[test]
    fn signup_keeps_explicit_profile_image() {
        let request = SignupRequest {
            username: "dan".to_string(),
            email: "dan@dan.com".to_string(),
            password: "password".to_string(),
            bio: String::new(),
            location: String::new(),
            profile_image_url: Some("https://example.com/me.png".to_string()),
        };

        let new_user = request.into_new_user();
        assert_eq!(new_user.profile_image_url, "https://example.com/me.png");
    }

    #[test]
    fn bio_and_location_default_to_empty() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"username":"belle","email":"belle@belle.com","password":"pw"}"#,
        )
        .unwrap();

        assert_eq!(request.bio, "");
        assert_eq!(request.location, "");
    }
}
