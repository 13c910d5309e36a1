//! User profile DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::models::{UpdateUser, User};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for editing a profile. All fields optional.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"), length(max = 50, message = "Email must be at most 50 characters"))]
    #[schema(format = "email")]
    pub email: Option<String>,
    #[validate(length(min = 2, max = 72, message = "Password must be between 2 and 72 characters"))]
    #[schema(format = "password")]
    pub password: Option<String>,
    #[validate(url(message = "Invalid profile image URL"))]
    pub profile_image_url: Option<String>,
    pub bio: Option<String>,
    #[validate(length(max = 30, message = "Location must be at most 30 characters"))]
    pub location: Option<String>,
}

impl UpdateUserRequest {
    /// Converts the request DTO into an UpdateUser changeset.
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            email: self.email,
            password: self.password,
            profile_image_url: self.profile_image_url,
            bio: self.bio,
            location: self.location,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "belle")]
    pub username: String,
    pub profile_image_url: String,
    pub bio: String,
    #[schema(example = "NY")]
    pub location: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            profile_image_url: user.profile_image_url,
            bio: user.bio,
            location: user.location,
            created_at: format_timestamp(user.created_at),
            updated_at: format_timestamp(user.updated_at),
        }
    }
}

/// `{user: ...}` wrapper for single-user responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

impl From<User> for UserEnvelope {
    fn from(user: User) -> Self {
        Self {
            user: UserResponse::from(user),
        }
    }
}

/// Confirmation body for a deleted account.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDeletedResponse {
    #[schema(example = "Deleted")]
    pub user: String,
}

impl UserDeletedResponse {
    pub fn new() -> Self {
        Self {
            user: "Deleted".to_string(),
        }
    }
}

impl Default for UserDeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
