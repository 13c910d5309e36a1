use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

/// Profile image assigned to accounts that never uploaded one.
pub const DEFAULT_PROFILE_IMAGE_URL: &str =
    "https://sharebnb-media.s3.us-east-1.amazonaws.com/profile-placeholder.png";

/// User model for reading from database.
///
/// The natural key is `username`; there is no surrogate id column.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile_image_url: String,
    pub bio: String,
    pub location: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// NewUser model for inserting new records.
///
/// The `password` field must already be hashed by the service layer
/// before this struct reaches the repository.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile_image_url: String,
    pub bio: String,
    pub location: String,
}

/// UpdateUser model for partial profile edits.
///
/// `username` is the primary key and is immutable; it is addressed
/// through the repository call, not the changeset.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub profile_image_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl UpdateUser {
    /// True when no field is set; diesel rejects an empty changeset, so
    /// callers skip the UPDATE entirely.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.profile_image_url.is_none()
            && self.bio.is_none()
            && self.location.is_none()
    }
}
