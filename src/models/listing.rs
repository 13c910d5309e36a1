use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

/// Listing model for reading from database.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::listings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Listing {
    pub id: i32,
    pub username: String,
    pub title: String,
    pub price: i32,
    pub description: String,
    pub is_reserved: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// NewListing model for inserting new records.
///
/// `is_reserved` is intentionally absent: a freshly created listing is
/// never reserved, the column default applies.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::listings)]
pub struct NewListing {
    pub username: String,
    pub title: String,
    pub price: i32,
    pub description: String,
}

/// UpdateListing model for partial updates.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::listings)]
pub struct UpdateListing {
    pub title: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub is_reserved: Option<bool>,
}

impl UpdateListing {
    /// True when no field is set; diesel rejects an empty changeset, so
    /// callers skip the UPDATE entirely.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.is_reserved.is_none()
    }
}
