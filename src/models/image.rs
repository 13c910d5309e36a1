use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Image model for reading from database.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Image {
    pub id: i32,
    pub listing_id: i32,
    pub image_url: String,
    pub created_at: DateTime,
}

/// NewImage model for inserting new records.
///
/// Rows are only created after the object store has confirmed the
/// upload, so `image_url` always points at an existing object.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::images)]
pub struct NewImage {
    pub listing_id: i32,
    pub image_url: String,
}
