use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

/// Message model for reading from database.
///
/// `read_at` stays NULL for the lifetime of the row: read receipts are
/// not tracked, the column exists for wire compatibility.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Message {
    pub id: i32,
    pub text: String,
    pub sent_at: DateTime,
    pub read_at: Option<DateTime>,
    pub from_user: String,
    pub to_user: String,
}

/// NewMessage model for inserting new records.
///
/// `sent_at` is set by the database at insert time.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::messages)]
pub struct NewMessage {
    pub text: String,
    pub from_user: String,
    pub to_user: String,
}
