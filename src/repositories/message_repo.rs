//! Message repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Message, NewMessage};

/// Message repository holding an async connection pool.
#[derive(Clone)]
pub struct MessageRepository {
    pool: AsyncDbPool,
}

impl MessageRepository {
    /// Creates a new MessageRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new message; `sent_at` is set by the database.
    pub async fn create(&self, new_message: NewMessage) -> Result<Message, AppError> {
        use crate::schema::messages::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(messages)
            .values(&new_message)
            .returning(Message::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a message by its ID.
    pub async fn find_by_id(&self, message_id: i32) -> Result<Option<Message>, AppError> {
        use crate::schema::messages::dsl::*;
        let mut conn = self.pool.get().await?;

        messages
            .filter(id.eq(message_id))
            .select(Message::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Messages sent by `name`, newest first.
    pub async fn list_sent(&self, name: &str) -> Result<Vec<Message>, AppError> {
        use crate::schema::messages::dsl::*;
        let mut conn = self.pool.get().await?;

        messages
            .filter(from_user.eq(name))
            .order(sent_at.desc())
            .select(Message::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Messages received by `name`, newest first.
    pub async fn list_received(&self, name: &str) -> Result<Vec<Message>, AppError> {
        use crate::schema::messages::dsl::*;
        let mut conn = self.pool.get().await?;

        messages
            .filter(to_user.eq(name))
            .order(sent_at.desc())
            .select(Message::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a message row.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, message_id: i32) -> Result<usize, AppError> {
        use crate::schema::messages::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(messages.filter(id.eq(message_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
