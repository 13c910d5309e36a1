//! Image repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Image, NewImage};

/// Image repository holding an async connection pool.
#[derive(Clone)]
pub struct ImageRepository {
    pool: AsyncDbPool,
}

impl ImageRepository {
    /// Creates a new ImageRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Records an uploaded image against its listing.
    ///
    /// Only called after the object store confirmed the write.
    pub async fn create(&self, new_image: NewImage) -> Result<Image, AppError> {
        use crate::schema::images::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(images)
            .values(&new_image)
            .returning(Image::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists the images attached to a listing, oldest first.
    pub async fn list_for_listing(&self, listing: i32) -> Result<Vec<Image>, AppError> {
        use crate::schema::images::dsl::*;
        let mut conn = self.pool.get().await?;

        images
            .filter(listing_id.eq(listing))
            .order(id.asc())
            .select(Image::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
