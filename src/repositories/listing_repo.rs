//! Listing repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Listing, NewListing, UpdateListing};

/// Listing repository holding an async connection pool.
#[derive(Clone)]
pub struct ListingRepository {
    pool: AsyncDbPool,
}

impl ListingRepository {
    /// Creates a new ListingRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new listing; `is_reserved` starts false via the column
    /// default.
    pub async fn create(&self, new_listing: NewListing) -> Result<Listing, AppError> {
        use crate::schema::listings::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(listings)
            .values(&new_listing)
            .returning(Listing::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a listing by its ID.
    pub async fn find_by_id(&self, listing_id: i32) -> Result<Option<Listing>, AppError> {
        use crate::schema::listings::dsl::*;
        let mut conn = self.pool.get().await?;

        listings
            .filter(id.eq(listing_id))
            .select(Listing::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists every listing, newest first.
    pub async fn list_all(&self) -> Result<Vec<Listing>, AppError> {
        use crate::schema::listings::dsl::*;
        let mut conn = self.pool.get().await?;

        listings
            .order(id.desc())
            .select(Listing::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Applies a partial update; `None` fields are left untouched.
    pub async fn update(
        &self,
        listing_id: i32,
        update_data: UpdateListing,
    ) -> Result<Listing, AppError> {
        use crate::schema::listings::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(listings.filter(id.eq(listing_id)))
            .set(&update_data)
            .returning(Listing::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a listing; owned images go with it via the schema's
    /// cascade rule.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, listing_id: i32) -> Result<usize, AppError> {
        use crate::schema::listings::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(listings.filter(id.eq(listing_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
