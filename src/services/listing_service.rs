//! Listing service for browse, create, update, and delete operations.

use crate::error::{AppError, AppResult};
use crate::models::{Image, Listing, NewListing, UpdateListing};
use crate::repositories::{ImageRepository, ListingRepository, UserRepository};

/// A listing together with its attached images.
#[derive(Debug, Clone)]
pub struct ListingWithImages {
    pub listing: Listing,
    pub images: Vec<Image>,
}

/// Business logic around listings.
///
/// Browsing is public; every mutation is restricted to the listing's
/// owner.
#[derive(Clone)]
pub struct ListingService {
    listings: ListingRepository,
    images: ImageRepository,
    users: UserRepository,
}

impl ListingService {
    /// Creates a new ListingService from its repositories.
    pub fn new(
        listings: ListingRepository,
        images: ImageRepository,
        users: UserRepository,
    ) -> Self {
        Self {
            listings,
            images,
            users,
        }
    }

    /// Lists every listing. No pagination: the catalog is expected to
    /// stay small.
    pub async fn list_listings(&self) -> AppResult<Vec<Listing>> {
        self.listings.list_all().await
    }

    /// Creates a listing owned by `new_listing.username`.
    ///
    /// Callers may only create listings under their own name, and the
    /// owner must exist even though both usually coincide (a token can
    /// outlive its account).
    pub async fn create_listing(
        &self,
        new_listing: NewListing,
        acting_user: &str,
    ) -> AppResult<Listing> {
        if new_listing.username != acting_user {
            return Err(AppError::forbidden(
                "You may only create listings under your own username",
            ));
        }

        if !self.users.exists(&new_listing.username).await? {
            return Err(AppError::validation(
                "username",
                format!("No user named '{}'", new_listing.username),
            ));
        }

        self.listings.create(new_listing).await
    }

    /// Gets a listing and its images.
    pub async fn get_listing(&self, id: i32) -> AppResult<ListingWithImages> {
        let listing = self
            .listings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("listing", "id", id))?;

        let images = self.images.list_for_listing(listing.id).await?;

        Ok(ListingWithImages { listing, images })
    }

    /// Applies a partial update to a listing. Owner only.
    pub async fn update_listing(
        &self,
        id: i32,
        update_data: UpdateListing,
        acting_user: &str,
    ) -> AppResult<Listing> {
        let listing = self
            .listings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("listing", "id", id))?;

        if listing.username != acting_user {
            return Err(AppError::forbidden(
                "You may only update your own listings",
            ));
        }

        if update_data.is_empty() {
            return Ok(listing);
        }

        self.listings.update(id, update_data).await
    }

    /// Deletes a listing. Owner only; images cascade with the row.
    pub async fn delete_listing(&self, id: i32, acting_user: &str) -> AppResult<()> {
        let listing = self
            .listings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("listing", "id", id))?;

        if listing.username != acting_user {
            return Err(AppError::forbidden(
                "You may only delete your own listings",
            ));
        }

        self.listings.delete(id).await?;
        Ok(())
    }
}
