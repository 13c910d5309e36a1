//! Listing DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::api::dto::upload::ImageResponse;
use crate::models::{Listing, NewListing, UpdateListing};
use crate::services::ListingWithImages;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a listing.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateListingRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    #[schema(example = "Sunny backyard with pool")]
    pub title: String,
    /// Owner username; must match the authenticated caller
    #[validate(length(min = 3, max = 30, message = "Username must be between 3 and 30 characters"))]
    #[schema(example = "belle")]
    pub username: String,
    /// Nightly price in whole dollars
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 120)]
    pub price: i32,
    pub description: String,
}

impl CreateListingRequest {
    /// Converts the request DTO into a NewListing model.
    pub fn into_new_listing(self) -> NewListing {
        NewListing {
            username: self.username,
            title: self.title,
            price: self.price,
            description: self.description,
        }
    }
}

/// Request body for partially updating a listing.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateListingRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: Option<String>,
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: Option<i32>,
    pub description: Option<String>,
    pub is_reserved: Option<bool>,
}

impl UpdateListingRequest {
    /// Converts the request DTO into an UpdateListing changeset.
    pub fn into_update_listing(self) -> UpdateListing {
        UpdateListing {
            title: self.title,
            price: self.price,
            description: self.description,
            is_reserved: self.is_reserved,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// A listing as returned by list/create/update endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingResponse {
    pub id: i32,
    pub username: String,
    pub title: String,
    pub price: i32,
    pub description: String,
    pub is_reserved: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            username: listing.username,
            title: listing.title,
            price: listing.price,
            description: listing.description,
            is_reserved: listing.is_reserved,
            created_at: format_timestamp(listing.created_at),
            updated_at: format_timestamp(listing.updated_at),
        }
    }
}

/// A listing with its attached images, for the detail endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingDetailResponse {
    #[serde(flatten)]
    pub listing: ListingResponse,
    pub images: Vec<ImageResponse>,
}

impl From<ListingWithImages> for ListingDetailResponse {
    fn from(detail: ListingWithImages) -> Self {
        Self {
            listing: ListingResponse::from(detail.listing),
            images: detail
                .images
                .into_iter()
                .map(ImageResponse::from)
                .collect(),
        }
    }
}

/// `{listings: [...]}` wrapper for the browse endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingsEnvelope {
    pub listings: Vec<ListingResponse>,
}

/// `{listing: ...}` wrapper for create/update responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingEnvelope {
    pub listing: ListingResponse,
}

impl From<Listing> for ListingEnvelope {
    fn from(listing: Listing) -> Self {
        Self {
            listing: ListingResponse::from(listing),
        }
    }
}

/// `{listing: {..., images}}` wrapper for the detail endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingDetailEnvelope {
    pub listing: ListingDetailResponse,
}

impl From<ListingWithImages> for ListingDetailEnvelope {
    fn from(detail: ListingWithImages) -> Self {
        Self {
            listing: ListingDetailResponse::from(detail),
        }
    }
}

/// Confirmation body for a deleted listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingDeletedResponse {
    #[schema(example = "Deleted")]
    pub listing: String,
}

impl ListingDeletedResponse {
    pub fn new() -> Self {
        Self {
            listing: "Deleted".to_string(),
        }
    }
}

impl Default for ListingDeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
