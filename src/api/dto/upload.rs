//! Image upload DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::format_timestamp;
use crate::models::Image;

/// An uploaded image.
#[derive(Debug, Serialize, ToSchema)]
pub struct ImageResponse {
    pub id: i32,
    pub listing_id: i32,
    /// Public bucket URL of the stored object
    #[schema(example = "https://sharebnb-media.s3.us-east-1.amazonaws.com/8d7c...-cat.jpg")]
    pub image_url: String,
    pub created_at: String,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            listing_id: image.listing_id,
            image_url: image.image_url,
            created_at: format_timestamp(image.created_at),
        }
    }
}

/// `{image: ...}` wrapper for the upload endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ImageEnvelope {
    pub image: ImageResponse,
}

impl From<Image> for ImageEnvelope {
    fn from(image: Image) -> Self {
        Self {
            image: ImageResponse::from(image),
        }
    }
}
