//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `auth` - Signup/login request and token response DTOs
//! - `user` - User profile DTOs
//! - `listing` - Listing DTOs
//! - `message` - Direct message DTOs
//! - `upload` - Image upload DTOs
//! - `error` - Common error response DTOs

mod auth;
mod error;
mod listing;
mod message;
mod upload;
mod user;

pub use auth::{LoginRequest, SignupRequest, TokenResponse};
pub use error::ErrorResponse;
pub use listing::{
    CreateListingRequest, ListingDeletedResponse, ListingDetailEnvelope, ListingDetailResponse,
    ListingEnvelope, ListingResponse, ListingsEnvelope, UpdateListingRequest,
};
pub use message::{
    MailboxResponse, MessageDeletedResponse, MessageEnvelope, MessageResponse, MessagesEnvelope,
    SendMessageRequest,
};
pub use upload::{ImageEnvelope, ImageResponse};
pub use user::{UpdateUserRequest, UserDeletedResponse, UserEnvelope, UserResponse};

/// Renders a database timestamp as an ISO 8601 string for responses.
pub(crate) fn format_timestamp(ts: jiff_diesel::DateTime) -> String {
    ts.to_jiff().to_string()
}
