//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities. Repositories
//! never apply business rules; that belongs to the service layer.

mod image_repo;
mod listing_repo;
mod message_repo;
mod user_repo;

pub use image_repo::ImageRepository;
pub use listing_repo::ListingRepository;
pub use message_repo::MessageRepository;
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub listings: ListingRepository,
    pub images: ImageRepository,
    pub messages: MessageRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            listings: ListingRepository::new(pool.clone()),
            images: ImageRepository::new(pool.clone()),
            messages: MessageRepository::new(pool),
        }
    }
}
