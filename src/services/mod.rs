//! Service layer for business logic operations.
//!
//! Services encapsulate business rules and coordinate between
//! repositories, the object store, and handlers. They never call each
//! other.

mod listing_service;
mod message_service;
mod upload_service;
mod user_service;

pub use listing_service::{ListingService, ListingWithImages};
pub use message_service::{Mailbox, MessageService};
pub use upload_service::{ALLOWED_EXTENSIONS, UploadService, allowed_extension};
pub use user_service::UserService;

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::repositories::Repositories;
use crate::storage::ObjectStore;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as part of the Axum application
/// state. Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub listings: ListingService,
    pub messages: MessageService,
    pub uploads: UploadService,
}

impl Services {
    /// Creates a new Services instance from repositories and the object
    /// store.
    pub fn new(
        repos: Repositories,
        store: Arc<dyn ObjectStore>,
        storage_config: &StorageConfig,
    ) -> Self {
        Self {
            users: UserService::new(repos.users.clone()),
            listings: ListingService::new(
                repos.listings.clone(),
                repos.images.clone(),
                repos.users.clone(),
            ),
            messages: MessageService::new(repos.messages, repos.users),
            uploads: UploadService::new(store, repos.images, repos.listings, storage_config),
        }
    }
}
