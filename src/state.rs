//! Application state for the Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers. No global mutable state: everything a
//! handler needs arrives through this struct.

use std::sync::Arc;

use crate::config::{JwtConfig, StorageConfig};
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;
use crate::storage::ObjectStore;

/// Application state used with Axum's State extractor.
///
/// Cloning is cheap since services, the pool, and the object store all
/// use `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
    /// JWT configuration for token generation and validation
    pub jwt_config: JwtConfig,
}

impl AppState {
    /// Creates a new AppState from a pool, JWT config, and object store.
    ///
    /// Initializes all repositories and services from the provided pool.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let store = Arc::new(S3ObjectStore::from_config(&settings.storage).await);
    /// let state = AppState::new(pool, settings.jwt.clone(), store, &settings.storage);
    /// ```
    pub fn new(
        pool: AsyncDbPool,
        jwt_config: JwtConfig,
        store: Arc<dyn ObjectStore>,
        storage_config: &StorageConfig,
    ) -> Self {
        let repos = Repositories::new(pool.clone());
        let services = Services::new(repos, store, storage_config);
        Self {
            services,
            db_pool: pool,
            jwt_config,
        }
    }
}
