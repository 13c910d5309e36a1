//! Middleware components for request processing.
//!
//! This module contains middleware for logging, request ID tracking,
//! error handling, and the bearer-token extractor.

mod auth;
mod error_handler;
mod logging;
mod request_id;

pub use auth::AuthUser;
pub use error_handler::not_found_fallback;
pub use logging::logging_middleware;
pub use request_id::{RequestId, request_id_middleware};
