//! Object storage abstraction.
//!
//! Uploaded listing images land in a bucket behind the narrow
//! [`ObjectStore`] trait; the rest of the application only ever sees
//! keys and public URLs, never the SDK types.

mod s3;

pub use s3::S3ObjectStore;

use async_trait::async_trait;

use crate::error::AppResult;

/// Write-side interface to the image bucket.
///
/// Implementations must only return `Ok` once the store has durably
/// accepted the object; callers persist database rows on that signal.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes `bytes` under `key`, overwriting any existing object.
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> AppResult<()>;

    /// Public read URL for an object previously written under `key`.
    fn public_url(&self, key: &str) -> String;
}

/// Maps an image extension to the Content-Type sent to the store.
///
/// Callers validate the extension against the allow-list first, so the
/// fallback only covers future list growth.
pub fn content_type_for_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_extensions() {
        assert_eq!(content_type_for_extension("png"), "image/png");
        assert_eq!(content_type_for_extension("JPG"), "image/jpeg");
        assert_eq!(content_type_for_extension("jpeg"), "image/jpeg");
        assert_eq!(content_type_for_extension("gif"), "image/gif");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(content_type_for_extension("webp"), "application/octet-stream");
    }
}
