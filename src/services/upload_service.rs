//! Upload service: validate, push to object storage, record the image.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::config::StorageConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Image, NewImage};
use crate::repositories::{ImageRepository, ListingRepository};
use crate::storage::{ObjectStore, content_type_for_extension};

/// File extensions accepted for listing images.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Returns the extension after the last `.`, if any.
fn extension_of(filename: &str) -> Option<&str> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

/// Whether `filename` carries an allow-listed image extension.
///
/// Matching is case-insensitive; a name without a `.` fails closed.
pub fn allowed_extension(filename: &str) -> bool {
    extension_of(filename)
        .map(|ext| {
            let ext = ext.to_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Reduces an uploaded filename to a safe object-key suffix.
///
/// Path components are stripped and anything outside
/// `[A-Za-z0-9._-]` becomes `-`, so client filenames can never shape
/// the key namespace.
fn sanitize_file_name(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Business logic around image uploads.
///
/// The image row is written only after the object store confirms the
/// upload, and no database work is in flight while the remote write
/// runs, so a storage failure never leaves a half-created image.
#[derive(Clone)]
pub struct UploadService {
    store: Arc<dyn ObjectStore>,
    images: ImageRepository,
    listings: ListingRepository,
    upload_timeout: Duration,
    upload_retries: u32,
}

impl UploadService {
    /// Creates a new UploadService.
    pub fn new(
        store: Arc<dyn ObjectStore>,
        images: ImageRepository,
        listings: ListingRepository,
        config: &StorageConfig,
    ) -> Self {
        Self {
            store,
            images,
            listings,
            upload_timeout: Duration::from_secs(config.upload_timeout),
            upload_retries: config.upload_retries,
        }
    }

    /// Uploads `bytes` as an image for `listing_id`.
    ///
    /// # Errors
    /// - `Validation` if the extension is not allow-listed
    /// - `NotFound` if the listing does not exist
    /// - `Storage` if the object store rejects the write after all retries
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        listing_id: i32,
    ) -> AppResult<Image> {
        if !allowed_extension(filename) {
            return Err(AppError::validation(
                "file",
                format!(
                    "File type not allowed for '{}'; accepted: {}",
                    filename,
                    ALLOWED_EXTENSIONS.join(", ")
                ),
            ));
        }

        self.listings
            .find_by_id(listing_id)
            .await?
            .ok_or_else(|| AppError::not_found("listing", "id", listing_id))?;

        let extension = extension_of(filename).unwrap_or_default();
        let key = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(filename));
        let content_type = content_type_for_extension(extension);

        put_with_retry(
            self.store.as_ref(),
            &key,
            bytes,
            content_type,
            self.upload_timeout,
            self.upload_retries,
        )
        .await?;

        // Store write confirmed; now record the image.
        let image_url = self.store.public_url(&key);
        self.images
            .create(NewImage {
                listing_id,
                image_url,
            })
            .await
    }
}

/// Writes an object with a bounded timeout and bounded backoff retries.
async fn put_with_retry(
    store: &dyn ObjectStore,
    key: &str,
    bytes: Vec<u8>,
    content_type: &str,
    timeout: Duration,
    retries: u32,
) -> AppResult<()> {
    let mut attempt = 0;
    loop {
        let result = tokio::time::timeout(
            timeout,
            store.put_object(key, bytes.clone(), content_type),
        )
        .await;

        let error = match result {
            Ok(Ok(())) => return Ok(()),
            Ok(Err(e)) => e,
            Err(_) => AppError::Storage {
                operation: format!("put object '{}'", key),
                source: anyhow::anyhow!("timed out after {}s", timeout.as_secs()),
            },
        };

        if attempt >= retries {
            return Err(error);
        }

        attempt += 1;
        let backoff = Duration::from_millis(200 * 2u64.pow(attempt));
        tracing::warn!(
            key = %key,
            attempt = attempt,
            error = %error,
            "Object store write failed, retrying"
        );
        tokio::time::sleep(backoff).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn accepts_allow_listed_extensions() {
        assert!(allowed_extension("cat.jpg"));
        assert!(allowed_extension("cat.PNG"));
        assert!(allowed_extension("space.photo.jpeg"));
        assert!(allowed_extension("banner.gif"));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!allowed_extension("cat.exe"));
        assert!(!allowed_extension("cat.svg"));
    }

    #[test]
    fn rejects_names_without_extension() {
        assert!(!allowed_extension("noext"));
        assert!(!allowed_extension(""));
        assert!(!allowed_extension(".hidden"));
        assert!(!allowed_extension("trailing."));
    }

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize_file_name("../../etc/passwd.png"), "passwd.png");
        assert_eq!(sanitize_file_name("C:\\photos\\cat.jpg"), "cat.jpg");
    }

    #[test]
    fn sanitize_replaces_odd_characters() {
        assert_eq!(sanitize_file_name("my cat photo!.jpg"), "my-cat-photo-.jpg");
        assert_eq!(sanitize_file_name("héllo.png"), "h-llo.png");
    }

    /// Store that fails a configured number of times before succeeding.
    struct FlakyStore {
        failures_left: AtomicU32,
        puts: AtomicU32,
    }

    impl FlakyStore {
        fn new(failures: u32) -> Self {
            Self {
                failures_left: AtomicU32::new(failures),
                puts: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl ObjectStore for FlakyStore {
        async fn put_object(
            &self,
            key: &str,
            _bytes: Vec<u8>,
            _content_type: &str,
        ) -> AppResult<()> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            if self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(AppError::Storage {
                    operation: format!("put object '{}'", key),
                    source: anyhow::anyhow!("synthetic failure"),
                });
            }
            Ok(())
        }

        fn public_url(&self, key: &str) -> String {
            format!("https://bucket.example/{}", key)
        }
    }

    #[tokio::test]
    async fn retry_recovers_from_transient_failure() {
        let store = FlakyStore::new(1);
        let result = put_with_retry(
            &store,
            "key.png",
            vec![1, 2, 3],
            "image/png",
            Duration::from_secs(1),
            2,
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(store.puts.load(Ordering::SeqCst), 2);
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sanitized_names_stay_in_charset(name in ".*") {
                let sanitized = sanitize_file_name(&name);
                let in_charset = sanitized.chars().all(|c| {
                    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
                });
                prop_assert!(in_charset);
            }

            #[test]
            fn extension_check_ignores_case(stem in "[a-z0-9]{1,8}", ext in "(png|jpg|jpeg|gif)") {
                let lower = format!("{}.{}", stem, ext);
                let upper = format!("{}.{}", stem, ext.to_uppercase());
                prop_assert!(allowed_extension(&lower));
                prop_assert!(allowed_extension(&upper));
            }

            #[test]
            fn names_without_dot_never_pass(name in "[a-zA-Z0-9_-]{0,16}") {
                prop_assert!(!allowed_extension(&name));
            }
        }
    }

    #[tokio::test]
    async fn retry_gives_up_after_budget() {
        let store = FlakyStore::new(10);
        let result = put_with_retry(
            &store,
            "key.png",
            vec![1, 2, 3],
            "image/png",
            Duration::from_secs(1),
            2,
        )
        .await;

        assert!(matches!(result, Err(AppError::Storage { .. })));
        // Initial attempt plus two retries.
        assert_eq!(store.puts.load(Ordering::SeqCst), 3);
    }
}
