//! The signing capability seam.

use std::time::Duration;

use async_trait::async_trait;

use crate::backend::StorageBackend;
use crate::error::StorageResult;

/// A capability that turns an object key into a time-limited download URL.
///
/// This is the single seam between the HTTP layer and the storage provider:
/// production code uses [`StorageBackend`], tests substitute deterministic
/// implementations.
#[async_trait]
pub trait SignedUrlProvider: Send + Sync {
    /// Generates a presigned download URL for `key`, valid for `expires_in`.
    ///
    /// Implementations must use `key` verbatim, without normalization.
    async fn presign_download(&self, key: &str, expires_in: Duration) -> StorageResult<String>;
}

#[async_trait]
impl SignedUrlProvider for StorageBackend {
    async fn presign_download(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        StorageBackend::presign_download(self, key, expires_in).await
    }
}
