//! Cloneable handle to the configured signing capability.

use std::sync::Arc;
use std::time::Duration;

use linkgate_opendal::{SignedUrlProvider, StorageBackend, StorageResult};

/// Cloneable handle to a [`SignedUrlProvider`].
///
/// Stored in [`ServiceState`] and handed to handlers via `State` extraction.
/// Production wires in a [`StorageBackend`]; tests wire in deterministic
/// providers through [`from_provider`].
///
/// [`ServiceState`]: crate::service::ServiceState
/// [`from_provider`]: DownloadSigner::from_provider
#[derive(Clone)]
pub struct DownloadSigner {
    provider: Arc<dyn SignedUrlProvider>,
}

impl DownloadSigner {
    /// Creates a signer backed by a storage backend.
    pub fn new(backend: StorageBackend) -> Self {
        Self::from_provider(backend)
    }

    /// Wraps an arbitrary signing provider.
    pub fn from_provider(provider: impl SignedUrlProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Generates a presigned download URL for `key`, valid for `expires_in`.
    pub async fn presign_download(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        self.provider.presign_download(key, expires_in).await
    }
}

impl std::fmt::Debug for DownloadSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadSigner").finish_non_exhaustive()
    }
}
