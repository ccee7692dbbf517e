//! Application state and dependency injection.

use linkgate_opendal::StorageResult;

use crate::service::{DownloadSigner, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection). Cheap to clone;
/// the hosting runtime may invoke handlers concurrently and every clone
/// shares the same read-only configuration.
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    download_signer: Option<DownloadSigner>,
}

impl ServiceState {
    /// Initializes application state from configuration.
    pub fn from_config(config: &ServiceConfig) -> StorageResult<Self> {
        Ok(Self {
            download_signer: config.connect_storage()?,
        })
    }

    /// Creates state around an existing signer (or none).
    pub fn with_signer(download_signer: Option<DownloadSigner>) -> Self {
        Self { download_signer }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(download_signer: Option<DownloadSigner>);
