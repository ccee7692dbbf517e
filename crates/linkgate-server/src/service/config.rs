//! Service configuration.

use linkgate_opendal::{S3Config, StorageBackend, StorageResult};
use serde::{Deserialize, Serialize};

use crate::service::{DownloadSigner, TRACING_TARGET};

/// Default values for configuration options.
mod defaults {
    /// Region used when the environment does not specify one.
    pub const AWS_REGION: &str = "us-east-1";
}

/// App [`state`] configuration.
///
/// All values are read once at startup (CLI flags or environment) and stay
/// immutable for the lifetime of the process. The bucket name is optional
/// on purpose: the server starts without one and reports the
/// misconfiguration per request instead of refusing to boot.
///
/// [`state`]: crate::service::ServiceState
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(clap::Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Name of the bucket download links are issued for.
    #[cfg_attr(feature = "config", arg(long, env = "AWS_S3_BUCKET_NAME"))]
    pub bucket_name: Option<String>,

    /// Region of the bucket.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "AWS_REGION", default_value = defaults::AWS_REGION)
    )]
    pub region: String,

    /// Custom S3-compatible endpoint (MinIO, R2, LocalStack).
    #[cfg_attr(feature = "config", arg(long, env = "AWS_ENDPOINT_URL"))]
    pub endpoint: Option<String>,

    /// Static access key id; omitted, the ambient credential chain is used.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)
    )]
    pub access_key_id: Option<String>,

    /// Static secret access key; omitted, the ambient credential chain is used.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)
    )]
    pub secret_access_key: Option<String>,

    /// Key prefix applied to every signed object.
    #[cfg_attr(feature = "config", arg(long, env = "S3_KEY_PREFIX"))]
    pub key_prefix: Option<String>,
}

impl ServiceConfig {
    /// Returns true when a non-empty bucket name is configured.
    pub fn has_bucket(&self) -> bool {
        self.bucket_name.as_deref().is_some_and(|b| !b.is_empty())
    }

    /// Builds the signing backend, or `None` when no bucket is configured.
    pub fn connect_storage(&self) -> StorageResult<Option<DownloadSigner>> {
        let Some(bucket) = self.bucket_name.as_deref().filter(|b| !b.is_empty()) else {
            tracing::warn!(
                target: TRACING_TARGET,
                "no S3 bucket configured; download links cannot be issued"
            );
            return Ok(None);
        };

        let mut s3_config = S3Config::new(bucket, &self.region);

        if let Some(ref endpoint) = self.endpoint {
            s3_config = s3_config.with_endpoint(endpoint);
        }

        if let (Some(access_key_id), Some(secret_access_key)) =
            (&self.access_key_id, &self.secret_access_key)
        {
            s3_config = s3_config.with_credentials(access_key_id, secret_access_key);
        }

        if let Some(ref prefix) = self.key_prefix {
            s3_config = s3_config.with_prefix(prefix);
        }

        let backend = StorageBackend::new(s3_config)?;

        Ok(Some(DownloadSigner::new(backend)))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bucket_name: None,
            region: defaults::AWS_REGION.to_string(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            key_prefix: None,
        }
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Credentials stay out of logs.
        f.debug_struct("ServiceConfig")
            .field("bucket_name", &self.bucket_name)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_bucket() {
        let config = ServiceConfig::default();
        assert!(!config.has_bucket());
        assert!(config.connect_storage().unwrap().is_none());
    }

    #[test]
    fn empty_bucket_name_counts_as_missing() {
        let config = ServiceConfig {
            bucket_name: Some(String::new()),
            ..ServiceConfig::default()
        };

        assert!(!config.has_bucket());
        assert!(config.connect_storage().unwrap().is_none());
    }

    #[test]
    fn configured_bucket_yields_a_signer() {
        let config = ServiceConfig {
            bucket_name: Some("ebooks".to_string()),
            access_key_id: Some("access".to_string()),
            secret_access_key: Some("secret".to_string()),
            ..ServiceConfig::default()
        };

        assert!(config.has_bucket());
        assert!(config.connect_storage().unwrap().is_some());
    }

    #[test]
    fn debug_omits_credentials() {
        let config = ServiceConfig {
            bucket_name: Some("ebooks".to_string()),
            secret_access_key: Some("top-secret".to_string()),
            ..ServiceConfig::default()
        };

        let debug = format!("{config:?}");
        assert!(debug.contains("ebooks"));
        assert!(!debug.contains("top-secret"));
    }
}
