//! Storage backend implementation.

use std::time::Duration;

use opendal::{Operator, services};

use crate::TRACING_TARGET;
use crate::config::S3Config;
use crate::error::{StorageError, StorageResult};

/// S3-compatible storage backend that wraps an OpenDAL operator.
#[derive(Clone)]
pub struct StorageBackend {
    operator: Operator,
    config: S3Config,
}

impl StorageBackend {
    /// Creates a new storage backend from configuration.
    ///
    /// Building the operator performs no I/O; credentials are only exercised
    /// once a signing request is made.
    pub fn new(config: S3Config) -> StorageResult<Self> {
        let operator = Self::create_operator(&config)?;

        tracing::info!(
            target: TRACING_TARGET,
            bucket = %config.bucket,
            region = %config.region,
            endpoint = ?config.endpoint,
            "storage backend initialized"
        );

        Ok(Self { operator, config })
    }

    /// Returns the configuration for this backend.
    pub fn config(&self) -> &S3Config {
        &self.config
    }

    /// Returns the bucket this backend points at.
    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }

    /// Generates a presigned download URL for an object.
    ///
    /// The key is forwarded to the operator verbatim. The returned URL grants
    /// read access to that single object until `expires_in` elapses.
    pub async fn presign_download(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        tracing::debug!(
            target: TRACING_TARGET,
            key = %key,
            expires_in_secs = expires_in.as_secs(),
            "presigning download URL"
        );

        let request = self.operator.presign_read(key, expires_in).await?;

        Ok(request.uri().to_string())
    }

    /// Creates an OpenDAL operator based on configuration.
    fn create_operator(config: &S3Config) -> StorageResult<Operator> {
        let mut builder = services::S3::default()
            .bucket(&config.bucket)
            .region(&config.region);

        if let Some(ref endpoint) = config.endpoint {
            builder = builder.endpoint(endpoint);
        }

        if let Some(ref access_key_id) = config.access_key_id {
            builder = builder.access_key_id(access_key_id);
        }

        if let Some(ref secret_access_key) = config.secret_access_key {
            builder = builder.secret_access_key(secret_access_key);
        }

        if let Some(ref prefix) = config.prefix {
            builder = builder.root(prefix);
        }

        Operator::new(builder)
            .map(|op| op.finish())
            .map_err(|e| StorageError::init(e.to_string()))
    }
}

impl std::fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBackend")
            .field("bucket", &self.config.bucket)
            .field("region", &self.config.region)
            .finish()
    }
}
