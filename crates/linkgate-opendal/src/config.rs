//! Storage configuration types.

use serde::{Deserialize, Serialize};

/// Amazon S3 (and S3-compatible) storage configuration.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct S3Config {
    /// Bucket name.
    pub bucket: String,
    /// AWS region.
    pub region: String,
    /// Custom endpoint URL (for S3-compatible storage like MinIO, R2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Access key ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// Secret access key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    /// Path prefix within the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl S3Config {
    /// Creates a new S3 configuration.
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            prefix: None,
        }
    }

    /// Sets the custom endpoint (for S3-compatible storage).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the access credentials.
    ///
    /// When not set, the operator falls back to the credential sources the
    /// environment provides (env vars, profiles, instance metadata).
    pub fn with_credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Sets the path prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Credentials stay out of logs.
        f.debug_struct("S3Config")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_all_fields() {
        let config = S3Config::new("ebooks", "sa-east-1")
            .with_endpoint("http://localhost:9000")
            .with_credentials("minioadmin", "minioadmin")
            .with_prefix("public/");

        assert_eq!(config.bucket, "ebooks");
        assert_eq!(config.region, "sa-east-1");
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.access_key_id.as_deref(), Some("minioadmin"));
        assert_eq!(config.secret_access_key.as_deref(), Some("minioadmin"));
        assert_eq!(config.prefix.as_deref(), Some("public/"));
    }

    #[test]
    fn debug_omits_credentials() {
        let config = S3Config::new("ebooks", "sa-east-1").with_credentials("key-id", "top-secret");

        let debug = format!("{config:?}");
        assert!(debug.contains("ebooks"));
        assert!(!debug.contains("key-id"));
        assert!(!debug.contains("top-secret"));
    }

    #[test]
    fn optional_fields_skipped_in_serialization() {
        let config = S3Config::new("ebooks", "sa-east-1");
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains("bucket"));
        assert!(!json.contains("endpoint"));
        assert!(!json.contains("access_key_id"));
    }
}
