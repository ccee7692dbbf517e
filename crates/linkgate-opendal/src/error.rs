//! Storage error types.

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to initialize the storage backend.
    #[error("storage initialization failed: {0}")]
    Init(String),

    /// File or object not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Presigned URL generation failed.
    #[error("presign failed: {0}")]
    Presign(String),

    /// Backend-specific error.
    #[error("backend error: {0}")]
    Backend(opendal::Error),
}

impl StorageError {
    /// Creates a new initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    /// Creates a new not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Creates a new permission denied error.
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    /// Creates a new presign error.
    pub fn presign(msg: impl Into<String>) -> Self {
        Self::Presign(msg.into())
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        use opendal::ErrorKind;

        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(err.to_string()),
            ErrorKind::PermissionDenied => Self::PermissionDenied(err.to_string()),
            ErrorKind::Unsupported => Self::Presign(err.to_string()),
            _ => Self::Backend(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_match_variants() {
        assert!(matches!(StorageError::init("x"), StorageError::Init(_)));
        assert!(matches!(
            StorageError::not_found("x"),
            StorageError::NotFound(_)
        ));
        assert!(matches!(
            StorageError::permission_denied("x"),
            StorageError::PermissionDenied(_)
        ));
        assert!(matches!(
            StorageError::presign("x"),
            StorageError::Presign(_)
        ));
    }

    #[test]
    fn opendal_kinds_are_classified() {
        let not_found = opendal::Error::new(opendal::ErrorKind::NotFound, "missing");
        assert!(matches!(
            StorageError::from(not_found),
            StorageError::NotFound(_)
        ));

        let denied = opendal::Error::new(opendal::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            StorageError::from(denied),
            StorageError::PermissionDenied(_)
        ));

        let other = opendal::Error::new(opendal::ErrorKind::Unexpected, "boom");
        assert!(matches!(
            StorageError::from(other),
            StorageError::Backend(_)
        ));
    }
}
