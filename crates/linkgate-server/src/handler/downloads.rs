//! Download-link issuing handler.
//!
//! Turns a file name into a short-lived presigned download URL. The file
//! name is an opaque storage key: it is forwarded to the signer exactly as
//! received. Whether caller-supplied keys are trustworthy is a deployment
//! concern; a signed URL only ever grants access to the single key it was
//! signed for.

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::extract::Query;
use crate::handler::request::DownloadLinkParams;
use crate::handler::response::{DownloadLink, ErrorResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::{DownloadSigner, ServiceState};

/// Tracing target for download-link operations.
const TRACING_TARGET: &str = "linkgate_server::handler::downloads";

/// Validity window of issued download URLs.
pub const DOWNLOAD_URL_TTL: Duration = Duration::from_secs(60);

/// Issues a presigned download URL for the requested file.
///
/// Validation is ordered and short-circuiting: a missing file name is
/// reported even when the bucket is also unconfigured, and the signer is
/// only invoked once both preconditions hold.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    get,
    path = "/download-link",
    tag = "downloads",
    summary = "Issue a short-lived download URL",
    params(DownloadLinkParams),
    responses(
        (status = 200, description = "Signed download URL issued", body = DownloadLink),
        (status = 400, description = "File name missing from the query string", body = ErrorResponse),
        (status = 500, description = "Bucket not configured, or signing failed", body = ErrorResponse),
    ),
)]
async fn create_download_link(
    State(signer): State<Option<DownloadSigner>>,
    Query(params): Query<DownloadLinkParams>,
) -> Result<(StatusCode, Json<DownloadLink>)> {
    let file_name = match params.file {
        Some(ref file) if !file.is_empty() => file.as_str(),
        _ => {
            tracing::debug!(target: TRACING_TARGET, "request rejected: no file name provided");
            return Err(ErrorKind::MissingFileName.into_error());
        }
    };

    let Some(signer) = signer else {
        tracing::error!(
            target: TRACING_TARGET,
            "request rejected: no storage bucket configured"
        );
        return Err(ErrorKind::MissingBucketConfig.into_error());
    };

    let download_url = signer
        .presign_download(file_name, DOWNLOAD_URL_TTL)
        .await
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %err,
                file = %file_name,
                "failed to generate download URL"
            );
            ErrorKind::SigningFailure.with_context(err.to_string())
        })?;

    tracing::debug!(
        target: TRACING_TARGET,
        file = %file_name,
        expires_in_secs = DOWNLOAD_URL_TTL.as_secs(),
        "download link issued"
    );

    Ok((StatusCode::OK, Json(DownloadLink { download_url })))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new().routes(routes!(create_download_link))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::http::StatusCode;
    use linkgate_opendal::{SignedUrlProvider, StorageError, StorageResult};

    use super::DOWNLOAD_URL_TTL;
    use crate::handler::test::create_test_server;
    use crate::service::DownloadSigner;

    /// Outcome a [`RecordingSigner`] produces for every call.
    #[derive(Clone)]
    enum Outcome {
        Url(&'static str),
        NotFound,
        Denied,
    }

    /// Signer stand-in that records every call and returns a fixed outcome.
    #[derive(Clone)]
    struct RecordingSigner {
        calls: Arc<Mutex<Vec<(String, Duration)>>>,
        outcome: Outcome,
    }

    impl RecordingSigner {
        fn new(outcome: Outcome) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                outcome,
            }
        }

        fn calls(&self) -> Vec<(String, Duration)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SignedUrlProvider for RecordingSigner {
        async fn presign_download(
            &self,
            key: &str,
            expires_in: Duration,
        ) -> StorageResult<String> {
            self.calls
                .lock()
                .unwrap()
                .push((key.to_string(), expires_in));

            match self.outcome {
                Outcome::Url(url) => Ok(url.to_string()),
                Outcome::NotFound => Err(StorageError::not_found(key)),
                Outcome::Denied => Err(StorageError::permission_denied("access denied")),
            }
        }
    }

    const MISSING_FILE_BODY: &str =
        r#"{"error":"file name is required in the URL, e.g. ?file=name.pdf"}"#;
    const MISSING_BUCKET_BODY: &str =
        r#"{"error":"S3 bucket name is not configured in environment variables"}"#;
    const SIGNING_FAILURE_BODY: &str =
        r#"{"error":"could not generate the link; verify the file name is correct"}"#;

    #[tokio::test]
    async fn missing_file_name_is_rejected() -> anyhow::Result<()> {
        let signer = RecordingSigner::new(Outcome::Url("https://example.com/u"));
        let server = create_test_server(Some(DownloadSigner::from_provider(signer.clone())))?;

        let response = server.get("/download-link").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), MISSING_FILE_BODY);
        assert!(signer.calls().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn empty_file_name_is_rejected() -> anyhow::Result<()> {
        let signer = RecordingSigner::new(Outcome::Url("https://example.com/u"));
        let server = create_test_server(Some(DownloadSigner::from_provider(signer.clone())))?;

        let response = server.get("/download-link").add_query_param("file", "").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), MISSING_FILE_BODY);
        assert!(signer.calls().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_bucket_is_reported() -> anyhow::Result<()> {
        let server = create_test_server(None)?;

        let response = server
            .get("/download-link")
            .add_query_param("file", "book.pdf")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), MISSING_BUCKET_BODY);
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_name_wins_over_missing_bucket() -> anyhow::Result<()> {
        let server = create_test_server(None)?;

        let response = server.get("/download-link").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), MISSING_FILE_BODY);
        Ok(())
    }

    #[tokio::test]
    async fn signed_url_is_returned() -> anyhow::Result<()> {
        let url = "https://ebooks.s3.sa-east-1.amazonaws.com/book.pdf?X-Amz-Expires=60";
        let signer = RecordingSigner::new(Outcome::Url(url));
        let server = create_test_server(Some(DownloadSigner::from_provider(signer.clone())))?;

        let response = server
            .get("/download-link")
            .add_query_param("file", "book.pdf")
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), format!(r#"{{"downloadUrl":"{url}"}}"#));
        assert_eq!(signer.calls().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn signing_failures_share_one_body() -> anyhow::Result<()> {
        let mut bodies = Vec::new();

        for outcome in [Outcome::NotFound, Outcome::Denied] {
            let signer = RecordingSigner::new(outcome);
            let server = create_test_server(Some(DownloadSigner::from_provider(signer)))?;

            let response = server
                .get("/download-link")
                .add_query_param("file", "book.pdf")
                .await;

            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            bodies.push(response.text());
        }

        // Distinct causes must be indistinguishable on the wire.
        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[0], SIGNING_FAILURE_BODY);
        Ok(())
    }

    #[tokio::test]
    async fn key_is_passed_verbatim() -> anyhow::Result<()> {
        let signer = RecordingSigner::new(Outcome::Url("https://example.com/u"));
        let server = create_test_server(Some(DownloadSigner::from_provider(signer.clone())))?;

        for key in ["book.pdf", "  padded name.PDF ", "../outside/book.pdf"] {
            let response = server.get("/download-link").add_query_param("file", key).await;
            response.assert_status_ok();
        }

        let keys: Vec<String> = signer.calls().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["book.pdf", "  padded name.PDF ", "../outside/book.pdf"]);
        Ok(())
    }

    #[tokio::test]
    async fn expiry_is_always_sixty_seconds() -> anyhow::Result<()> {
        let signer = RecordingSigner::new(Outcome::Url("https://example.com/u"));
        let server = create_test_server(Some(DownloadSigner::from_provider(signer.clone())))?;

        for key in ["book.pdf", "another.epub"] {
            server.get("/download-link").add_query_param("file", key).await;
        }

        assert_eq!(signer.calls().len(), 2);
        for (_, expires_in) in signer.calls() {
            assert_eq!(expires_in, DOWNLOAD_URL_TTL);
            assert_eq!(expires_in, Duration::from_secs(60));
        }
        Ok(())
    }
}
