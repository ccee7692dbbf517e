//! System health monitoring handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handler::Result;
use crate::handler::response::MonitorStatus;
use crate::service::{DownloadSigner, ServiceState};

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "linkgate_server::handler::monitors";

/// Reports server liveness.
///
/// The probe succeeds regardless of storage configuration; an unconfigured
/// bucket is visible in the report but does not fail the health check.
#[tracing::instrument(skip_all)]
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Get system health status",
    responses(
        (status = 200, description = "System is healthy", body = MonitorStatus),
    ),
)]
async fn health_status(
    State(signer): State<Option<DownloadSigner>>,
) -> Result<(StatusCode, Json<MonitorStatus>)> {
    let storage_configured = signer.is_some();

    tracing::debug!(
        target: TRACING_TARGET,
        storage_configured = storage_configured,
        "health status requested"
    );

    let response = MonitorStatus {
        is_healthy: true,
        storage_configured,
        updated_at: jiff::Timestamp::now(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new().routes(routes!(health_status))
}

#[cfg(test)]
mod tests {
    use linkgate_opendal::{S3Config, StorageBackend};

    use crate::handler::response::MonitorStatus;
    use crate::handler::test::create_test_server;
    use crate::service::DownloadSigner;

    #[tokio::test]
    async fn health_reports_missing_storage() -> anyhow::Result<()> {
        let server = create_test_server(None)?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let status = response.json::<MonitorStatus>();
        assert!(status.is_healthy);
        assert!(!status.storage_configured);
        Ok(())
    }

    #[tokio::test]
    async fn health_reports_configured_storage() -> anyhow::Result<()> {
        let config = S3Config::new("ebooks", "sa-east-1").with_credentials("access", "secret");
        let signer = DownloadSigner::new(StorageBackend::new(config)?);
        let server = create_test_server(Some(signer))?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let status = response.json::<MonitorStatus>();
        assert!(status.is_healthy);
        assert!(status.storage_configured);
        Ok(())
    }
}
