//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod downloads;
mod error;
mod monitors;
mod request;
mod response;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use utoipa_axum::router::OpenApiRouter;

pub use crate::handler::downloads::DOWNLOAD_URL_TTL;
pub use crate::handler::error::{Error, ErrorKind, Result};
pub use crate::handler::request::DownloadLinkParams;
pub use crate::handler::response::{DownloadLink, ErrorResponse, MonitorStatus};
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`OpenApiRouter`] with all public routes.
fn openapi_routes() -> OpenApiRouter<ServiceState> {
    OpenApiRouter::new()
        .merge(downloads::routes())
        .merge(monitors::routes())
}

/// Returns the ready-to-serve [`Router`] with all routes, the generated
/// OpenAPI document at `/openapi.json`, and a structured 404 fallback.
///
/// [`Router`]: axum::routing::Router
pub fn routes(state: ServiceState) -> axum::Router {
    let (router, api) = openapi_routes().with_state(state).split_for_parts();

    router
        .route("/openapi.json", get(move || async move { axum::Json(api) }))
        .fallback(handler)
}

#[cfg(test)]
pub(crate) mod test {
    use axum_test::TestServer;

    use crate::service::{DownloadSigner, ServiceState};

    /// Returns a new [`TestServer`] serving the full router with the given signer.
    pub fn create_test_server(signer: Option<DownloadSigner>) -> anyhow::Result<TestServer> {
        let state = ServiceState::with_signer(signer);
        let server = TestServer::new(crate::handler::routes(state))?;
        Ok(server)
    }
}
