use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health status report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitorStatus {
    /// Whether the server is able to handle requests.
    pub is_healthy: bool,
    /// Whether a storage bucket is configured for signing.
    pub storage_configured: bool,
    /// When this report was produced.
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: jiff::Timestamp,
}
