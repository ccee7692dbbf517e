use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A freshly issued download link.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    /// Signed URL granting temporary read access to the requested object.
    pub download_url: String,
}
