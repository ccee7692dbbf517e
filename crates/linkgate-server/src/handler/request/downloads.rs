use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters accepted by the download-link endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DownloadLinkParams {
    /// Object key of the file to sign, e.g. `?file=name.pdf`.
    ///
    /// The value is used verbatim as the storage key: no trimming, no path
    /// normalization. Keys containing traversal sequences select a
    /// (probably nonexistent) object; they cannot escape the bucket.
    pub file: Option<String>,
}
