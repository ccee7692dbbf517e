//! Request types for HTTP handlers.

mod downloads;

pub use downloads::DownloadLinkParams;
