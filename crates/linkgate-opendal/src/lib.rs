#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod backend;
mod config;
mod error;
mod signer;

#[doc(hidden)]
pub mod prelude;

pub use backend::StorageBackend;
pub use config::S3Config;
pub use error::{StorageError, StorageResult};
pub use signer::SignedUrlProvider;

/// Tracing target for storage operations.
pub const TRACING_TARGET: &str = "linkgate_opendal";
