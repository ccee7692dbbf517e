//! Application state and dependency injection.

mod config;
mod signer;
mod state;

pub use crate::service::config::ServiceConfig;
pub use crate::service::signer::DownloadSigner;
pub use crate::service::state::ServiceState;

/// Tracing target for service wiring.
pub const TRACING_TARGET: &str = "linkgate_server::service";
