//! Tower middleware for the HTTP surface.

mod observability;
mod recovery;

pub use crate::middleware::observability::RouterObservabilityExt;
pub use crate::middleware::recovery::{RecoveryConfig, RouterRecoveryExt};
