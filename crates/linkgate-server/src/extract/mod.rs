//! Enhanced HTTP request extractors.
//!
//! Drop-in replacements for the standard axum extractors that reject with
//! this API's structured `{"error": ...}` body instead of axum's plain-text
//! defaults.

mod query;

pub use crate::extract::query::Query;
