use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query as AxumQuery};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Tracing target for query extraction.
const TRACING_TARGET: &str = "linkgate_server::extract::query";

/// Query parameter extractor with structured error responses.
///
/// Behaves like `axum::extract::`[`Query`], but a failed extraction produces
/// the API's JSON error body rather than a plain-text 400.
///
/// [`Query`]: axum::extract::Query
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    /// Consumes the wrapper and returns the inner query parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Query(query)),
            Err(rejection) => Err(reject(rejection)),
        }
    }
}

/// Converts a query rejection into a structured error, keeping the parser
/// detail out of the response body.
fn reject(rejection: QueryRejection) -> Error<'static> {
    tracing::debug!(
        target: TRACING_TARGET,
        error = %rejection,
        "query parameter parsing failed"
    );

    ErrorKind::BadRequest.with_context(rejection.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_inner_returns_wrapped_value() {
        let query = Query("file=book.pdf".to_string());
        assert_eq!(query.into_inner(), "file=book.pdf");
    }
}
