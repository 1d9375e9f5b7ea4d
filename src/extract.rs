//! axum extractors that decode repeated parameters as lists
//!
//! `axum::extract::Query` keeps only one value per repeated name (or fails
//! to deserialize, depending on the target type). [`CgiQuery`] and
//! [`CgiForm`] decode `?tag=a&tag=b` as `tag: ["a", "b"]` instead.

use std::convert::Infallible;

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;

use crate::utils::{parameters_from_query_string, parse_urlencoded_body, Parameters};

/// Query-string parameters of the request. A request without a query yields an empty map.
#[derive(Debug, Clone, Default)]
pub struct CgiQuery(pub Parameters);

#[async_trait]
impl<S> FromRequestParts<S> for CgiQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        Ok(CgiQuery(parameters_from_query_string(query)))
    }
}

/// URL-encoded request body parameters
#[derive(Debug, Clone, Default)]
pub struct CgiForm(pub Parameters);

#[async_trait]
impl<S> FromRequest<S> for CgiForm
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        Ok(CgiForm(parse_urlencoded_body(&body)))
    }
}
