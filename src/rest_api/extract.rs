//! # Request Extractors
//!
//! Path and query extractors that reject with [`RestError`], so decoding
//! failures answer with the same JSON error body as every other failure.

use std::collections::HashMap;

use axum::async_trait;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;

use super::errors::RestError;

/// The single path parameter of a lookup route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParam(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for PathParam {
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| RestError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Raw query parameters
#[derive(Debug, Clone, Default)]
pub struct QueryMap(pub HashMap<String, String>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for QueryMap {
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| RestError::BadRequest(rejection.body_text()))?;
        Ok(Self(params))
    }
}
