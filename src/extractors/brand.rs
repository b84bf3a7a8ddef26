//! Extract brand id (path), id filter (query) and brand name (JSON body).

use crate::error::AppError;
use crate::service::{IdSource, RequestValidator, INVALID_NAME, INVALID_PATH_ID, INVALID_QUERY_ID};
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, StatusCode},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

/// Integer id from the `:id` path segment.
#[derive(Clone, Copy, Debug)]
pub struct BrandId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for BrandId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_PATH_ID.into()))?;
        RequestValidator::id(&raw, IdSource::Path).map(BrandId)
    }
}

/// Optional `?id=` filter for the list route. An empty value counts as absent.
#[derive(Clone, Copy, Debug)]
pub struct IdFilter(pub Option<i32>);

#[async_trait]
impl<S> FromRequestParts<S> for IdFilter
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_QUERY_ID.into()))?;
        let filter = match params.get("id").map(String::as_str) {
            None | Some("") => None,
            Some(raw) => Some(RequestValidator::id(raw, IdSource::Query)?),
        };
        Ok(IdFilter(filter))
    }
}

/// Trimmed, non-empty `name` from a JSON object body.
#[derive(Clone, Debug)]
pub struct BrandPayload {
    pub name: String,
}

#[async_trait]
impl<S> FromRequest<S> for BrandPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        let name = RequestValidator::brand_name(&body)?;
        Ok(BrandPayload { name })
    }
}

/// A body without a JSON content type reads as an empty object, so it fails on `name`.
fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => AppError::BadRequest(INVALID_NAME.into()),
        r if r.status() == StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
        r => AppError::BadRequest(r.body_text()),
    }
}
