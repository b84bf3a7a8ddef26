//! Brand handlers: list, read, create, update.

use crate::error::AppError;
use crate::extractors::{BrandId, BrandPayload, IdFilter};
use crate::response::{created, ok};
use crate::service::BrandService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(
    State(state): State<AppState>,
    IdFilter(filter): IdFilter,
) -> Result<impl IntoResponse, AppError> {
    let rows = BrandService::list(state.store(), filter).await?;
    Ok(ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    BrandId(id): BrandId,
) -> Result<impl IntoResponse, AppError> {
    let row = BrandService::read(state.store(), id).await?;
    Ok(ok(row))
}

pub async fn create(
    State(state): State<AppState>,
    payload: BrandPayload,
) -> Result<impl IntoResponse, AppError> {
    let row = BrandService::create(state.store(), &payload.name).await?;
    Ok(created(row))
}

/// The path id is validated before the body, so a bad id wins over a bad name.
pub async fn update(
    State(state): State<AppState>,
    BrandId(id): BrandId,
    payload: BrandPayload,
) -> Result<impl IntoResponse, AppError> {
    let row = BrandService::update(state.store(), id, &payload.name).await?;
    Ok(ok(row))
}
