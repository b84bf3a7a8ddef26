//! Success response helpers. Bodies are the bare records, no envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}
