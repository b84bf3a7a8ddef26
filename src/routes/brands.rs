//! Brand routes, mounted by `app` under `/api/v1/cars`.

use crate::handlers::brands::{create, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn brand_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(read).put(update))
        .with_state(state)
}
