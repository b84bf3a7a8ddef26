//! Route assembly. `app` is the full service router with middleware applied.

pub mod brands;
pub mod common;

pub use brands::brand_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Path prefix for the brand resource.
pub const BRANDS_PATH: &str = "/api/v1/cars";

pub fn app(state: AppState, body_limit: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(common_routes(state.clone()))
        .nest(BRANDS_PATH, brand_routes(state))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
