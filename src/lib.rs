//! carbrands-api: REST backend for the `carbrands` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::Brand;
pub use routes::{app, brand_routes, common_routes, BRANDS_PATH};
pub use service::BrandService;
pub use state::AppState;
pub use store::{BrandStore, MemoryBrandStore, PgBrandStore, StoreError};
