//! BrandService: brand operations over an injected store.

mod brands;
mod validation;
pub use brands::BrandService;
pub use validation::{IdSource, RequestValidator, INVALID_NAME, INVALID_PATH_ID, INVALID_QUERY_ID};
