//! Request extractors that validate brand input before a handler runs.
//! Rejections are `AppError`, so they render as JSON like every other failure.

mod brand;
pub use brand::{BrandId, BrandPayload, IdFilter};
