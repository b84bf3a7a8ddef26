//! HTTP handlers for the brand resource.

pub mod brands;
pub use brands::*;
