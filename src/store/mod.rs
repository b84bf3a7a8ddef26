//! Brand persistence behind a trait so handlers never see a pool directly.
//!
//! `PgBrandStore` is the production implementation; `MemoryBrandStore` mirrors
//! the table's constraints in process and backs the router tests.

mod memory;
mod postgres;

pub use memory::MemoryBrandStore;
pub use postgres::PgBrandStore;

use crate::model::Brand;
use async_trait::async_trait;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Storage failures, classified by what the caller can do about them.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique violation: {message}")]
    UniqueViolation {
        constraint: Option<String>,
        message: String,
    },
    /// Not-null, check or foreign key violation.
    #[error("integrity violation: {message}")]
    IntegrityViolation { message: String },
    #[error("database: {0}")]
    Db(sqlx::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db) = err.as_database_error() {
            match db.kind() {
                ErrorKind::UniqueViolation => {
                    return StoreError::UniqueViolation {
                        constraint: db.constraint().map(str::to_owned),
                        message: db.message().to_owned(),
                    }
                }
                ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::ForeignKeyViolation => {
                    return StoreError::IntegrityViolation {
                        message: db.message().to_owned(),
                    }
                }
                _ => {}
            }
        }
        StoreError::Db(err)
    }
}

/// The four statement shapes the service issues, plus a liveness probe.
#[async_trait]
pub trait BrandStore: Send + Sync {
    /// All rows ordered by id ascending.
    async fn list(&self) -> Result<Vec<Brand>, StoreError>;

    async fn find(&self, id: i32) -> Result<Option<Brand>, StoreError>;

    /// Insert and return the stored row. `None` means the statement succeeded
    /// without returning a row.
    async fn insert(&self, name: &str) -> Result<Option<Brand>, StoreError>;

    /// Rename by id. `None` means no row matched.
    async fn update(&self, id: i32, name: &str) -> Result<Option<Brand>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
