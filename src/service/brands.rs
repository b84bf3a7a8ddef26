//! Brand operations: store dispatch and translation of storage outcomes into `AppError`.

use crate::error::AppError;
use crate::model::Brand;
use crate::sql::PRIMARY_KEY_CONSTRAINT;
use crate::store::{BrandStore, StoreError};

pub struct BrandService;

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Brand with id {} not found.", id))
}

impl BrandService {
    /// All brands ordered by id, or only the brand matching `filter` (possibly none).
    pub async fn list(store: &dyn BrandStore, filter: Option<i32>) -> Result<Vec<Brand>, AppError> {
        let result = match filter {
            Some(id) => store.find(id).await.map(|row| row.into_iter().collect()),
            None => store.list().await,
        };
        result.map_err(|e| {
            tracing::error!(error = %e, ?filter, "list brands failed");
            AppError::internal("An error occurred while fetching brands.", e)
        })
    }

    pub async fn read(store: &dyn BrandStore, id: i32) -> Result<Brand, AppError> {
        store
            .find(id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "read brand failed");
                AppError::internal("An error occurred while fetching the brand.", e)
            })?
            .ok_or_else(|| not_found(id))
    }

    /// Insert a brand with an already validated, trimmed name.
    pub async fn create(store: &dyn BrandStore, name: &str) -> Result<Brand, AppError> {
        match store.insert(name).await {
            Ok(Some(row)) => Ok(row),
            Ok(None) => {
                tracing::error!(name, "insert returned no row");
                Err(AppError::Internal {
                    message: "Failed to retrieve added brand.",
                    source: None,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, name, "create brand failed");
                Err(match e {
                    StoreError::UniqueViolation { constraint, .. }
                        if constraint.as_deref() == Some(PRIMARY_KEY_CONSTRAINT) =>
                    {
                        AppError::Conflict("Brand with ID already exists (Code: 23505)".into())
                    }
                    StoreError::UniqueViolation { .. } => {
                        AppError::Conflict(format!("Brand name '{}' already exists.", name))
                    }
                    StoreError::IntegrityViolation { message } => {
                        AppError::BadRequest(format!("Database constraint violation: {}", message))
                    }
                    other => AppError::internal("An error occurred while adding the brand.", other),
                })
            }
        }
    }

    /// Rename brand `id` to an already validated, trimmed name.
    pub async fn update(store: &dyn BrandStore, id: i32, name: &str) -> Result<Brand, AppError> {
        match store.update(id, name).await {
            Ok(Some(row)) => Ok(row),
            Ok(None) => Err(not_found(id)),
            Err(e) => {
                tracing::error!(error = %e, id, name, "update brand failed");
                Err(match e {
                    StoreError::UniqueViolation { .. } => AppError::Conflict(format!(
                        "Another brand with name '{}' already exists.",
                        name
                    )),
                    other => AppError::internal("An error occurred while updating the brand.", other),
                })
            }
        }
    }
}
