//! PostgreSQL implementation over a shared `PgPool`.

use super::{BrandStore, StoreError};
use crate::model::Brand;
use crate::sql::{INSERT, PING, SELECT_ALL, SELECT_BY_ID, UPDATE_BY_ID};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgBrandStore {
    pool: PgPool,
}

impl PgBrandStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BrandStore for PgBrandStore {
    async fn list(&self) -> Result<Vec<Brand>, StoreError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Brand>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, id: i32) -> Result<Option<Brand>, StoreError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let row = sqlx::query_as::<_, Brand>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, name: &str) -> Result<Option<Brand>, StoreError> {
        tracing::debug!(sql = %INSERT, name, "query");
        let row = sqlx::query_as::<_, Brand>(INSERT)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, name: &str) -> Result<Option<Brand>, StoreError> {
        tracing::debug!(sql = %UPDATE_BY_ID, name, id, "query");
        let row = sqlx::query_as::<_, Brand>(UPDATE_BY_ID)
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query(PING).fetch_optional(&self.pool).await?;
        Ok(())
    }
}
