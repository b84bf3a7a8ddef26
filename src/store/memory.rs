//! In-process store with the same observable behavior as the carbrands table:
//! serial ids starting at 1, ordering by id, and a unique `carbrand` column.

use super::{BrandStore, StoreError};
use crate::model::Brand;
use crate::sql::NAME_UNIQUE_CONSTRAINT;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub struct MemoryBrandStore {
    inner: Mutex<Table>,
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, String>,
    last_id: i32,
}

impl Table {
    fn check_unique(&self, name: &str, except: Option<i32>) -> Result<(), StoreError> {
        let taken = self
            .rows
            .iter()
            .any(|(id, existing)| existing == name && Some(*id) != except);
        if taken {
            return Err(StoreError::UniqueViolation {
                constraint: Some(NAME_UNIQUE_CONSTRAINT.to_string()),
                message: format!(
                    "duplicate key value violates unique constraint \"{}\"",
                    NAME_UNIQUE_CONSTRAINT
                ),
            });
        }
        Ok(())
    }
}

impl MemoryBrandStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `names`, assigned ids 1..=n in order.
    pub fn with_brands<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Table::default();
        for name in names {
            table.last_id += 1;
            table.rows.insert(table.last_id, name.into());
        }
        Self {
            inner: Mutex::new(table),
        }
    }

    fn table(&self) -> Result<MutexGuard<'_, Table>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl BrandStore for MemoryBrandStore {
    async fn list(&self) -> Result<Vec<Brand>, StoreError> {
        let table = self.table()?;
        Ok(table
            .rows
            .iter()
            .map(|(id, name)| Brand {
                id: *id,
                carbrand: name.clone(),
            })
            .collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Brand>, StoreError> {
        let table = self.table()?;
        Ok(table.rows.get(&id).map(|name| Brand {
            id,
            carbrand: name.clone(),
        }))
    }

    async fn insert(&self, name: &str) -> Result<Option<Brand>, StoreError> {
        let mut table = self.table()?;
        table.check_unique(name, None)?;
        // A failed insert still consumes the sequence value in PostgreSQL; not modelled here.
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, name.to_string());
        Ok(Some(Brand {
            id,
            carbrand: name.to_string(),
        }))
    }

    async fn update(&self, id: i32, name: &str) -> Result<Option<Brand>, StoreError> {
        let mut table = self.table()?;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        table.check_unique(name, Some(id))?;
        table.rows.insert(id, name.to_string());
        Ok(Some(Brand {
            id,
            carbrand: name.to_string(),
        }))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.table().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryBrandStore::new();
        let a = store.insert("Toyota").await.unwrap().unwrap();
        let b = store.insert("Honda").await.unwrap().unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        let all = store.list().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn duplicate_name_is_unique_violation() {
        let store = MemoryBrandStore::with_brands(["Toyota"]);
        let err = store.insert("Toyota").await.unwrap_err();
        match err {
            StoreError::UniqueViolation { constraint, .. } => {
                assert_eq!(constraint.as_deref(), Some(NAME_UNIQUE_CONSTRAINT));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_to_own_name_is_allowed() {
        let store = MemoryBrandStore::with_brands(["Toyota", "Honda"]);
        let same = store.update(1, "Toyota").await.unwrap();
        assert_eq!(same.map(|b| b.carbrand), Some("Toyota".to_string()));
        assert!(store.update(1, "Honda").await.is_err());
    }

    #[tokio::test]
    async fn update_missing_row_returns_none() {
        let store = MemoryBrandStore::new();
        assert_eq!(store.update(7, "Kia").await.unwrap(), None);
    }
}
