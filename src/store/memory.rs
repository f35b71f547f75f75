//! In-process `PetStore` over a `BTreeMap`. Ids start at 1 and are never reused.

use super::PetStore;
use crate::error::AppError;
use crate::model::{NewPet, Pet, PetChanges};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct PetTable {
    last_id: i32,
    rows: BTreeMap<i32, Pet>,
}

#[derive(Default)]
pub struct MemoryPetStore {
    table: RwLock<PetTable>,
}

impl MemoryPetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read()?.rows.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, PetTable>, AppError> {
        self.table.read().map_err(|_| AppError::Internal("pet table lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, PetTable>, AppError> {
        self.table.write().map_err(|_| AppError::Internal("pet table lock poisoned".into()))
    }
}

#[async_trait]
impl PetStore for MemoryPetStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }

    async fn insert(&self, new_pet: &NewPet) -> Result<Pet, AppError> {
        let mut table = self.write()?;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("pet id sequence exhausted".into()))?;
        table.last_id = id;
        let pet = Pet::from_new(id, new_pet);
        table.rows.insert(id, pet.clone());
        Ok(pet)
    }

    async fn list(&self) -> Result<Vec<Pet>, AppError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Pet>, AppError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<Pet>, AppError> {
        Ok(self
            .read()?
            .rows
            .values()
            .filter(|p| p.status == status)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, changes: &PetChanges) -> Result<Option<Pet>, AppError> {
        let mut table = self.write()?;
        Ok(table.rows.get_mut(&id).map(|pet| {
            changes.apply_to(pet);
            pet.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_pet(name: &str, status: &str) -> NewPet {
        NewPet {
            name: name.into(),
            category: "dog".into(),
            status: status.into(),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() {
        let store = MemoryPetStore::new();
        let a = store.insert(&new_pet("a", "available")).await.unwrap();
        let b = store.insert(&new_pet("b", "available")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert!(store.delete(b.id).await.unwrap());
        let c = store.insert(&new_pet("c", "available")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn find_by_status_is_exact_match() {
        let store = MemoryPetStore::new();
        store.insert(&new_pet("a", "available")).await.unwrap();
        store.insert(&new_pet("b", "Available")).await.unwrap();
        store.insert(&new_pet("c", "sold")).await.unwrap();
        let found = store.find_by_status("available").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "a");
        assert!(store.find_by_status("pending").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let store = MemoryPetStore::new();
        assert!(store.update(42, &PetChanges::default()).await.unwrap().is_none());
        assert!(!store.delete(42).await.unwrap());
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryPetStore::new();
        for name in ["x", "y", "z"] {
            store.insert(&new_pet(name, "available")).await.unwrap();
        }
        let ids: Vec<i32> = store.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn poisoned_lock_is_reported_not_hidden() {
        let store = std::sync::Arc::new(MemoryPetStore::new());
        let holder = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.table.write().unwrap();
            panic!("writer died holding the table lock");
        })
        .join();
        assert!(matches!(store.len(), Err(AppError::Internal(_))));
        assert!(matches!(store.is_empty(), Err(AppError::Internal(_))));
    }
}
