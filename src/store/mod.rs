//! Pet persistence: the `PetStore` trait, its PostgreSQL and in-memory implementations, and startup bootstrap.

mod memory;
mod postgres;
pub mod queries;

pub use memory::MemoryPetStore;
pub use postgres::{ensure_database_exists, PgPetStore};

use crate::error::AppError;
use crate::model::{NewPet, Pet, PetChanges};
use crate::settings::{Settings, StoreKind};
use async_trait::async_trait;
use std::sync::Arc;

/// Table accessor for `Pet` rows. Every method is one independent operation; no cross-call transaction.
#[async_trait]
pub trait PetStore: Send + Sync {
    /// Create the table (and its schema) if absent. Idempotent.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Cheap round trip used by the readiness check.
    async fn ping(&self) -> Result<(), AppError>;

    /// Insert a row and return it with its assigned id. A failed insert leaves no row behind.
    async fn insert(&self, new_pet: &NewPet) -> Result<Pet, AppError>;

    async fn list(&self) -> Result<Vec<Pet>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<Pet>, AppError>;

    /// Exact match on `status`.
    async fn find_by_status(&self, status: &str) -> Result<Vec<Pet>, AppError>;

    /// Apply `changes` in place. `None` when no row has this id.
    async fn update(&self, id: i32, changes: &PetChanges) -> Result<Option<Pet>, AppError>;

    /// `false` when no row has this id.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

/// Build the configured store and make sure its table exists. Runs once, before the listener is bound.
pub async fn open_store(settings: &Settings) -> Result<Arc<dyn PetStore>, AppError> {
    let store: Arc<dyn PetStore> = match settings.store {
        StoreKind::Memory => {
            tracing::warn!("using in-memory pet store; data is lost on exit");
            Arc::new(MemoryPetStore::new())
        }
        StoreKind::Postgres => {
            if settings.create_database {
                ensure_database_exists(&settings.database_url).await?;
            }
            Arc::new(PgPetStore::connect(&settings.database_url, &settings.schema, settings.max_connections).await?)
        }
    };
    store.ensure_schema().await?;
    tracing::info!(schema = %settings.schema, "pet table ready");
    Ok(store)
}
