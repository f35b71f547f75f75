//! Petstore: a single-resource pet CRUD service over PostgreSQL.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError};
pub use model::{NewPet, Pet, PetChanges};
pub use routes::{app, common_routes, openapi_routes, pet_routes, ApiDoc};
pub use settings::{Settings, StoreKind};
pub use state::AppState;
pub use store::{ensure_database_exists, open_store, MemoryPetStore, PetStore, PgPetStore};
