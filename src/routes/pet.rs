//! Pet CRUD routes. `/pet/findByStatus` is a static segment and wins over `/pet/:id`.

use crate::handlers::pet::{create_pet, delete_pet, find_pets_by_status, get_pet, list_pets, update_pet};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn pet_routes(state: AppState) -> Router {
    Router::new()
        .route("/pet", get(list_pets).post(create_pet))
        .route("/pet/findByStatus", get(find_pets_by_status))
        .route("/pet/:id", get(get_pet).put(update_pet).delete(delete_pet))
        .with_state(state)
}
