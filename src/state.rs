//! Shared application state for all routes.

use crate::store::PetStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PetStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PetStore>) -> Self {
        AppState { store }
    }
}
