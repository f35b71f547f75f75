//! OpenAPI document for the pet API.

use crate::error::ErrorBody;
use crate::handlers::pet;
use crate::model::{NewPet, Pet, PetChanges};
use crate::response::{MessageOnly, PetMany, PetOne, PetWithMessage};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        pet::create_pet,
        pet::list_pets,
        pet::get_pet,
        pet::find_pets_by_status,
        pet::update_pet,
        pet::delete_pet
    ),
    components(schemas(Pet, NewPet, PetChanges, PetOne, PetMany, PetWithMessage, MessageOnly, ErrorBody)),
    tags((name = "pet", description = "Pet CRUD"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_pet_operation() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = &doc["paths"];
        assert!(paths["/pet"]["get"].is_object());
        assert!(paths["/pet"]["post"].is_object());
        assert!(paths["/pet/findByStatus"]["get"].is_object());
        for method in ["get", "put", "delete"] {
            assert!(paths["/pet/{id}"][method].is_object(), "{method}");
        }
        assert!(doc["components"]["schemas"]["Pet"].is_object());
    }
}
