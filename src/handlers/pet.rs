//! Pet CRUD handlers: create, list, read, find by status, update, delete.

use crate::error::{AppError, ErrorBody, NOT_FOUND};
use crate::extractors::JsonBody;
use crate::model::{NewPet, PetChanges};
use crate::response::{
    pet_created, pet_deleted, pet_many, pet_one, pet_updated, MessageOnly, PetMany, PetOne, PetWithMessage,
};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::IntoResponse,
};

pub const PET_NOT_FOUND: &str = "Pet not found";
pub const STATUS_MISSING: &str = "Status parameter is missing";

fn pet_not_found() -> AppError {
    AppError::NotFound(PET_NOT_FOUND.into())
}

/// Ids are non-negative decimal integers. Anything else does not name a pet at all.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    raw.parse().map_err(|_| AppError::NotFound(NOT_FOUND.into()))
}

#[utoipa::path(
    post,
    path = "/pet",
    tag = "pet",
    request_body = NewPet,
    responses(
        (status = 201, description = "Pet created", body = PetWithMessage),
        (status = 400, description = "No data or missing required fields", body = ErrorBody),
        (status = 500, description = "Persistence failure", body = ErrorBody)
    )
)]
pub async fn create_pet(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(body = ?body, "create pet request");
    let new_pet = RequestValidator::new_pet(body.as_ref())?;
    let pet = state.store.insert(&new_pet).await?;
    tracing::info!(id = pet.id, name = %pet.name, "pet created");
    Ok(pet_created(pet))
}

#[utoipa::path(
    get,
    path = "/pet",
    tag = "pet",
    responses((status = 200, description = "All pets", body = PetMany))
)]
pub async fn list_pets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pets = state.store.list().await?;
    Ok(pet_many(pets))
}

#[utoipa::path(
    get,
    path = "/pet/{id}",
    tag = "pet",
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Pet found", body = PetOne),
        (status = 404, description = "Pet not found", body = ErrorBody)
    )
)]
pub async fn get_pet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&raw_id)?;
    let pet = state.store.get(id).await?.ok_or_else(pet_not_found)?;
    Ok(pet_one(pet))
}

#[utoipa::path(
    get,
    path = "/pet/findByStatus",
    tag = "pet",
    params(("status" = String, Query, description = "Exact status to match")),
    responses(
        (status = 200, description = "Matching pets, possibly none", body = PetMany),
        (status = 400, description = "Status parameter is missing", body = ErrorBody)
    )
)]
pub async fn find_pets_by_status(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(pairs) = query?;
    // Repeated `status` keys: the first one wins.
    let status = pairs
        .into_iter()
        .find(|(key, _)| key == "status")
        .map(|(_, value)| value)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation(STATUS_MISSING.into()))?;
    let pets = state.store.find_by_status(&status).await?;
    Ok(pet_many(pets))
}

#[utoipa::path(
    put,
    path = "/pet/{id}",
    tag = "pet",
    params(("id" = i32, Path, description = "Pet id")),
    request_body = PetChanges,
    responses(
        (status = 200, description = "Pet updated", body = PetWithMessage),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 404, description = "Pet not found", body = ErrorBody)
    )
)]
pub async fn update_pet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<JsonBody, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&raw_id)?;
    let changes = match body.and_then(|JsonBody(b)| RequestValidator::pet_changes(b.as_ref())) {
        Ok(changes) => changes,
        Err(err) => {
            // An unknown id is reported as such whatever the body looks like.
            if state.store.get(id).await?.is_none() {
                return Err(pet_not_found());
            }
            return Err(err);
        }
    };
    let pet = state.store.update(id, &changes).await?.ok_or_else(pet_not_found)?;
    tracing::info!(id, "pet updated");
    Ok(pet_updated(pet))
}

#[utoipa::path(
    delete,
    path = "/pet/{id}",
    tag = "pet",
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Pet deleted", body = MessageOnly),
        (status = 404, description = "Pet not found", body = ErrorBody)
    )
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&raw_id)?;
    if !state.store.delete(id).await? {
        return Err(pet_not_found());
    }
    tracing::info!(id, "pet deleted");
    Ok(pet_deleted())
}
