//! Response envelopes for the pet endpoints.

use crate::model::Pet;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// `{"pet": {...}}`
#[derive(Serialize, ToSchema)]
pub struct PetOne {
    pub pet: Pet,
}

/// `{"message": "...", "pet": {...}}`
#[derive(Serialize, ToSchema)]
pub struct PetWithMessage {
    pub message: String,
    pub pet: Pet,
}

/// `{"pets": [...]}`
#[derive(Serialize, ToSchema)]
pub struct PetMany {
    pub pets: Vec<Pet>,
}

/// `{"message": "..."}`
#[derive(Serialize, ToSchema)]
pub struct MessageOnly {
    pub message: String,
}

pub fn pet_created(pet: Pet) -> (StatusCode, Json<PetWithMessage>) {
    (
        StatusCode::CREATED,
        Json(PetWithMessage {
            message: "Pet created successfully".into(),
            pet,
        }),
    )
}

pub fn pet_updated(pet: Pet) -> (StatusCode, Json<PetWithMessage>) {
    (
        StatusCode::OK,
        Json(PetWithMessage {
            message: "Pet updated successfully".into(),
            pet,
        }),
    )
}

pub fn pet_deleted() -> (StatusCode, Json<MessageOnly>) {
    (
        StatusCode::OK,
        Json(MessageOnly {
            message: "Pet deleted successfully".into(),
        }),
    )
}

pub fn pet_one(pet: Pet) -> (StatusCode, Json<PetOne>) {
    (StatusCode::OK, Json(PetOne { pet }))
}

pub fn pet_many(pets: Vec<Pet>) -> (StatusCode, Json<PetMany>) {
    (StatusCode::OK, Json(PetMany { pets }))
}
