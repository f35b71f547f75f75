//! The `Pet` record and the request shapes that produce or change one.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `pet` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub status: String,
}

/// Validated input for creating a pet. All three fields are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewPet {
    pub name: String,
    pub category: String,
    pub status: String,
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PetChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl PetChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.status.is_none()
    }

    /// Overwrite the fields this change set carries, leaving the rest as they were.
    pub fn apply_to(&self, pet: &mut Pet) {
        if let Some(name) = &self.name {
            pet.name = name.clone();
        }
        if let Some(category) = &self.category {
            pet.category = category.clone();
        }
        if let Some(status) = &self.status {
            pet.status = status.clone();
        }
    }
}

impl Pet {
    pub fn from_new(id: i32, new_pet: &NewPet) -> Self {
        Pet {
            id,
            name: new_pet.name.clone(),
            category: new_pet.category.clone(),
            status: new_pet.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_fields_that_are_not_changed() {
        let mut pet = Pet {
            id: 7,
            name: "Rex".into(),
            category: "dog".into(),
            status: "available".into(),
        };
        let changes = PetChanges {
            status: Some("sold".into()),
            ..Default::default()
        };
        changes.apply_to(&mut pet);
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.category, "dog");
        assert_eq!(pet.status, "sold");
    }

    #[test]
    fn pet_serializes_with_all_columns() {
        let pet = Pet {
            id: 1,
            name: "Tom".into(),
            category: "cat".into(),
            status: "pending".into(),
        };
        assert_eq!(
            serde_json::to_value(&pet).unwrap(),
            serde_json::json!({ "id": 1, "name": "Tom", "category": "cat", "status": "pending" })
        );
    }
}
