//! Request body checks for create and update. Presence and type only; values are stored as sent.

use crate::error::AppError;
use crate::model::{NewPet, PetChanges};
use serde_json::{Map, Value};

pub const NO_DATA: &str = "No data provided";
pub const MISSING_FIELDS: &str = "Missing required fields";

const FIELDS: [&str; 3] = ["name", "category", "status"];

pub struct RequestValidator;

impl RequestValidator {
    /// All of name, category, status must be present and truthy; each must be a string.
    pub fn new_pet(body: Option<&Map<String, Value>>) -> Result<NewPet, AppError> {
        let body = match body {
            Some(b) if !b.is_empty() => b,
            _ => return Err(AppError::Validation(NO_DATA.into())),
        };
        if !FIELDS.iter().all(|f| body.get(*f).is_some_and(is_truthy)) {
            return Err(AppError::Validation(MISSING_FIELDS.into()));
        }
        Ok(NewPet {
            name: required_string(body, "name")?,
            category: required_string(body, "category")?,
            status: required_string(body, "status")?,
        })
    }

    /// Only fields present and non-null are changed. An absent body is an empty change set.
    pub fn pet_changes(body: Option<&Map<String, Value>>) -> Result<PetChanges, AppError> {
        let Some(body) = body else {
            return Ok(PetChanges::default());
        };
        Ok(PetChanges {
            name: optional_string(body, "name")?,
            category: optional_string(body, "category")?,
            status: optional_string(body, "status")?,
        })
    }
}

/// JSON truthiness: null, false, 0, "", [] and {} are falsy.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn required_string(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    optional_string(body, field)?.ok_or_else(|| AppError::Validation(MISSING_FIELDS.into()))
}

fn optional_string(body: &Map<String, Value>, field: &str) -> Result<Option<String>, AppError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::Validation(format!("{} must be a string", field))),
    }
}
