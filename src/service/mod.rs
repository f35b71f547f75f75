//! Request validation for pet bodies.

mod validation;
pub use validation::{is_truthy, RequestValidator, MISSING_FIELDS, NO_DATA};
