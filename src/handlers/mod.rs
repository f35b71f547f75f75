//! HTTP handlers for pet CRUD.

pub mod pet;
pub use pet::*;
