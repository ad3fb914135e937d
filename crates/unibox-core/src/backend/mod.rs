//! Backend endpoint management.
//!
//! Provides backend configuration, storage, and validation.

mod model;
mod repository;
mod validation;

pub use model::{Backend, BackendId};
pub use repository::BackendRepository;
pub use validation::{ValidationError, ValidationResult, validate_backend};
