//! `itembox-core` — shared domain building blocks.
//!
//! Pure domain primitives only (no IO).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
