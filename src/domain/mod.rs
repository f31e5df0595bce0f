//! Domain layer types and invariants.

pub mod error;
pub mod phone;
pub mod record;
pub mod types;
pub mod validation;
