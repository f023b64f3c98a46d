//! Domain Layer
//!
//! Core entities and business rules for proposal documents.
//! This layer has NO external dependencies (except serde for serialization).

mod block;
mod entity;
mod error;

pub use block::{Block, BlockKind};
pub use entity::{first_duplicate_id, Entity};
pub use error::{DomainError, DomainResult};
