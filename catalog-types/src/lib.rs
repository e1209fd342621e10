//! Core type definitions for the metadata catalog.
//!
//! This crate defines the closed vocabulary shared by every other crate:
//! - [`EntityType`]: the discriminant tag of a catalog entity kind
//! - [`Capability`] / [`CapabilitySet`]: features an entity kind may support
//! - [`Urn`]: the `urn:li:<kind>:<key>` identifier carried by every entity
//!
//! Rendering, translation and lookup live in the crates above this one.

mod capability;
mod entity_type;
mod urn;

pub use capability::{Capability, CapabilitySet};
pub use entity_type::EntityType;
pub use urn::Urn;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    #[error("invalid urn: {0}")]
    InvalidUrn(String),
}
