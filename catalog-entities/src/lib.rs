//! Built-in entity handlers.
//!
//! One handler per [`EntityType`], each holding the translator it was
//! constructed with. [`build_entity_registry`] registers all of them in a
//! fixed order and verifies that every required type is covered.
//!
//! [`EntityType`]: catalog_types::EntityType

mod bootstrap;
mod handlers;
mod shared;

pub use bootstrap::{build_entity_registry, translator_from_config, BootstrapError};
pub use handlers::*;
