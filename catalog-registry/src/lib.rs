//! Entity registry: the lookup from [`EntityType`] to the handler that knows
//! how to render and describe entities of that type.
//!
//! Bootstrap code creates one [`EntityRegistry`], registers a handler per
//! type, and then shares it read-only (usually behind an `Arc`) with every
//! rendering call site. Nothing mutates it after bootstrap, so concurrent
//! readers need no locking.
//!
//! Configuration ([`RegistryConfig`]) controls how duplicate registrations
//! are treated and which types must be present before first render.
//!
//! [`EntityType`]: catalog_types::EntityType

mod config;
mod error;
mod registry;

pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{ConfigError, RegistryError, RegistryResult};
pub use registry::EntityRegistry;
