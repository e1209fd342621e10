//! Error types for the entity registry.

use catalog_types::EntityType;
use std::path::PathBuf;
use thiserror::Error;

/// Registry configuration errors. All of them are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A second handler was registered for a type that already has one.
    #[error("entity type {0} registered twice")]
    DuplicateRegistration(EntityType),

    /// No handler was registered for the type.
    #[error("entity type {0} not registered")]
    NotRegistered(EntityType),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
