//! Registry configuration, read from `catalog.toml`.
//!
//! ```toml
//! [registry]
//! on-duplicate = "reject"
//! required-types = ["DATASET", "GLOSSARY_TERM"]
//!
//! [i18n]
//! locale = "pt-BR"
//! messages = "locales/pt.json"
//! ```

use crate::ConfigError;
use catalog_types::EntityType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// What `register` does when a type already has a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail the registration.
    Reject,
    /// Keep the first handler and log a warning.
    Warn,
}

impl Default for DuplicatePolicy {
    /// Reject in debug builds, warn in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Reject
        } else {
            Self::Warn
        }
    }
}

/// Bootstrap settings for the registry and its translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub on_duplicate: DuplicatePolicy,
    /// Types that must have a handler before the registry is handed out.
    pub required_types: Vec<EntityType>,
    pub locale: String,
    /// JSON message catalog; relative paths resolve against the config file.
    pub messages: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            on_duplicate: DuplicatePolicy::default(),
            required_types: EntityType::ALL.to_vec(),
            locale: "en".to_string(),
            messages: None,
        }
    }
}

impl RegistryConfig {
    /// Loads config from `path`, or returns defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&contents)?;

        if let (Some(messages), Some(dir)) = (config.messages.as_mut(), path.parent()) {
            if messages.is_relative() {
                *messages = dir.join(&*messages);
            }
        }

        info!("Loaded registry config from {:?}", path);
        Ok(config)
    }

    /// Parses config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.into_config())
    }
}

/// Raw TOML structure matching the catalog.toml format.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    registry: RegistrySection,
    #[serde(default)]
    i18n: I18nSection,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RegistrySection {
    #[serde(default, rename = "on-duplicate")]
    on_duplicate: Option<DuplicatePolicy>,
    #[serde(default, rename = "required-types")]
    required_types: Option<Vec<EntityType>>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct I18nSection {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    messages: Option<PathBuf>,
}

impl ConfigFile {
    fn into_config(self) -> RegistryConfig {
        let defaults = RegistryConfig::default();
        RegistryConfig {
            on_duplicate: self.registry.on_duplicate.unwrap_or(defaults.on_duplicate),
            required_types: self.registry.required_types.unwrap_or(defaults.required_types),
            locale: self.i18n.locale.unwrap_or(defaults.locale),
            messages: self.i18n.messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.required_types.len(), EntityType::COUNT);
    }

    #[test]
    fn default_policy_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Warn
        };
        assert_eq!(DuplicatePolicy::default(), expected);
    }

    #[test]
    fn full_file() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [registry]
            on-duplicate = "warn"
            required-types = ["DATASET", "GLOSSARY_TERM"]

            [i18n]
            locale = "pt-BR"
            messages = "locales/pt.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.on_duplicate, DuplicatePolicy::Warn);
        assert_eq!(
            config.required_types,
            vec![EntityType::Dataset, EntityType::GlossaryTerm]
        );
        assert_eq!(config.locale, "pt-BR");
        assert_eq!(config.messages, Some(PathBuf::from("locales/pt.json")));
    }

    #[test]
    fn unknown_entity_type_is_rejected() {
        let err = RegistryConfig::from_toml_str(
            r#"
            [registry]
            required-types = ["NOTEBOOK"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(RegistryConfig::from_toml_str("[registry]\nstrict = true\n").is_err());
    }
}
