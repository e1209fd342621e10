//! Flat key → text message catalogs.

use crate::{resolve_locale, I18nError, I18nResult, Translate, DEFAULT_LOCALE};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Built-in English strings for every key the entity handlers use.
const ENGLISH: &[(&str, &str)] = &[
    // Entity names, singular then plural.
    ("common.dataset", "Dataset"),
    ("common.datasets", "Datasets"),
    ("common.dashboard", "Dashboard"),
    ("common.dashboards", "Dashboards"),
    ("common.chart", "Chart"),
    ("common.charts", "Charts"),
    ("common.user", "User"),
    ("common.users", "Users"),
    ("common.group", "Group"),
    ("common.groups", "Groups"),
    ("common.tag", "Tag"),
    ("common.tags", "Tags"),
    ("common.pipeline", "Pipeline"),
    ("common.pipelines", "Pipelines"),
    ("common.task", "Task"),
    ("common.tasks", "Tasks"),
    ("common.glossaryTerm", "Glossary Term"),
    ("common.glossaryTerms", "Glossary Terms"),
    ("common.termGroup", "Term Group"),
    ("common.termGroups", "Term Groups"),
    ("common.feature", "Feature"),
    ("common.features", "Features"),
    ("common.primaryKey", "ML Primary Key"),
    ("common.primaryKeys", "ML Primary Keys"),
    ("common.featureTable", "Feature Table"),
    ("common.featureTables", "Feature Tables"),
    ("common.mlModel", "ML Model"),
    ("common.mlModels", "ML Models"),
    ("common.mlModelGroup", "ML Model Group"),
    ("common.mlModelGroups", "ML Model Groups"),
    ("common.domain", "Domain"),
    ("common.domains", "Domains"),
    ("common.container", "Container"),
    ("common.containers", "Containers"),
    ("common.role", "Role"),
    ("common.roles", "Roles"),
    ("common.platform", "Data Platform"),
    ("common.platforms", "Data Platforms"),
    ("common.dataProduct", "Data Product"),
    ("common.dataProducts", "Data Products"),
    ("common.platformInstance", "Platform Instance"),
    ("common.platformInstances", "Platform Instances"),
    ("common.erModelRelationship", "ER Model Relationship"),
    ("common.erModelRelationships", "ER Model Relationships"),
    ("common.businessAttribute", "Business Attribute"),
    ("common.businessAttributes", "Business Attributes"),
    ("common.column", "Column"),
    ("common.columns", "Columns"),
    ("common.restricted", "Restricted Asset"),
    ("common.restrictedAssets", "Restricted Assets"),
    // Profile tabs.
    ("common.documentation", "Documentation"),
    ("common.schema", "Schema"),
    ("common.lineage", "Lineage"),
    ("common.properties", "Properties"),
    ("common.queries", "Queries"),
    ("common.stats", "Stats"),
    ("common.relatedEntities", "Related Entities"),
    ("common.relatedTerms", "Related Terms"),
    ("common.contents", "Contents"),
    ("common.assets", "Assets"),
    ("common.members", "Members"),
    ("common.ownerOf", "Owner Of"),
    ("common.runs", "Runs"),
    ("common.models", "Models"),
    ("common.relationships", "Relationships"),
];

/// A loaded set of translations for one locale.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Empty catalog; every key translates to itself.
    pub fn new(locale: &str) -> Self {
        Self {
            locale: resolve_locale(locale),
            messages: HashMap::new(),
        }
    }

    /// The built-in English strings.
    pub fn english() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            messages: ENGLISH
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Parses a JSON catalog. Nested objects flatten to dotted keys, so
    /// `{"common": {"datasets": "Conjuntos"}}` defines `common.datasets`.
    pub fn from_json_str(locale: &str, json: &str) -> I18nResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value
            .as_object()
            .ok_or_else(|| I18nError::Shape("top level must be an object".into()))?;

        let mut catalog = Self::new(locale);
        flatten_into(&mut catalog.messages, "", object)?;
        Ok(catalog)
    }

    /// Loads a JSON catalog from disk.
    pub fn from_path(locale: &str, path: &Path) -> I18nResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(locale, &contents)?;
        info!(
            locale = %catalog.locale,
            messages = catalog.len(),
            "Loaded message catalog from {:?}",
            path
        );
        Ok(catalog)
    }

    /// Fills keys missing from `self` with entries from `fallback`.
    #[must_use]
    pub fn with_fallback(mut self, fallback: &MessageCatalog) -> Self {
        for (key, text) in &fallback.messages {
            self.messages
                .entry(key.clone())
                .or_insert_with(|| text.clone());
        }
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translate for MessageCatalog {
    fn translate(&self, key: &str) -> String {
        match self.messages.get(key) {
            Some(text) => text.clone(),
            None => {
                debug!(locale = %self.locale, key, "Missing translation");
                key.to_string()
            }
        }
    }
}

fn flatten_into(
    out: &mut HashMap<String, String>,
    prefix: &str,
    object: &serde_json::Map<String, serde_json::Value>,
) -> I18nResult<()> {
    for (key, value) in object {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            serde_json::Value::String(text) => {
                out.insert(full, text.clone());
            }
            serde_json::Value::Object(nested) => flatten_into(out, &full, nested)?,
            other => {
                return Err(I18nError::Shape(format!(
                    "value for '{full}' must be a string or object, got {other}"
                )));
            }
        }
    }
    Ok(())
}
