//! Extraction of the fields shared by most entity kinds.
//!
//! Field paths follow the GraphQL response shapes: `properties`,
//! `editableProperties`, `ownership.owners[].owner`, `domain.domain`,
//! `platform`, `deprecation`, `subTypes`, `parentNodes`.

use crate::EntityData;
use catalog_types::{EntityType, Urn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type-independent view of an entity, used by sidebars and headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericEntityProperties {
    pub urn: Urn,
    pub entity_type: EntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub owners: Vec<Urn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default)]
    pub custom_properties: BTreeMap<String, String>,
    #[serde(default)]
    pub deprecated: bool,
}

impl GenericEntityProperties {
    pub fn from_entity(entity: &EntityData) -> Self {
        Self {
            urn: entity.urn.clone(),
            entity_type: entity.entity_type,
            name: entity
                .first_str(&["/properties/name", "/name"])
                .map(str::to_string),
            description: entity.description(),
            owners: entity.owner_urns(),
            domain: entity.domain_name(),
            platform: entity.platform_name(),
            custom_properties: entity.custom_properties(),
            deprecated: entity.is_deprecated(),
        }
    }
}

impl EntityData {
    /// User-edited description first, then the ingested one.
    pub fn description(&self) -> Option<String> {
        self.first_str(&[
            "/editableProperties/description",
            "/properties/description",
            "/description",
        ])
        .map(str::to_string)
    }

    /// Owner URNs. Entries that are malformed are skipped.
    pub fn owner_urns(&self) -> Vec<Urn> {
        self.get_array("/ownership/owners")
            .unwrap_or_default()
            .iter()
            .filter_map(|o| o.pointer("/owner/urn").and_then(|v| v.as_str()))
            .filter_map(|s| Urn::parse(s).ok())
            .collect()
    }

    pub fn domain_name(&self) -> Option<String> {
        self.first_str(&["/domain/domain/properties/name", "/domain/domain/urn"])
            .map(str::to_string)
    }

    pub fn platform_name(&self) -> Option<String> {
        self.first_str(&["/platform/properties/displayName", "/platform/name"])
            .map(str::to_string)
    }

    pub fn platform_logo_url(&self) -> Option<String> {
        self.get_str("/platform/properties/logoUrl")
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn is_deprecated(&self) -> bool {
        self.get_bool("/deprecation/deprecated").unwrap_or(false)
    }

    /// The most specific sub type, e.g. "View" for a dataset.
    pub fn subtype(&self) -> Option<String> {
        self.get_array("/subTypes/typeNames")
            .and_then(|names| names.first())
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    /// Names of parent glossary nodes, nearest first.
    pub fn parent_node_names(&self) -> Vec<String> {
        self.get_array("/parentNodes/nodes")
            .unwrap_or_default()
            .iter()
            .filter_map(|n| {
                n.pointer("/properties/name")
                    .or_else(|| n.pointer("/urn"))
                    .and_then(|v| v.as_str())
            })
            .map(str::to_string)
            .collect()
    }

    pub fn custom_properties(&self) -> BTreeMap<String, String> {
        self.get_array("/properties/customProperties")
            .unwrap_or_default()
            .iter()
            .filter_map(|p| {
                let key = p.get("key")?.as_str()?;
                let value = p.get("value").and_then(|v| v.as_str()).unwrap_or_default();
                Some((key.to_string(), value.to_string()))
            })
            .collect()
    }
}
