use catalog_types::{EntityType, Urn};
use serde::{Deserialize, Serialize};

/// An entity record as returned by the API.
///
/// The `data` field holds the type-specific GraphQL response object
/// (`properties`, `ownership`, `domain`, ...). Accessors never fail: a
/// missing or mistyped field reads as `None` so handlers can render a
/// degraded view instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityData {
    pub urn: Urn,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl EntityData {
    pub fn new(urn: Urn, entity_type: EntityType, data: serde_json::Value) -> Self {
        Self {
            urn,
            entity_type,
            data,
        }
    }

    /// Wraps a raw GraphQL entity object, reading `urn` and `type` from it.
    ///
    /// The whole object is kept as `data`, so pointers are relative to the
    /// entity itself (`/properties/name`).
    pub fn from_graphql(value: serde_json::Value) -> Result<Self, catalog_types::Error> {
        Self::from_graphql_as(value, None)
    }

    /// Like [`EntityData::from_graphql`], with `fallback_type` used when the
    /// object carries no `type` field. A `type` that is present still wins.
    pub fn from_graphql_as(
        value: serde_json::Value,
        fallback_type: Option<EntityType>,
    ) -> Result<Self, catalog_types::Error> {
        let urn = value
            .get("urn")
            .and_then(|v| v.as_str())
            .ok_or_else(|| catalog_types::Error::InvalidUrn("missing `urn` field".into()))
            .and_then(Urn::parse)?;
        let entity_type = match value.get("type").and_then(|v| v.as_str()) {
            Some(name) => name.parse::<EntityType>()?,
            None => fallback_type.ok_or_else(|| {
                catalog_types::Error::UnknownEntityType("missing `type` field".into())
            })?,
        };
        Ok(Self::new(urn, entity_type, value))
    }

    /// Extract a string value from `data` using a JSON pointer (e.g., "/properties/name").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.data.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract a boolean value from `data` using a JSON pointer.
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.data.pointer(pointer).and_then(|v| v.as_bool())
    }

    /// Extract a numeric value from `data` using a JSON pointer.
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.data.pointer(pointer).and_then(|v| v.as_f64())
    }

    /// Extract an array from `data` using a JSON pointer.
    pub fn get_array(&self, pointer: &str) -> Option<&[serde_json::Value]> {
        self.data
            .pointer(pointer)
            .and_then(|v| v.as_array())
            .map(Vec::as_slice)
    }

    /// Returns the first non-empty string found among `pointers`.
    pub fn first_str(&self, pointers: &[&str]) -> Option<&str> {
        pointers
            .iter()
            .filter_map(|p| self.get_str(p))
            .find(|s| !s.is_empty())
    }

    /// True when `pointer` resolves to a present, non-null value.
    pub fn has(&self, pointer: &str) -> bool {
        self.data.pointer(pointer).is_some_and(|v| !v.is_null())
    }
}

/// A field a search query matched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedField {
    pub name: String,
    pub value: String,
}

/// One row of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub entity: EntityData,
    #[serde(default)]
    pub matched_fields: Vec<MatchedField>,
}

impl SearchResult {
    pub fn new(entity: EntityData) -> Self {
        Self {
            entity,
            matched_fields: Vec::new(),
        }
    }
}
