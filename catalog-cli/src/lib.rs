//! Report types and rendering for the `catalog` binary.

use anyhow::{Context, Result};
use catalog_model::{EntityData, PreviewType, SearchResult};
use catalog_registry::EntityRegistry;
use catalog_types::{Capability, EntityType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row of `catalog types`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TypeSummary {
    pub entity_type: EntityType,
    pub path_name: String,
    pub entity_name: String,
    pub search_enabled: bool,
    pub browse_enabled: bool,
    pub lineage_enabled: bool,
    pub capabilities: Vec<Capability>,
}

/// Which descriptor `catalog render` produces.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    Search,
    #[default]
    Preview,
    Profile,
}

/// Summaries of every registered type, in registration order.
pub fn summarize_types(registry: &EntityRegistry) -> Vec<TypeSummary> {
    registry
        .handlers()
        .map(|h| TypeSummary {
            entity_type: h.entity_type(),
            path_name: h.path_name().to_string(),
            entity_name: h.entity_name(),
            search_enabled: h.is_search_enabled(),
            browse_enabled: h.is_browse_enabled(),
            lineage_enabled: h.is_lineage_enabled(),
            capabilities: h.supported_capabilities().sorted(),
        })
        .collect()
}

/// Reads a GraphQL entity object from `path`.
///
/// The file may hold the bare entity or a search row with `entity` and
/// `matchedFields`. `entity_type` is used when the entity has no `type`.
pub fn load_search_result(path: &Path, entity_type: Option<EntityType>) -> Result<SearchResult> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read entity file {:?}", path))?;
    let value: serde_json::Value =
        serde_json::from_str(&contents).context("Entity file is not valid JSON")?;
    parse_search_result(value, entity_type)
}

pub fn parse_search_result(
    value: serde_json::Value,
    entity_type: Option<EntityType>,
) -> Result<SearchResult> {
    if value.get("entity").is_some() {
        let mut row = value;
        let entity = EntityData::from_graphql_as(row["entity"].take(), entity_type)
            .context("Invalid entity in search row")?;
        let matched_fields = match row.get_mut("matchedFields") {
            Some(fields) => serde_json::from_value(fields.take())
                .context("Invalid matchedFields in search row")?,
            None => Vec::new(),
        };
        return Ok(SearchResult {
            entity,
            matched_fields,
        });
    }
    let entity = EntityData::from_graphql_as(value, entity_type).context("Invalid entity")?;
    Ok(SearchResult::new(entity))
}

/// Renders `result` through its type's handler.
///
/// `entity_type` overrides the type named in the payload.
pub fn render(
    registry: &EntityRegistry,
    entity_type: Option<EntityType>,
    view: View,
    result: &SearchResult,
) -> Result<serde_json::Value> {
    let entity_type = entity_type.unwrap_or(result.entity.entity_type);
    let value = match view {
        View::Search => serde_json::to_value(registry.render_search_result(entity_type, result)?)?,
        View::Preview => serde_json::to_value(registry.render_preview(
            entity_type,
            PreviewType::Preview,
            &result.entity,
        )?)?,
        View::Profile => {
            let layout = registry.render_profile(entity_type, &result.entity.urn)?;
            let visible: Vec<_> = layout.visible_tabs(&result.entity).cloned().collect();
            let mut value = serde_json::to_value(&layout)?;
            value["tabs"] = serde_json::to_value(visible)?;
            value
        }
    };
    Ok(value)
}
