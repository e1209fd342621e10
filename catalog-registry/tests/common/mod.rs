//! Shared test helpers for registry tests.

#![allow(dead_code)]

use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};

/// A handler whose behavior is fully described by its fields.
pub struct FixtureHandler {
    pub entity_type: EntityType,
    pub capabilities: Vec<Capability>,
    pub searchable: bool,
    pub browsable: bool,
    pub lineage: bool,
    pub path: &'static str,
}

impl FixtureHandler {
    pub fn new(entity_type: EntityType, capabilities: &[Capability]) -> Self {
        Self {
            entity_type,
            capabilities: capabilities.to_vec(),
            searchable: true,
            browsable: false,
            lineage: false,
            path: "fixture",
        }
    }

    pub fn path(mut self, path: &'static str) -> Self {
        self.path = path;
        self
    }
}

impl EntityHandler for FixtureHandler {
    fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("fixture", "fixture-filled", "#000000", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        self.searchable
    }

    fn is_browse_enabled(&self) -> bool {
        self.browsable
    }

    fn is_lineage_enabled(&self) -> bool {
        self.lineage
    }

    fn path_name(&self) -> &'static str {
        self.path
    }

    fn entity_name(&self) -> String {
        format!("{} entity", self.entity_type)
    }

    fn collection_name(&self) -> String {
        format!("{} entities", self.entity_type)
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        ProfileLayout::new(urn.clone(), self.entity_type)
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        data.get_str("/name")
            .map_or_else(|| data.urn.to_string(), str::to_string)
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        self.capabilities.iter().copied().collect()
    }
}
