use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, GenericEntityProperties, Icon, IconStyle, Preview, PreviewType,
    ProfileLayout, SearchResult,
};
use catalog_types::{CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Placeholder for entities the viewer is not allowed to see.
///
/// Nothing from the payload is shown: the name is a fixed label and all
/// descriptive fields are dropped.
pub struct RestrictedEntity {
    translator: Arc<dyn Translate>,
}

impl RestrictedEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for RestrictedEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::Restricted
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("lock-outlined", "lock-filled", "#8C8C8C", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        false
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn autocomplete_field_name(&self) -> Option<&'static str> {
        None
    }

    fn path_name(&self) -> &'static str {
        "restricted"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.restricted")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.restrictedAssets")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        ProfileLayout::new(urn.clone(), EntityType::Restricted).hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        Preview {
            preview_type,
            entity_type: EntityType::Restricted,
            urn: data.urn.clone(),
            url: self.entity_url(&data.urn),
            name: self.display_name(data),
            description: None,
            subtype: None,
            owners: Vec::new(),
            domain: None,
            platform: None,
            logo_url: None,
            parent_nodes: Vec::new(),
            deprecated: false,
            matched_fields: Vec::new(),
        }
    }

    // Matched fields quote the hidden payload, so they are dropped.
    fn render_search(&self, result: &SearchResult) -> Preview {
        self.render_preview(PreviewType::Search, &result.entity)
    }

    fn display_name(&self, _data: &EntityData) -> String {
        self.translator.translate("common.restricted")
    }

    fn generic_properties(&self, data: &EntityData) -> GenericEntityProperties {
        GenericEntityProperties {
            urn: data.urn.clone(),
            entity_type: EntityType::Restricted,
            name: Some(self.display_name(data)),
            description: None,
            owners: Vec::new(),
            domain: None,
            platform: None,
            custom_properties: Default::default(),
            deprecated: false,
        }
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::new()
    }
}
