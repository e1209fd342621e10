use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Individual dataset columns.
pub struct SchemaFieldEntity {
    translator: Arc<dyn Translate>,
}

impl SchemaFieldEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for SchemaFieldEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::SchemaField
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("pic-center-outlined", "pic-center-outlined", "#BFBFBF", font_size, style, color)
    }

    // Columns are found through their dataset.
    fn is_search_enabled(&self) -> bool {
        false
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn is_lineage_enabled(&self) -> bool {
        true
    }

    fn autocomplete_field_name(&self) -> Option<&'static str> {
        Some("fieldPath")
    }

    fn path_name(&self) -> &'static str {
        "schemaField"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.column")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.columns")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::SchemaField)
            .tab(ProfileTab::new(t.translate("common.properties"), TabKind::Properties))
            .tab(ProfileTab::new(t.translate("common.lineage"), TabKind::Lineage))
            .sidebar([SidebarSection::About, SidebarSection::Tags, SidebarSection::GlossaryTerms])
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        let mut preview = self.base_preview(preview_type, data);
        preview.description = data
            .first_str(&["/description", "/editableFieldInfo/description"])
            .map(str::to_string);
        preview
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/fieldPath"])
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::from([Capability::GlossaryTerms, Capability::Tags, Capability::Lineage])
    }
}
