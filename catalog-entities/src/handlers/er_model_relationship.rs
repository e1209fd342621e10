use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Entity-relationship links between two datasets.
pub struct ErModelRelationshipEntity {
    translator: Arc<dyn Translate>,
}

impl ErModelRelationshipEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for ErModelRelationshipEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::ErModelRelationship
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("apartment-outlined", "apartment-outlined", "#BFBFBF", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn path_name(&self) -> &'static str {
        "erModelRelationship"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.erModelRelationship")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.erModelRelationships")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::ErModelRelationship)
            .tab(ProfileTab::new(t.translate("common.relationships"), TabKind::Relationships))
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .sidebar([
                SidebarSection::About,
                SidebarSection::Owners { hide_owner_type: false },
                SidebarSection::Tags,
                SidebarSection::GlossaryTerms,
            ])
            .hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(
            data,
            &["/editableProperties/name", "/properties/name", "/id"],
        )
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::from([
            Capability::Owners,
            Capability::GlossaryTerms,
            Capability::Tags,
        ])
    }
}
