use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, EntityMenuItem, Icon, IconStyle, Preview, PreviewType,
    ProfileLayout, ProfileTab, SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Business attributes: reusable column definitions.
pub struct BusinessAttributeEntity {
    translator: Arc<dyn Translate>,
}

impl BusinessAttributeEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for BusinessAttributeEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::BusinessAttribute
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("global-outlined", "global-outlined", "#8C8C8C", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn path_name(&self) -> &'static str {
        "business-attribute"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.businessAttribute")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.businessAttributes")
    }

    fn custom_card_url_path(&self) -> Option<&'static str> {
        Some("/business-attribute")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::BusinessAttribute)
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.relatedEntities"), TabKind::RelatedEntities))
            .tab(ProfileTab::new(t.translate("common.properties"), TabKind::Properties))
            .sidebar([
                SidebarSection::About,
                SidebarSection::Owners { hide_owner_type: false },
                SidebarSection::Tags,
                SidebarSection::GlossaryTerms,
            ])
            .dropdown([EntityMenuItem::Delete])
            .name_editable()
            .hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name", "/name"])
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::from([
            Capability::Owners,
            Capability::GlossaryTerms,
            Capability::Tags,
        ])
    }
}
