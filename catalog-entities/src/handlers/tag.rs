use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

pub struct TagEntity {
    translator: Arc<dyn Translate>,
}

impl TagEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for TagEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::Tag
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("tag-outlined", "tag-filled", "#FA8C16", font_size, style, color)
    }

    // Tags are reached through the entities they label.
    fn is_search_enabled(&self) -> bool {
        false
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn path_name(&self) -> &'static str {
        "tag"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.tag")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.tags")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        ProfileLayout::new(urn.clone(), EntityType::Tag)
            .tab(ProfileTab::new(self.translator.translate("common.assets"), TabKind::Assets))
            .sidebar([SidebarSection::About, SidebarSection::Owners { hide_owner_type: false }])
            .hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        let mut preview = self.base_preview(preview_type, data);
        preview.domain = None;
        preview
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name", "/name"])
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::from([Capability::Owners])
    }
}
