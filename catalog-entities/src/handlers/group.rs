use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Groups (`CorpGroup`).
pub struct GroupEntity {
    translator: Arc<dyn Translate>,
}

impl GroupEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for GroupEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::CorpGroup
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("team-outlined", "team-outlined", "#1890FF", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn path_name(&self) -> &'static str {
        "group"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.group")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.groups")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::CorpGroup)
            .tab(ProfileTab::new(t.translate("common.members"), TabKind::Members))
            .tab(ProfileTab::new(t.translate("common.ownerOf"), TabKind::Ownership))
            .sidebar([
                SidebarSection::About,
                SidebarSection::Owners { hide_owner_type: true },
                SidebarSection::Roles,
            ])
            .hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(
            data,
            &["/properties/displayName", "/info/displayName", "/name"],
        )
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::from([Capability::Roles])
    }
}
