use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    TabKind,
};
use catalog_types::{CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Access roles granted to users and groups.
pub struct RoleEntity {
    translator: Arc<dyn Translate>,
}

impl RoleEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for RoleEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::Role
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("tag-outlined", "tag-filled", "#BFBFBF", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        false
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn path_name(&self) -> &'static str {
        "role"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.role")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.roles")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::Role)
            .tab(ProfileTab::new(t.translate("common.users"), TabKind::Users))
            .tab(ProfileTab::new(t.translate("common.groups"), TabKind::Groups))
            .hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name", "/name"])
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::new()
    }
}
