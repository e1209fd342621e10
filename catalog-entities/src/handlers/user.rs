use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Users (`CorpUser`).
pub struct UserEntity {
    translator: Arc<dyn Translate>,
}

impl UserEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for UserEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::CorpUser
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("user-outlined", "user-filled", "#1890FF", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn autocomplete_field_name(&self) -> Option<&'static str> {
        Some("username")
    }

    fn path_name(&self) -> &'static str {
        "user"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.user")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.users")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::CorpUser)
            .tab(ProfileTab::new(t.translate("common.ownerOf"), TabKind::Ownership))
            .tab(ProfileTab::new(t.translate("common.groups"), TabKind::Groups))
            .sidebar([SidebarSection::About, SidebarSection::Roles])
            .hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        let mut preview = self.base_preview(preview_type, data);
        preview.description = data
            .first_str(&["/editableProperties/title", "/properties/title", "/info/title"])
            .map(str::to_string);
        preview
    }

    /// Edited display name, then ingested display/full name, then username.
    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(
            data,
            &[
                "/editableProperties/displayName",
                "/properties/displayName",
                "/properties/fullName",
                "/info/displayName",
                "/info/fullName",
                "/username",
            ],
        )
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::from([Capability::Roles])
    }
}
