use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityActionItem, EntityData, EntityHandler, EntityMenuItem, Icon, IconStyle, Preview,
    PreviewType, ProfileLayout, ProfileTab, SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Domains: business areas that group assets.
pub struct DomainEntity {
    translator: Arc<dyn Translate>,
}

impl DomainEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for DomainEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::Domain
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("appstore-outlined", "appstore-filled", "#722ED1", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn path_name(&self) -> &'static str {
        "domain"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.domain")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.domains")
    }

    fn custom_card_url_path(&self) -> Option<&'static str> {
        Some("/domains")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::Domain)
            .tab(ProfileTab::new(t.translate("common.assets"), TabKind::Assets))
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.dataProducts"), TabKind::DataProducts))
            .sidebar([SidebarSection::About, SidebarSection::Owners { hide_owner_type: false }])
            .actions([EntityActionItem::BatchAddDomain])
            .dropdown([EntityMenuItem::Move, EntityMenuItem::Delete])
            .name_editable()
            .hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        let mut preview = self.base_preview(preview_type, data);
        // A domain's own `domain` field is its parent, not an assignment.
        preview.domain = data
            .first_str(&["/parentDomains/domains/0/properties/name"])
            .map(str::to_string);
        preview
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name", "/id"])
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::from([Capability::Owners])
    }
}
