use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, EntityMenuItem, Icon, IconStyle, Preview, PreviewType,
    ProfileLayout, ProfileTab, SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Term groups: folders of the business glossary.
pub struct GlossaryNodeEntity {
    translator: Arc<dyn Translate>,
}

impl GlossaryNodeEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for GlossaryNodeEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::GlossaryNode
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("folder-outlined", "folder-filled", "#B37FEB", font_size, style, color)
    }

    // Reached by navigating the glossary tree, not through search.
    fn is_search_enabled(&self) -> bool {
        false
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn path_name(&self) -> &'static str {
        "glossaryNode"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.termGroup")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.termGroups")
    }

    fn custom_card_url_path(&self) -> Option<&'static str> {
        Some("/glossary")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::GlossaryNode)
            .tab(ProfileTab::new(t.translate("common.contents"), TabKind::Contents))
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .sidebar([SidebarSection::About, SidebarSection::Owners { hide_owner_type: false }])
            .dropdown([
                EntityMenuItem::AddTerm,
                EntityMenuItem::AddTermGroup,
                EntityMenuItem::Move,
                EntityMenuItem::Delete,
            ])
            .name_editable()
            .hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        let mut preview = self.base_preview(preview_type, data);
        preview.parent_nodes = data.parent_node_names();
        preview
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name", "/name"])
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::from([
            Capability::Owners,
            Capability::Deprecation,
            Capability::SoftDelete,
        ])
    }
}
