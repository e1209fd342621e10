use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityActionItem, EntityData, EntityHandler, EntityMenuItem, GenericEntityProperties, Icon,
    IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab, SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Glossary terms: business vocabulary attached to data assets.
pub struct GlossaryTermEntity {
    translator: Arc<dyn Translate>,
}

impl GlossaryTermEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for GlossaryTermEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::GlossaryTerm
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("book-outlined", "book-filled", "#B37FEB", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        true
    }

    fn path_name(&self) -> &'static str {
        "glossaryTerm"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.glossaryTerm")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.glossaryTerms")
    }

    fn custom_card_url_path(&self) -> Option<&'static str> {
        Some("/glossary")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::GlossaryTerm)
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.relatedEntities"), TabKind::RelatedEntities))
            .tab(ProfileTab::when_present(t.translate("common.schema"), TabKind::Schema, "/schemaMetadata"))
            .tab(ProfileTab::new(t.translate("common.relatedTerms"), TabKind::RelatedTerms))
            .tab(ProfileTab::new(t.translate("common.properties"), TabKind::Properties))
            .sidebar([
                SidebarSection::About,
                SidebarSection::Owners { hide_owner_type: false },
                SidebarSection::Domain,
            ])
            .actions([EntityActionItem::BatchAddGlossaryTerm])
            .dropdown([
                EntityMenuItem::UpdateDeprecation,
                EntityMenuItem::Clone,
                EntityMenuItem::Move,
                EntityMenuItem::Delete,
            ])
            .name_editable()
            .hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        let mut preview = self.base_preview(preview_type, data);
        preview.parent_nodes = data.parent_node_names();
        preview.platform = None;
        preview
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name", "/name"])
    }

    fn generic_properties(&self, data: &EntityData) -> GenericEntityProperties {
        let mut props = GenericEntityProperties::from_entity(data);
        props.name = Some(self.display_name(data));
        props.platform = None;
        props
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::from([
            Capability::Owners,
            Capability::Deprecation,
            Capability::SoftDelete,
        ])
    }
}
