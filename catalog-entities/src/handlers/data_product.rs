use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityActionItem, EntityData, EntityHandler, EntityMenuItem, Icon, IconStyle, Preview,
    PreviewType, ProfileLayout, ProfileTab, SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Data products: curated bundles of assets inside a domain.
pub struct DataProductEntity {
    translator: Arc<dyn Translate>,
}

impl DataProductEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for DataProductEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::DataProduct
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("file-done-outlined", "file-done-outlined", "#13C2C2", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn path_name(&self) -> &'static str {
        "dataProduct"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.dataProduct")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.dataProducts")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::DataProduct)
            .tab(ProfileTab::new(t.translate("common.assets"), TabKind::Assets))
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.properties"), TabKind::Properties))
            .sidebar([
                SidebarSection::About,
                SidebarSection::Owners { hide_owner_type: false },
                SidebarSection::Domain,
                SidebarSection::Tags,
                SidebarSection::GlossaryTerms,
            ])
            .actions([EntityActionItem::BatchAddDataProduct])
            .dropdown([EntityMenuItem::Share, EntityMenuItem::Delete])
            .hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name"])
    }

    // Products cannot be nested in other products.
    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::from([
            Capability::Owners,
            Capability::GlossaryTerms,
            Capability::Tags,
            Capability::Domains,
            Capability::Deprecation,
            Capability::SoftDelete,
        ])
    }
}
