use crate::shared::{asset_sidebar, name_or_urn, ASSET_CAPABILITIES, ASSET_DROPDOWN};
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    SidebarSection, TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Datasets: tables, views, topics and files.
pub struct DatasetEntity {
    translator: Arc<dyn Translate>,
}

impl DatasetEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for DatasetEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::Dataset
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("database-outlined", "database-filled", "#2F54EB", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        true
    }

    fn is_lineage_enabled(&self) -> bool {
        true
    }

    fn path_name(&self) -> &'static str {
        "dataset"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.dataset")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.datasets")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::Dataset)
            .tab(ProfileTab::new(t.translate("common.schema"), TabKind::Schema))
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.lineage"), TabKind::Lineage))
            .tab(ProfileTab::new(t.translate("common.properties"), TabKind::Properties))
            .tab(ProfileTab::when_present(t.translate("common.queries"), TabKind::Queries, "/usageStats"))
            .tab(ProfileTab::when_present(t.translate("common.stats"), TabKind::Stats, "/datasetProfiles/0"))
            .sidebar(asset_sidebar())
            .sidebar([SidebarSection::LastIngested])
            .dropdown(ASSET_DROPDOWN)
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    /// User-edited name first, then the ingested one.
    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/editableProperties/name", "/properties/name", "/name"])
    }

    fn platform_logo_url(&self, data: &EntityData) -> Option<String> {
        data.platform_logo_url()
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        ASSET_CAPABILITIES
            .into_iter()
            .chain([Capability::Lineage, Capability::Health, Capability::Test])
            .collect()
    }
}
