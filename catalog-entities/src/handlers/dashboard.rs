use crate::shared::{asset_sidebar, name_or_urn, ASSET_CAPABILITIES, ASSET_DROPDOWN};
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

pub struct DashboardEntity {
    translator: Arc<dyn Translate>,
}

impl DashboardEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for DashboardEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::Dashboard
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("layout-outlined", "layout-filled", "#1890FF", font_size, style, color)
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
        "dashboard"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.dashboard")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.dashboards")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::Dashboard)
            .tab(ProfileTab::when_present(t.translate("common.charts"), TabKind::Charts, "/charts/total"))
            .tab(ProfileTab::when_present(t.translate("common.datasets"), TabKind::RelatedEntities, "/datasets/total"))
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.lineage"), TabKind::Lineage))
            .tab(ProfileTab::new(t.translate("common.properties"), TabKind::Properties))
            .sidebar(asset_sidebar())
            .dropdown(ASSET_DROPDOWN)
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name", "/dashboardId"])
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
