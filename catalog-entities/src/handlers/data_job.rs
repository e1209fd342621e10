use crate::shared::{asset_sidebar, name_or_urn, ASSET_CAPABILITIES, ASSET_DROPDOWN};
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Tasks: single steps of a pipeline.
pub struct DataJobEntity {
    translator: Arc<dyn Translate>,
}

impl DataJobEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for DataJobEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::DataJob
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("console-sql-outlined", "console-sql-outlined", "#B37FEB", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn is_lineage_enabled(&self) -> bool {
        true
    }

    fn path_name(&self) -> &'static str {
        "tasks"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.task")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.tasks")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::DataJob)
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.properties"), TabKind::Properties))
            .tab(ProfileTab::new(t.translate("common.lineage"), TabKind::Lineage))
            .tab(ProfileTab::when_present(t.translate("common.runs"), TabKind::Runs, "/runs/total"))
            .sidebar(asset_sidebar())
            .dropdown(ASSET_DROPDOWN)
    }

    /// Tasks inherit their platform from the parent pipeline.
    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        let mut preview = self.base_preview(preview_type, data);
        if preview.platform.is_none() {
            preview.platform = data
                .first_str(&["/dataFlow/platform/properties/displayName", "/dataFlow/platform/name"])
                .map(str::to_string);
        }
        preview
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name", "/jobId"])
    }

    fn platform_logo_url(&self, data: &EntityData) -> Option<String> {
        data.platform_logo_url().or_else(|| {
            data.get_str("/dataFlow/platform/properties/logoUrl")
                .map(str::to_string)
        })
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        ASSET_CAPABILITIES
            .into_iter()
            .chain([Capability::Lineage, Capability::Health])
            .collect()
    }
}
