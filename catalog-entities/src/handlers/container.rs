use crate::shared::{asset_sidebar, name_or_urn, ASSET_CAPABILITIES, ASSET_DROPDOWN};
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    TabKind,
};
use catalog_types::{CapabilitySet, EntityType, Urn};
use std::sync::Arc;

/// Containers: databases, schemas, folders and projects.
pub struct ContainerEntity {
    translator: Arc<dyn Translate>,
}

impl ContainerEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for ContainerEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::Container
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("folder-outlined", "folder-filled", "#BFBFBF", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn path_name(&self) -> &'static str {
        "container"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.container")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.containers")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::Container)
            .tab(ProfileTab::new(t.translate("common.contents"), TabKind::Contents))
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.properties"), TabKind::Properties))
            .sidebar(asset_sidebar())
            .dropdown(ASSET_DROPDOWN)
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name"])
    }

    fn platform_logo_url(&self, data: &EntityData) -> Option<String> {
        data.platform_logo_url()
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        ASSET_CAPABILITIES.into()
    }
}
