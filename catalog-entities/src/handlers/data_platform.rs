//! Data platforms (Hive, Snowflake, ...) and their named instances.

use crate::shared::name_or_urn;
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout,
};
use catalog_types::{CapabilitySet, EntityType, Urn};
use std::sync::Arc;

pub struct DataPlatformEntity {
    translator: Arc<dyn Translate>,
}

impl DataPlatformEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for DataPlatformEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::DataPlatform
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("database-outlined", "database-filled", "#BFBFBF", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        false
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn autocomplete_field_name(&self) -> Option<&'static str> {
        None
    }

    fn path_name(&self) -> &'static str {
        "platform"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.platform")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.platforms")
    }

    // Platforms have no profile page of their own.
    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        ProfileLayout::new(urn.clone(), EntityType::DataPlatform).hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        let mut preview = self.base_preview(preview_type, data);
        preview.logo_url = self.platform_logo_url(data);
        preview
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/displayName", "/name"])
    }

    fn platform_logo_url(&self, data: &EntityData) -> Option<String> {
        data.get_str("/properties/logoUrl")
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::new()
    }
}

pub struct DataPlatformInstanceEntity {
    translator: Arc<dyn Translate>,
}

impl DataPlatformInstanceEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for DataPlatformInstanceEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::DataPlatformInstance
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("cloud-server-outlined", "cloud-server-outlined", "#BFBFBF", font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        false
    }

    fn is_browse_enabled(&self) -> bool {
        false
    }

    fn autocomplete_field_name(&self) -> Option<&'static str> {
        None
    }

    fn path_name(&self) -> &'static str {
        "dataPlatformInstance"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.platformInstance")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.platformInstances")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        ProfileLayout::new(urn.clone(), EntityType::DataPlatformInstance).hide_browse_bar()
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    /// `<platform> - <instance id>`, or just the instance id.
    fn display_name(&self, data: &EntityData) -> String {
        match (data.platform_name(), data.get_str("/instanceId")) {
            (Some(platform), Some(id)) => format!("{platform} - {id}"),
            (None, Some(id)) => id.to_string(),
            _ => name_or_urn(data, &["/properties/name"]),
        }
    }

    fn platform_logo_url(&self, data: &EntityData) -> Option<String> {
        data.platform_logo_url()
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        CapabilitySet::new()
    }
}
