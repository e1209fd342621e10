//! Machine-learning entities: features, primary keys, feature tables,
//! models and model groups.

use crate::shared::{asset_sidebar, name_or_urn, ASSET_CAPABILITIES, ASSET_DROPDOWN};
use catalog_i18n::Translate;
use catalog_model::{
    EntityData, EntityHandler, Icon, IconStyle, Preview, PreviewType, ProfileLayout, ProfileTab,
    TabKind,
};
use catalog_types::{Capability, CapabilitySet, EntityType, Urn};
use std::sync::Arc;

const ML_ACCENT: &str = "#9633b9";

fn ml_capabilities() -> CapabilitySet {
    ASSET_CAPABILITIES
        .into_iter()
        .chain([Capability::Lineage])
        .collect()
}

// ── MLFeature ────────────────────────────────────────────────────

pub struct MlFeatureEntity {
    translator: Arc<dyn Translate>,
}

impl MlFeatureEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for MlFeatureEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::MlFeature
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("dot-chart-outlined", "dot-chart-outlined", ML_ACCENT, font_size, style, color)
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
        "features"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.feature")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.features")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::MlFeature)
            .tab(ProfileTab::new(t.translate("common.featureTables"), TabKind::RelatedEntities))
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.lineage"), TabKind::Lineage))
            .sidebar(asset_sidebar())
            .dropdown(ASSET_DROPDOWN)
    }

    /// Features are previewed with the platform of their first feature table.
    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        let mut preview = self.base_preview(preview_type, data);
        if preview.platform.is_none() {
            preview.platform = data
                .first_str(&["/featureTables/relationships/0/entity/platform/name"])
                .map(str::to_string);
        }
        preview
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/name", "/properties/name"])
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        ml_capabilities()
    }
}

// ── MLPrimaryKey ─────────────────────────────────────────────────

pub struct MlPrimaryKeyEntity {
    translator: Arc<dyn Translate>,
}

impl MlPrimaryKeyEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for MlPrimaryKeyEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::MlPrimaryKey
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("key-outlined", "key-outlined", ML_ACCENT, font_size, style, color)
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
        "mlPrimaryKeys"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.primaryKey")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.primaryKeys")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::MlPrimaryKey)
            .tab(ProfileTab::new(t.translate("common.featureTables"), TabKind::RelatedEntities))
            .tab(ProfileTab::new(t.translate("common.lineage"), TabKind::Lineage))
            .sidebar(asset_sidebar())
            .dropdown(ASSET_DROPDOWN)
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/name", "/properties/name"])
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        ml_capabilities()
    }
}

// ── MLFeatureTable ───────────────────────────────────────────────

pub struct MlFeatureTableEntity {
    translator: Arc<dyn Translate>,
}

impl MlFeatureTableEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for MlFeatureTableEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::MlFeatureTable
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("table-outlined", "table-outlined", ML_ACCENT, font_size, style, color)
    }

    fn is_search_enabled(&self) -> bool {
        true
    }

    fn is_browse_enabled(&self) -> bool {
        true
    }

    fn path_name(&self) -> &'static str {
        "featureTables"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.featureTable")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.featureTables")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::MlFeatureTable)
            .tab(ProfileTab::new(t.translate("common.features"), TabKind::Features))
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.properties"), TabKind::Properties))
            .sidebar(asset_sidebar())
            .dropdown(ASSET_DROPDOWN)
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/name", "/properties/name"])
    }

    fn platform_logo_url(&self, data: &EntityData) -> Option<String> {
        data.platform_logo_url()
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        ASSET_CAPABILITIES.into()
    }
}

// ── MLModel ──────────────────────────────────────────────────────

pub struct MlModelEntity {
    translator: Arc<dyn Translate>,
}

impl MlModelEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for MlModelEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::MlModel
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("code-sandbox-outlined", "code-sandbox-outlined", ML_ACCENT, font_size, style, color)
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
        "mlModels"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.mlModel")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.mlModels")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::MlModel)
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.features"), TabKind::Features))
            .tab(ProfileTab::new(t.translate("common.lineage"), TabKind::Lineage))
            .tab(ProfileTab::new(t.translate("common.properties"), TabKind::Properties))
            .sidebar(asset_sidebar())
            .dropdown(ASSET_DROPDOWN)
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name", "/name"])
    }

    fn platform_logo_url(&self, data: &EntityData) -> Option<String> {
        data.platform_logo_url()
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        ml_capabilities()
    }
}

// ── MLModelGroup ─────────────────────────────────────────────────

pub struct MlModelGroupEntity {
    translator: Arc<dyn Translate>,
}

impl MlModelGroupEntity {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl EntityHandler for MlModelGroupEntity {
    fn entity_type(&self) -> EntityType {
        EntityType::MlModelGroup
    }

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon {
        Icon::styled("gold-outlined", "gold-outlined", ML_ACCENT, font_size, style, color)
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
        "mlModelGroup"
    }

    fn entity_name(&self) -> String {
        self.translator.translate("common.mlModelGroup")
    }

    fn collection_name(&self) -> String {
        self.translator.translate("common.mlModelGroups")
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout {
        let t = &self.translator;
        ProfileLayout::new(urn.clone(), EntityType::MlModelGroup)
            .tab(ProfileTab::new(t.translate("common.models"), TabKind::Models))
            .tab(ProfileTab::new(t.translate("common.documentation"), TabKind::Documentation))
            .tab(ProfileTab::new(t.translate("common.lineage"), TabKind::Lineage))
            .sidebar(asset_sidebar())
            .dropdown(ASSET_DROPDOWN)
    }

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        self.base_preview(preview_type, data)
    }

    fn display_name(&self, data: &EntityData) -> String {
        name_or_urn(data, &["/properties/name", "/name"])
    }

    fn platform_logo_url(&self, data: &EntityData) -> Option<String> {
        data.platform_logo_url()
    }

    fn supported_capabilities(&self) -> CapabilitySet {
        ml_capabilities()
    }
}
