use crate::{
    EntityData, GenericEntityProperties, Icon, IconStyle, Preview, PreviewType, ProfileLayout,
    SearchResult,
};
use catalog_types::{CapabilitySet, EntityType, Urn};

/// Per-type rendering and metadata logic.
///
/// One implementation exists for every [`EntityType`]. Generic UI code
/// (search result lists, sidebars, profile pages) looks the handler up by
/// type and delegates to it instead of branching on the type itself.
///
/// Implementations must be pure: every method is a function of `self` and
/// its arguments. Fetching the entity is the caller's job. Partial data must
/// degrade the output (omit the field) rather than fail.
pub trait EntityHandler: Send + Sync {
    /// The type this handler is registered under.
    fn entity_type(&self) -> EntityType;

    fn icon(&self, font_size: u16, style: IconStyle, color: Option<&str>) -> Icon;

    fn is_search_enabled(&self) -> bool;

    fn is_browse_enabled(&self) -> bool;

    fn is_lineage_enabled(&self) -> bool {
        false
    }

    /// Field the search bar autocompletes on.
    fn autocomplete_field_name(&self) -> Option<&'static str> {
        Some("name")
    }

    /// URL path segment of the profile page (`/dataset/<urn>`).
    fn path_name(&self) -> &'static str;

    /// Localized singular name ("Dataset").
    fn entity_name(&self) -> String;

    /// Localized plural name ("Datasets").
    fn collection_name(&self) -> String;

    /// Overrides the card link target in home-page listings.
    fn custom_card_url_path(&self) -> Option<&'static str> {
        None
    }

    fn render_profile(&self, urn: &Urn) -> ProfileLayout;

    fn render_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview;

    /// Search rows default to the search-flavored preview carrying the matched fields.
    fn render_search(&self, result: &SearchResult) -> Preview {
        let mut preview = self.render_preview(PreviewType::Search, &result.entity);
        preview.matched_fields = result.matched_fields.clone();
        preview
    }

    /// Human-readable name, falling back to the URN when nothing better exists.
    fn display_name(&self, data: &EntityData) -> String;

    fn platform_logo_url(&self, data: &EntityData) -> Option<String> {
        let _ = data;
        None
    }

    fn generic_properties(&self, data: &EntityData) -> GenericEntityProperties {
        let mut props = GenericEntityProperties::from_entity(data);
        props.name = Some(self.display_name(data));
        props
    }

    fn supported_capabilities(&self) -> CapabilitySet;

    /// Profile URL of an entity of this type.
    fn entity_url(&self, urn: &Urn) -> String {
        format!("/{}/{}", self.path_name(), urn)
    }

    /// Preview with the fields every entity kind shares filled in.
    fn base_preview(&self, preview_type: PreviewType, data: &EntityData) -> Preview {
        Preview {
            preview_type,
            entity_type: self.entity_type(),
            urn: data.urn.clone(),
            url: self.entity_url(&data.urn),
            name: self.display_name(data),
            description: data.description(),
            subtype: data.subtype(),
            owners: data.owner_urns(),
            domain: data.domain_name(),
            platform: data.platform_name(),
            logo_url: self.platform_logo_url(data),
            parent_nodes: Vec::new(),
            deprecated: data.is_deprecated(),
            matched_fields: Vec::new(),
        }
    }
}
