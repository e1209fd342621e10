//! Pieces shared by several handlers.

use catalog_model::{EntityData, EntityMenuItem, SidebarSection};
use catalog_types::Capability;

/// Capabilities of data assets that can be owned, tagged and grouped.
pub(crate) const ASSET_CAPABILITIES: [Capability; 7] = [
    Capability::Owners,
    Capability::GlossaryTerms,
    Capability::Tags,
    Capability::Domains,
    Capability::Deprecation,
    Capability::SoftDelete,
    Capability::DataProducts,
];

/// Sidebar of a data asset profile.
pub(crate) fn asset_sidebar() -> [SidebarSection; 6] {
    [
        SidebarSection::About,
        SidebarSection::Owners { hide_owner_type: false },
        SidebarSection::Domain,
        SidebarSection::DataProduct,
        SidebarSection::Tags,
        SidebarSection::GlossaryTerms,
    ]
}

pub(crate) const ASSET_DROPDOWN: [EntityMenuItem; 4] = [
    EntityMenuItem::UpdateDeprecation,
    EntityMenuItem::Share,
    EntityMenuItem::CopyUrn,
    EntityMenuItem::External,
];

/// First non-empty string among `pointers`, or the URN.
pub(crate) fn name_or_urn(data: &EntityData, pointers: &[&str]) -> String {
    data.first_str(pointers)
        .map_or_else(|| data.urn.to_string(), str::to_string)
}
