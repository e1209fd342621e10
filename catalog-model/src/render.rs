//! Render descriptors returned by entity handlers.
//!
//! These are plain data. The rendering layer maps each descriptor onto its
//! widget library; nothing here depends on how pixels are drawn.

use crate::{EntityData, MatchedField};
use catalog_types::{Capability, EntityType, Urn};
use serde::{Deserialize, Serialize};

/// Where an icon is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    /// Colored icon in lists and previews.
    Accent,
    /// Outlined icon on a tab header.
    TabView,
    /// Filled icon on highlighted surfaces.
    Highlight,
    /// Raw SVG glyph with no styling applied.
    Svg,
}

/// An icon glyph plus its styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub glyph: String,
    pub font_size: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Icon {
    pub fn new(glyph: &str, font_size: u16, color: Option<&str>) -> Self {
        Self {
            glyph: glyph.into(),
            font_size,
            color: color.map(str::to_string),
        }
    }

    /// Picks the outlined/filled glyph and default color for `style`.
    ///
    /// An explicit `color` always wins over the defaults.
    pub fn styled(
        outlined: &str,
        filled: &str,
        accent: &str,
        font_size: u16,
        style: IconStyle,
        color: Option<&str>,
    ) -> Self {
        match style {
            IconStyle::TabView => Self::new(outlined, font_size, color),
            IconStyle::Highlight => Self::new(filled, font_size, Some(color.unwrap_or(accent))),
            IconStyle::Svg => Self::new(outlined, font_size, None),
            IconStyle::Accent => Self::new(outlined, font_size, Some(color.unwrap_or("#BFBFBF"))),
        }
    }
}

/// The surface a preview is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewType {
    Search,
    Preview,
    Mini,
    Hover,
    Browse,
}

/// Card-sized summary of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub preview_type: PreviewType,
    pub entity_type: EntityType,
    pub urn: Urn,
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<Urn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parent_nodes: Vec<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_fields: Vec<MatchedField>,
}

/// Batch actions offered in a profile header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityActionItem {
    /// Add this glossary term to a set of assets.
    BatchAddGlossaryTerm,
    /// Move a set of assets into this domain.
    BatchAddDomain,
    /// Attach a set of assets to this data product.
    BatchAddDataProduct,
}

impl EntityActionItem {
    /// The capability an asset must declare to be a valid target of this action.
    pub fn target_capability(&self) -> Capability {
        match self {
            Self::BatchAddGlossaryTerm => Capability::GlossaryTerms,
            Self::BatchAddDomain => Capability::Domains,
            Self::BatchAddDataProduct => Capability::DataProducts,
        }
    }
}

/// Entries of the profile header's dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityMenuItem {
    UpdateDeprecation,
    Clone,
    Move,
    Delete,
    Share,
    External,
    AddTerm,
    AddTermGroup,
    CopyUrn,
}

/// Content shown by a profile tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabKind {
    Documentation,
    Schema,
    Lineage,
    Properties,
    Queries,
    Stats,
    RelatedEntities,
    RelatedTerms,
    Contents,
    Assets,
    DataProducts,
    Members,
    Ownership,
    Users,
    Groups,
    Charts,
    Dashboards,
    Tasks,
    Runs,
    Features,
    Models,
    Relationships,
}

/// When a tab is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "when", content = "pointer")]
pub enum TabDisplay {
    Always,
    /// Only when the JSON pointer resolves to a non-null value.
    WhenPresent(String),
}

impl TabDisplay {
    pub fn is_visible(&self, data: &EntityData) -> bool {
        match self {
            Self::Always => true,
            Self::WhenPresent(pointer) => data.has(pointer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTab {
    pub name: String,
    pub kind: TabKind,
    pub display: TabDisplay,
}

impl ProfileTab {
    pub fn new(name: impl Into<String>, kind: TabKind) -> Self {
        Self {
            name: name.into(),
            kind,
            display: TabDisplay::Always,
        }
    }

    /// Shorthand for a tab gated on `pointer` being present in the entity data.
    pub fn when_present(name: impl Into<String>, kind: TabKind, pointer: &str) -> Self {
        Self {
            name: name.into(),
            kind,
            display: TabDisplay::WhenPresent(pointer.into()),
        }
    }
}

/// Sections of the profile sidebar, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarSection {
    About,
    Owners { hide_owner_type: bool },
    Domain,
    DataProduct,
    Tags,
    GlossaryTerms,
    Platform,
    LastIngested,
    Members,
    Roles,
}

/// Layout of an entity's full profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileLayout {
    pub urn: Urn,
    pub entity_type: EntityType,
    pub tabs: Vec<ProfileTab>,
    pub sidebar_sections: Vec<SidebarSection>,
    #[serde(default)]
    pub header_action_items: Vec<EntityActionItem>,
    #[serde(default)]
    pub header_dropdown_items: Vec<EntityMenuItem>,
    #[serde(default)]
    pub name_editable: bool,
    #[serde(default)]
    pub hide_browse_bar: bool,
}

impl ProfileLayout {
    pub fn new(urn: Urn, entity_type: EntityType) -> Self {
        Self {
            urn,
            entity_type,
            tabs: Vec::new(),
            sidebar_sections: Vec::new(),
            header_action_items: Vec::new(),
            header_dropdown_items: Vec::new(),
            name_editable: false,
            hide_browse_bar: false,
        }
    }

    pub fn tab(mut self, tab: ProfileTab) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn sidebar(mut self, sections: impl IntoIterator<Item = SidebarSection>) -> Self {
        self.sidebar_sections.extend(sections);
        self
    }

    pub fn actions(mut self, items: impl IntoIterator<Item = EntityActionItem>) -> Self {
        self.header_action_items.extend(items);
        self
    }

    pub fn dropdown(mut self, items: impl IntoIterator<Item = EntityMenuItem>) -> Self {
        self.header_dropdown_items.extend(items);
        self
    }

    pub fn name_editable(mut self) -> Self {
        self.name_editable = true;
        self
    }

    pub fn hide_browse_bar(mut self) -> Self {
        self.hide_browse_bar = true;
        self
    }

    /// Tabs whose display condition holds for the fetched `data`.
    pub fn visible_tabs<'a>(&'a self, data: &'a EntityData) -> impl Iterator<Item = &'a ProfileTab> + 'a {
        self.tabs.iter().filter(move |t| t.display.is_visible(data))
    }
}
