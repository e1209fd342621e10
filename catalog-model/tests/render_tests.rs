use catalog_model::{
    EntityActionItem, EntityData, EntityMenuItem, Icon, IconStyle, ProfileLayout, ProfileTab,
    SidebarSection, TabDisplay, TabKind,
};
use catalog_types::{Capability, EntityType, Urn};
use pretty_assertions::assert_eq;
use serde_json::json;

fn urn() -> Urn {
    Urn::parse("urn:li:glossaryTerm:pii").unwrap()
}

// ── Icons ────────────────────────────────────────────────────────

#[test]
fn tab_view_icon_is_outlined_without_default_color() {
    let icon = Icon::styled("book-outlined", "book-filled", "#B37FEB", 14, IconStyle::TabView, None);
    assert_eq!(icon, Icon::new("book-outlined", 14, None));
}

#[test]
fn highlight_icon_is_filled_with_accent() {
    let icon = Icon::styled("book-outlined", "book-filled", "#B37FEB", 14, IconStyle::Highlight, None);
    assert_eq!(icon.glyph, "book-filled");
    assert_eq!(icon.color.as_deref(), Some("#B37FEB"));
}

#[test]
fn explicit_color_overrides_defaults() {
    let icon = Icon::styled("book-outlined", "book-filled", "#B37FEB", 14, IconStyle::Accent, Some("red"));
    assert_eq!(icon.color.as_deref(), Some("red"));
}

#[test]
fn accent_icon_defaults_to_grey() {
    let icon = Icon::styled("book-outlined", "book-filled", "#B37FEB", 20, IconStyle::Accent, None);
    assert_eq!(icon.color.as_deref(), Some("#BFBFBF"));
    assert_eq!(icon.font_size, 20);
}

// ── Action items ─────────────────────────────────────────────────

#[test]
fn action_items_map_to_target_capabilities() {
    assert_eq!(EntityActionItem::BatchAddGlossaryTerm.target_capability(), Capability::GlossaryTerms);
    assert_eq!(EntityActionItem::BatchAddDomain.target_capability(), Capability::Domains);
    assert_eq!(EntityActionItem::BatchAddDataProduct.target_capability(), Capability::DataProducts);
}

// ── Profile layout ───────────────────────────────────────────────

fn term_layout() -> ProfileLayout {
    ProfileLayout::new(urn(), EntityType::GlossaryTerm)
        .tab(ProfileTab::new("Documentation", TabKind::Documentation))
        .tab(ProfileTab::when_present("Schema", TabKind::Schema, "/schemaMetadata"))
        .sidebar([SidebarSection::About, SidebarSection::Owners { hide_owner_type: false }])
        .actions([EntityActionItem::BatchAddGlossaryTerm])
        .dropdown([EntityMenuItem::Delete])
        .name_editable()
        .hide_browse_bar()
}

#[test]
fn builder_collects_everything() {
    let layout = term_layout();
    assert_eq!(layout.tabs.len(), 2);
    assert_eq!(layout.sidebar_sections.len(), 2);
    assert_eq!(layout.header_action_items, vec![EntityActionItem::BatchAddGlossaryTerm]);
    assert_eq!(layout.header_dropdown_items, vec![EntityMenuItem::Delete]);
    assert!(layout.name_editable);
    assert!(layout.hide_browse_bar);
}

#[test]
fn conditional_tab_hidden_when_field_missing() {
    let layout = term_layout();
    let data = EntityData::new(urn(), EntityType::GlossaryTerm, json!({"schemaMetadata": null}));
    let names: Vec<_> = layout.visible_tabs(&data).map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Documentation"]);
}

#[test]
fn conditional_tab_shown_when_field_present() {
    let layout = term_layout();
    let data = EntityData::new(urn(), EntityType::GlossaryTerm, json!({"schemaMetadata": {"fields": []}}));
    let names: Vec<_> = layout.visible_tabs(&data).map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Documentation", "Schema"]);
}

#[test]
fn tab_display_serializes_tagged() {
    let json = serde_json::to_value(TabDisplay::WhenPresent("/schemaMetadata".into())).unwrap();
    assert_eq!(json, json!({"when": "when_present", "pointer": "/schemaMetadata"}));
    let always = serde_json::to_value(TabDisplay::Always).unwrap();
    assert_eq!(always, json!({"when": "always"}));
}
