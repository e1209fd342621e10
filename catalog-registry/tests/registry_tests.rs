mod common;

use catalog_model::{EntityActionItem, EntityData, IconStyle, PreviewType, SearchResult};
use catalog_registry::{DuplicatePolicy, EntityRegistry, RegistryConfig, RegistryError};
use catalog_types::{Capability, EntityType, Urn};
use common::FixtureHandler;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Arc;

fn fixture_registry() -> EntityRegistry {
    let mut registry = EntityRegistry::with_policy(DuplicatePolicy::Reject);
    registry
        .register(FixtureHandler::new(EntityType::Dataset, &[Capability::Owners]).path("dataset"))
        .unwrap();
    registry
        .register(
            FixtureHandler::new(EntityType::Chart, &[Capability::Owners, Capability::Domains])
                .path("chart"),
        )
        .unwrap();
    registry
        .register(FixtureHandler::new(EntityType::Tag, &[]).path("tag"))
        .unwrap();
    registry
}

// ── Registration ─────────────────────────────────────────────────

#[test]
fn new_registry_is_empty() {
    let registry = EntityRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn register_then_get() {
    let registry = fixture_registry();
    assert_eq!(registry.len(), 3);
    let handler = registry.get(EntityType::Chart).unwrap();
    assert_eq!(handler.entity_type(), EntityType::Chart);
}

#[test]
fn entity_types_keep_registration_order() {
    let registry = fixture_registry();
    let order: Vec<_> = registry.entity_types().collect();
    assert_eq!(order, vec![EntityType::Dataset, EntityType::Chart, EntityType::Tag]);
}

#[test]
fn duplicate_is_rejected_and_first_handler_kept() {
    let mut registry = fixture_registry();
    let first = Arc::clone(registry.get(EntityType::Dataset).unwrap());

    let err = registry
        .register(FixtureHandler::new(EntityType::Dataset, &[]).path("other"))
        .unwrap_err();

    assert_eq!(err, RegistryError::DuplicateRegistration(EntityType::Dataset));
    assert!(Arc::ptr_eq(&first, registry.get(EntityType::Dataset).unwrap()));
    assert_eq!(registry.path_name(EntityType::Dataset).unwrap(), "dataset");
    assert_eq!(registry.len(), 3);
}

#[test]
fn duplicate_under_warn_policy_keeps_first_handler() {
    let mut registry = EntityRegistry::with_policy(DuplicatePolicy::Warn);
    registry
        .register(FixtureHandler::new(EntityType::Domain, &[]).path("domain"))
        .unwrap();
    registry
        .register(FixtureHandler::new(EntityType::Domain, &[]).path("replacement"))
        .unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.path_name(EntityType::Domain).unwrap(), "domain");
}

#[test]
fn from_config_uses_duplicate_policy() {
    let config = RegistryConfig {
        on_duplicate: DuplicatePolicy::Warn,
        ..RegistryConfig::default()
    };
    let mut registry = EntityRegistry::from_config(&config);
    registry.register(FixtureHandler::new(EntityType::Role, &[])).unwrap();
    assert!(registry.register(FixtureHandler::new(EntityType::Role, &[])).is_ok());
}

// ── Lookup ───────────────────────────────────────────────────────

#[test]
fn get_unregistered_fails_the_same_way_every_time() {
    let registry = fixture_registry();
    let first = registry.get(EntityType::Role).err().unwrap();
    let second = registry.get(EntityType::Role).err().unwrap();
    assert_eq!(first, RegistryError::NotRegistered(EntityType::Role));
    assert_eq!(first, second);
    assert!(first.to_string().contains("ROLE"));
}

#[test]
fn get_is_reference_stable() {
    let registry = fixture_registry();
    let a = registry.get(EntityType::Tag).unwrap();
    let b = registry.get(EntityType::Tag).unwrap();
    assert!(Arc::ptr_eq(a, b));
}

#[test]
fn find_and_contains() {
    let registry = fixture_registry();
    assert!(registry.contains(EntityType::Chart));
    assert!(!registry.contains(EntityType::Domain));
    assert!(registry.find(EntityType::Domain).is_none());
}

#[test]
fn ensure_registered_reports_first_missing_type() {
    let registry = fixture_registry();
    assert!(registry.ensure_registered(&[EntityType::Dataset, EntityType::Tag]).is_ok());

    let err = registry
        .ensure_registered(&[EntityType::Dataset, EntityType::Role, EntityType::Domain])
        .unwrap_err();
    assert_eq!(err, RegistryError::NotRegistered(EntityType::Role));
}

#[test]
fn separate_registries_do_not_share_handlers() {
    let a = fixture_registry();
    let b = EntityRegistry::new();
    assert!(a.contains(EntityType::Dataset));
    assert!(!b.contains(EntityType::Dataset));
}

// ── Capabilities ─────────────────────────────────────────────────

#[test]
fn capability_query_matches_declared_sets() {
    let registry = fixture_registry();

    let owners = registry.get_types_with_supported_capabilities(Capability::Owners);
    assert_eq!(owners, BTreeSet::from([EntityType::Dataset, EntityType::Chart]));

    let domains = registry.get_types_with_supported_capabilities(Capability::Domains);
    assert_eq!(domains, BTreeSet::from([EntityType::Chart]));

    let tags = registry.get_types_with_supported_capabilities(Capability::Tags);
    assert!(tags.is_empty());
}

#[test]
fn action_targets_follow_capabilities() {
    let registry = fixture_registry();
    assert_eq!(
        registry.action_targets(EntityActionItem::BatchAddDomain),
        BTreeSet::from([EntityType::Chart])
    );
    assert!(registry.action_targets(EntityActionItem::BatchAddDataProduct).is_empty());
}

#[test]
fn search_browse_and_lineage_types() {
    let mut registry = EntityRegistry::with_policy(DuplicatePolicy::Reject);
    let mut dataset = FixtureHandler::new(EntityType::Dataset, &[]);
    dataset.browsable = true;
    dataset.lineage = true;
    let mut role = FixtureHandler::new(EntityType::Role, &[]);
    role.searchable = false;
    registry.register(dataset).unwrap();
    registry.register(role).unwrap();

    assert_eq!(registry.search_entity_types(), vec![EntityType::Dataset]);
    assert_eq!(registry.browse_entity_types(), vec![EntityType::Dataset]);
    assert_eq!(registry.lineage_entity_types(), vec![EntityType::Dataset]);
}

// ── Delegation ───────────────────────────────────────────────────

#[test]
fn path_names_resolve_both_ways() {
    let registry = fixture_registry();
    assert_eq!(registry.path_name(EntityType::Chart).unwrap(), "chart");
    assert_eq!(registry.type_from_path_name("chart"), Some(EntityType::Chart));
    assert_eq!(registry.type_from_path_name("nope"), None);
}

#[test]
fn delegates_to_handler() {
    let registry = fixture_registry();
    let urn = Urn::parse("urn:li:chart:1").unwrap();
    let data = EntityData::new(urn.clone(), EntityType::Chart, json!({"name": "Revenue"}));

    assert_eq!(registry.display_name(EntityType::Chart, &data).unwrap(), "Revenue");
    assert_eq!(registry.entity_name(EntityType::Chart).unwrap(), "CHART entity");
    assert_eq!(registry.collection_name(EntityType::Chart).unwrap(), "CHART entities");
    assert_eq!(registry.entity_url(EntityType::Chart, &urn).unwrap(), "/chart/urn:li:chart:1");
    assert_eq!(registry.icon(EntityType::Chart, 12, IconStyle::TabView).unwrap().font_size, 12);
    assert_eq!(registry.render_profile(EntityType::Chart, &urn).unwrap().urn, urn);

    let preview = registry
        .render_preview(EntityType::Chart, PreviewType::Hover, &data)
        .unwrap();
    assert_eq!(preview.preview_type, PreviewType::Hover);

    let row = registry
        .render_search_result(EntityType::Chart, &SearchResult::new(data.clone()))
        .unwrap();
    assert_eq!(row.preview_type, PreviewType::Search);
    assert_eq!(row.name, "Revenue");

    let props = registry.generic_properties(EntityType::Chart, &data).unwrap();
    assert_eq!(props.name.as_deref(), Some("Revenue"));
}

#[test]
fn delegation_to_unregistered_type_fails() {
    let registry = fixture_registry();
    assert_eq!(
        registry.entity_name(EntityType::Domain),
        Err(RegistryError::NotRegistered(EntityType::Domain))
    );
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = Arc::new(fixture_registry());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.get(EntityType::Dataset).is_ok())
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}

#[test]
fn debug_lists_registered_types() {
    let registry = fixture_registry();
    let debug = format!("{registry:?}");
    assert!(debug.contains("Dataset"));
    assert!(debug.contains("Reject"));
}
