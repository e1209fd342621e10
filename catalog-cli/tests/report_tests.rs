use catalog_cli::{load_search_result, parse_search_result, render, summarize_types, View};
use catalog_entities::build_entity_registry;
use catalog_i18n::MessageCatalog;
use catalog_registry::{DuplicatePolicy, EntityRegistry, RegistryConfig};
use catalog_types::{Capability, EntityType};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn test_registry() -> Arc<EntityRegistry> {
    let config = RegistryConfig {
        on_duplicate: DuplicatePolicy::Reject,
        ..RegistryConfig::default()
    };
    build_entity_registry(Arc::new(MessageCatalog::english()), &config).unwrap()
}

fn dataset_json() -> serde_json::Value {
    json!({
        "urn": "urn:li:dataset:(urn:li:dataPlatform:hive,orders,PROD)",
        "type": "DATASET",
        "properties": {"name": "orders", "description": "All orders"},
        "platform": {"name": "hive"}
    })
}

#[test]
fn types_report_covers_every_type() {
    let summaries = summarize_types(&test_registry());
    assert_eq!(summaries.len(), EntityType::COUNT);

    let term = summaries
        .iter()
        .find(|s| s.entity_type == EntityType::GlossaryTerm)
        .unwrap();
    assert_eq!(term.path_name, "glossaryTerm");
    assert_eq!(term.entity_name, "Glossary Term");
    assert_eq!(
        term.capabilities,
        vec![Capability::Owners, Capability::Deprecation, Capability::SoftDelete]
    );
}

#[test]
fn bare_entity_parses_without_matched_fields() {
    let result = parse_search_result(dataset_json(), None).unwrap();
    assert_eq!(result.entity.entity_type, EntityType::Dataset);
    assert!(result.matched_fields.is_empty());
}

#[test]
fn search_row_parses_matched_fields() {
    let row = json!({
        "entity": dataset_json(),
        "matchedFields": [{"name": "name", "value": "orders"}]
    });
    let result = parse_search_result(row, None).unwrap();
    assert_eq!(result.matched_fields.len(), 1);
    assert_eq!(result.matched_fields[0].value, "orders");
}

#[test]
fn entity_without_type_needs_an_explicit_type() {
    let err = parse_search_result(json!({"urn": "urn:li:dataset:x"}), None).unwrap_err();
    assert!(format!("{err:#}").contains("missing `type` field"));
}

#[test]
fn render_typeless_file_with_explicit_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.json");
    std::fs::write(
        &path,
        json!({"urn": "urn:li:dataset:x", "name": "orders"}).to_string(),
    )
    .unwrap();

    let result = load_search_result(&path, Some(EntityType::Dataset)).unwrap();
    assert_eq!(result.entity.entity_type, EntityType::Dataset);

    let value = render(&test_registry(), Some(EntityType::Dataset), View::Preview, &result).unwrap();
    assert_eq!(value["name"], "orders");
    assert_eq!(value["entity_type"], "DATASET");
}

#[test]
fn render_preview_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.json");
    std::fs::write(&path, dataset_json().to_string()).unwrap();

    let result = load_search_result(&path, None).unwrap();
    let value = render(&test_registry(), None, View::Preview, &result).unwrap();

    assert_eq!(value["name"], "orders");
    assert_eq!(value["description"], "All orders");
    assert_eq!(value["platform"], "hive");
    assert_eq!(value["entity_type"], "DATASET");
}

#[test]
fn render_profile_drops_hidden_tabs() {
    let result = parse_search_result(dataset_json(), None).unwrap();
    let value = render(&test_registry(), None, View::Profile, &result).unwrap();

    let tabs: Vec<_> = value["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(tabs, vec!["Schema", "Documentation", "Lineage", "Properties"]);
}

#[test]
fn render_with_unregistered_type_fails() {
    let registry = EntityRegistry::with_policy(DuplicatePolicy::Reject);
    let result = parse_search_result(dataset_json(), None).unwrap();
    assert!(render(&registry, Some(EntityType::Dataset), View::Search, &result).is_err());
}
