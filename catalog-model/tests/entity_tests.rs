use catalog_model::{EntityData, GenericEntityProperties, SearchResult};
use catalog_types::{EntityType, Error, Urn};
use pretty_assertions::assert_eq;
use serde_json::json;

fn make_entity(data: serde_json::Value) -> EntityData {
    EntityData::new(
        Urn::parse("urn:li:dataset:(urn:li:dataPlatform:hive,db.orders,PROD)").unwrap(),
        EntityType::Dataset,
        data,
    )
}

// ── JSON pointer helpers ─────────────────────────────────────────

#[test]
fn get_str_returns_string_field() {
    let e = make_entity(json!({"name": "orders", "count": 5}));
    assert_eq!(e.get_str("/name"), Some("orders"));
}

#[test]
fn get_str_returns_none_for_non_string() {
    let e = make_entity(json!({"count": 5}));
    assert_eq!(e.get_str("/count"), None);
}

#[test]
fn get_str_with_nested_path() {
    let e = make_entity(json!({"properties": {"name": "Orders"}}));
    assert_eq!(e.get_str("/properties/name"), Some("Orders"));
}

#[test]
fn get_bool_and_number() {
    let e = make_entity(json!({"deprecation": {"deprecated": true}, "stats": {"rows": 12.0}}));
    assert_eq!(e.get_bool("/deprecation/deprecated"), Some(true));
    assert_eq!(e.get_number("/stats/rows"), Some(12.0));
    assert_eq!(e.get_number("/stats/missing"), None);
}

#[test]
fn get_array_returns_slice() {
    let e = make_entity(json!({"tags": ["a", "b"]}));
    assert_eq!(e.get_array("/tags").map(<[_]>::len), Some(2));
    assert!(e.get_array("/missing").is_none());
}

#[test]
fn first_str_skips_missing_and_empty() {
    let e = make_entity(json!({"properties": {"name": ""}, "name": "orders"}));
    assert_eq!(e.first_str(&["/properties/name", "/name"]), Some("orders"));
    assert_eq!(e.first_str(&["/nope"]), None);
}

#[test]
fn has_treats_null_as_absent() {
    let e = make_entity(json!({"schemaMetadata": null, "properties": {}}));
    assert!(!e.has("/schemaMetadata"));
    assert!(e.has("/properties"));
    assert!(!e.has("/missing"));
}

// ── Shared field extraction ──────────────────────────────────────

#[test]
fn description_prefers_editable() {
    let e = make_entity(json!({
        "properties": {"description": "ingested"},
        "editableProperties": {"description": "edited"}
    }));
    assert_eq!(e.description().as_deref(), Some("edited"));
}

#[test]
fn owner_urns_skip_malformed_entries() {
    let e = make_entity(json!({"ownership": {"owners": [
        {"owner": {"urn": "urn:li:corpuser:alice"}},
        {"owner": {"urn": "garbage"}},
        {"owner": {}},
        {"owner": {"urn": "urn:li:corpGroup:eng"}}
    ]}}));
    let owners: Vec<String> = e.owner_urns().into_iter().map(String::from).collect();
    assert_eq!(owners, vec!["urn:li:corpuser:alice", "urn:li:corpGroup:eng"]);
}

#[test]
fn domain_platform_and_subtype() {
    let e = make_entity(json!({
        "domain": {"domain": {"urn": "urn:li:domain:sales", "properties": {"name": "Sales"}}},
        "platform": {"name": "hive", "properties": {"logoUrl": "/logos/hive.png"}},
        "subTypes": {"typeNames": ["View", "Table"]}
    }));
    assert_eq!(e.domain_name().as_deref(), Some("Sales"));
    assert_eq!(e.platform_name().as_deref(), Some("hive"));
    assert_eq!(e.platform_logo_url().as_deref(), Some("/logos/hive.png"));
    assert_eq!(e.subtype().as_deref(), Some("View"));
}

#[test]
fn parent_node_names_fall_back_to_urn() {
    let e = make_entity(json!({"parentNodes": {"nodes": [
        {"urn": "urn:li:glossaryNode:a", "properties": {"name": "Finance"}},
        {"urn": "urn:li:glossaryNode:b"}
    ]}}));
    assert_eq!(e.parent_node_names(), vec!["Finance", "urn:li:glossaryNode:b"]);
}

#[test]
fn generic_properties_from_partial_data() {
    let e = make_entity(json!({
        "properties": {"customProperties": [{"key": "tier", "value": "gold"}, {"key": "empty"}]}
    }));
    let props = GenericEntityProperties::from_entity(&e);
    assert_eq!(props.entity_type, EntityType::Dataset);
    assert_eq!(props.name, None);
    assert!(props.owners.is_empty());
    assert!(!props.deprecated);
    assert_eq!(props.custom_properties.get("tier").map(String::as_str), Some("gold"));
    assert_eq!(props.custom_properties.get("empty").map(String::as_str), Some(""));
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn search_result_deserializes_graphql_shape() {
    let result: SearchResult = serde_json::from_value(json!({
        "entity": {"urn": "urn:li:domain:sales", "type": "DOMAIN", "data": {"properties": {"name": "Sales"}}},
        "matchedFields": [{"name": "name", "value": "Sales"}]
    }))
    .unwrap();
    assert_eq!(result.entity.entity_type, EntityType::Domain);
    assert_eq!(result.entity.get_str("/properties/name"), Some("Sales"));
    assert_eq!(result.matched_fields.len(), 1);
}

#[test]
fn from_graphql_keeps_whole_object_as_data() {
    let e = EntityData::from_graphql(json!({
        "urn": "urn:li:glossaryTerm:pii",
        "type": "GLOSSARY_TERM",
        "properties": {"name": "PII"}
    }))
    .unwrap();
    assert_eq!(e.entity_type, EntityType::GlossaryTerm);
    assert_eq!(e.get_str("/properties/name"), Some("PII"));
    assert_eq!(e.get_str("/urn"), Some("urn:li:glossaryTerm:pii"));
}

#[test]
fn from_graphql_rejects_missing_or_bad_tags() {
    assert!(EntityData::from_graphql(json!({"type": "TAG"})).is_err());
    assert!(EntityData::from_graphql(json!({"urn": "urn:li:tag:x"})).is_err());
    assert!(EntityData::from_graphql(json!({"urn": "urn:li:tag:x", "type": "NOPE"})).is_err());
}

#[test]
fn from_graphql_names_the_missing_field() {
    let err = EntityData::from_graphql(json!({"type": "TAG"})).unwrap_err();
    assert_eq!(err, Error::InvalidUrn("missing `urn` field".into()));
    assert!(err.to_string().contains("urn"));

    let err = EntityData::from_graphql(json!({"urn": "urn:li:tag:x"})).unwrap_err();
    assert_eq!(err, Error::UnknownEntityType("missing `type` field".into()));
}

#[test]
fn from_graphql_as_fills_in_absent_type() {
    let e = EntityData::from_graphql_as(
        json!({"urn": "urn:li:dataset:x", "name": "orders"}),
        Some(EntityType::Dataset),
    )
    .unwrap();
    assert_eq!(e.entity_type, EntityType::Dataset);
    assert_eq!(e.get_str("/name"), Some("orders"));
}

#[test]
fn from_graphql_as_prefers_the_payload_type() {
    let e = EntityData::from_graphql_as(
        json!({"urn": "urn:li:tag:x", "type": "TAG"}),
        Some(EntityType::Dataset),
    )
    .unwrap();
    assert_eq!(e.entity_type, EntityType::Tag);
}

#[test]
fn entity_data_defaults_missing_payload_to_null() {
    let e: EntityData =
        serde_json::from_value(json!({"urn": "urn:li:tag:pii", "type": "TAG"})).unwrap();
    assert!(e.data.is_null());
    assert_eq!(e.get_str("/name"), None);
}
