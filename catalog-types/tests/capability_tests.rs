use catalog_types::{Capability, CapabilitySet};
use pretty_assertions::assert_eq;

#[test]
fn parse_accepts_kebab_and_snake_case() {
    assert_eq!("glossary-terms".parse::<Capability>().unwrap(), Capability::GlossaryTerms);
    assert_eq!("DATA_PRODUCTS".parse::<Capability>().unwrap(), Capability::DataProducts);
    assert_eq!(" soft-delete ".parse::<Capability>().unwrap(), Capability::SoftDelete);
}

#[test]
fn parse_unknown_fails() {
    assert!("teleport".parse::<Capability>().is_err());
}

#[test]
fn names_round_trip() {
    for cap in Capability::ALL {
        assert_eq!(cap.as_str().parse::<Capability>().unwrap(), cap);
    }
}

#[test]
fn serde_is_kebab_case() {
    let json = serde_json::to_string(&Capability::SoftDelete).unwrap();
    assert_eq!(json, "\"soft-delete\"");
}

#[test]
fn set_from_array() {
    let set = CapabilitySet::from([Capability::Owners, Capability::Domains]);
    assert_eq!(set.len(), 2);
    assert!(set.contains(Capability::Owners));
    assert!(set.contains(Capability::Domains));
    assert!(!set.contains(Capability::Tags));
}

#[test]
fn set_ignores_duplicates() {
    let mut set = CapabilitySet::new();
    assert!(set.insert(Capability::Tags));
    assert!(!set.insert(Capability::Tags));
    assert_eq!(set.len(), 1);
}

#[test]
fn empty_set() {
    let set = CapabilitySet::new();
    assert!(set.is_empty());
    assert!(!set.contains(Capability::Owners));
}

#[test]
fn sorted_is_declaration_order() {
    let set: CapabilitySet = [Capability::SoftDelete, Capability::Owners, Capability::Deprecation]
        .into_iter()
        .collect();
    assert_eq!(
        set.sorted(),
        vec![Capability::Owners, Capability::Deprecation, Capability::SoftDelete]
    );
}
