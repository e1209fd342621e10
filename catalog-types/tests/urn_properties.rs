//! Property tests for URN parsing and entity type names.

use catalog_types::{EntityType, Urn};
use proptest::prelude::*;

proptest! {
    #[test]
    fn well_formed_urns_split_into_kind_and_key(
        kind in "[a-zA-Z][a-zA-Z0-9]{0,15}",
        key in "[^\\s]{1,40}",
    ) {
        let text = format!("urn:li:{kind}:{key}");
        let urn = Urn::parse(&text).unwrap();
        prop_assert_eq!(urn.kind(), kind.as_str());
        prop_assert_eq!(urn.key(), key.as_str());
        prop_assert_eq!(urn.to_string(), text);
    }

    #[test]
    fn strings_without_prefix_are_rejected(text in "[a-z:]{0,30}") {
        prop_assume!(!text.starts_with("urn:li:"));
        prop_assert!(Urn::parse(&text).is_err());
    }

    #[test]
    fn entity_type_names_parse_case_insensitively(idx in 0..EntityType::COUNT, lower in any::<bool>()) {
        let ty = EntityType::ALL[idx];
        let name = if lower { ty.as_str().to_lowercase() } else { ty.as_str().to_string() };
        prop_assert_eq!(name.parse::<EntityType>().unwrap(), ty);
    }
}
