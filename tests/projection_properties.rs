//! Property-based tests for field projection and lookup matching
//!
//! Uses proptest to verify invariants across randomly generated documents,
//! field lists and letter-case variations of dataset values.
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{Map, Value};

use restcountries::dataset::Dataset;
use restcountries::lookup::{Lookup, LookupRouter};
use restcountries::projection::{project, FieldPath, Projection};

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for object keys; short so generated paths hit often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-c0-2]{1,2}"
}

/// Strategy for arbitrary JSON documents
fn json_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z ]{0,8}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((key_strategy(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Strategy for JSON objects, the shape of a single record
fn record_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec((key_strategy(), json_strategy()), 0..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
}

/// Strategy for dotted paths such as `a.b1.0`
fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(key_strategy(), 1..4).prop_map(|segments| segments.join("."))
}

/// Strategy for comma-separated field lists
fn fields_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_strategy(), 1..6).prop_map(|paths| paths.join(","))
}

fn dataset() -> Arc<Dataset> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/countries.json");
    Arc::new(Dataset::load(path.as_ref()).unwrap())
}

/// Flip the case of each character whose mask bit is set
fn recase(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().cycle())
        .map(|(c, &flip)| {
            if flip {
                c.to_uppercase().collect::<String>()
            } else {
                c.to_lowercase().collect::<String>()
            }
        })
        .collect()
}

fn matching_codes(router: &LookupRouter, lookup: &Lookup) -> Vec<String> {
    router
        .find_all(lookup)
        .map(|record| record.country().cca2.clone())
        .collect()
}

// ============================================================================
// Projection Properties
// ============================================================================

proptest! {
    /// No field list leaves any document unchanged
    #[test]
    fn prop_no_fields_is_identity(doc in json_strategy()) {
        prop_assert_eq!(project(doc.clone(), None), doc.clone());
        prop_assert_eq!(project(doc.clone(), Some("")), doc);
    }

    /// Every key of a projected record is a listed path resolving to the same value
    #[test]
    fn prop_projected_values_resolve(record in record_strategy(), fields in fields_strategy()) {
        let projected = project(record.clone(), Some(&fields));
        let projected = projected.as_object().unwrap();

        for raw in fields.split(',') {
            let resolved = FieldPath::parse(raw).resolve(&record);
            prop_assert_eq!(projected.get(raw), resolved);
        }
        for key in projected.keys() {
            prop_assert!(fields.split(',').any(|raw| raw == key));
        }
    }

    /// Projected keys follow the order of first appearance in the field list
    #[test]
    fn prop_projection_keeps_listed_order(record in record_strategy(), fields in fields_strategy()) {
        let projection = Projection::parse(&fields).unwrap();
        let projected = projection.apply_record(&record);

        let expected: Vec<&str> = projection
            .paths()
            .iter()
            .filter(|path| path.resolve(&record).is_some())
            .map(|path| path.as_str())
            .collect();
        let actual: Vec<&str> = projected.as_object().unwrap().keys().map(String::as_str).collect();

        prop_assert_eq!(actual, expected);
    }

    /// Projecting a list projects each record and keeps length and order
    #[test]
    fn prop_list_projection_is_elementwise(
        records in prop::collection::vec(record_strategy(), 0..8),
        fields in fields_strategy(),
    ) {
        let projection = Projection::parse(&fields).unwrap();
        let projected = projection.apply(&Value::Array(records.clone()));
        let projected = projected.as_array().unwrap();

        prop_assert_eq!(projected.len(), records.len());
        for (out, record) in projected.iter().zip(&records) {
            prop_assert_eq!(out, &projection.apply_record(record));
        }
    }

    /// Projection is deterministic
    #[test]
    fn prop_projection_idempotent_per_input(record in record_strategy(), fields in fields_strategy()) {
        prop_assert_eq!(
            project(record.clone(), Some(&fields)),
            project(record, Some(&fields))
        );
    }
}

// ============================================================================
// Lookup Case-Insensitivity Properties
// ============================================================================

proptest! {
    /// Region matching ignores letter case
    #[test]
    fn prop_region_ignores_case(index in 0usize..14, mask in prop::collection::vec(any::<bool>(), 1..8)) {
        let dataset = dataset();
        let region = dataset.records()[index].country().region.clone();
        let router = LookupRouter::new(dataset);

        prop_assert_eq!(
            matching_codes(&router, &Lookup::Region(recase(&region, &mask))),
            matching_codes(&router, &Lookup::Region(region))
        );
    }

    /// Subregion matching ignores letter case
    #[test]
    fn prop_subregion_ignores_case(index in 0usize..14, mask in prop::collection::vec(any::<bool>(), 1..8)) {
        let dataset = dataset();
        let subregion = dataset.records()[index].country().subregion.clone();
        let router = LookupRouter::new(dataset);

        if let Some(subregion) = subregion {
            let codes = matching_codes(&router, &Lookup::Subregion(subregion.clone()));
            prop_assert!(!codes.is_empty());
            prop_assert_eq!(
                matching_codes(&router, &Lookup::Subregion(recase(&subregion, &mask))),
                codes
            );
        }
    }

    /// Full-name matching ignores letter case and always finds its own record
    #[test]
    fn prop_fullname_ignores_case(index in 0usize..14, mask in prop::collection::vec(any::<bool>(), 1..8)) {
        let dataset = dataset();
        let country = dataset.records()[index].country().clone();
        let router = LookupRouter::new(dataset);

        for name in [&country.name.common, &country.name.official] {
            let codes = matching_codes(&router, &Lookup::NameEquals(recase(name, &mask)));
            prop_assert!(codes.contains(&country.cca2));
        }
    }

    /// A single-code lookup by any alpha code finds the record it came from
    #[test]
    fn prop_code_lookup_finds_own_record(index in 0usize..14, mask in prop::collection::vec(any::<bool>(), 1..4)) {
        let dataset = dataset();
        let country = dataset.records()[index].country().clone();
        let router = LookupRouter::new(dataset);

        for code in [&country.cca2, &country.cca3] {
            let found = router.find_first(&Lookup::Code(recase(code, &mask))).unwrap();
            prop_assert_eq!(&found.country().cca2, &country.cca2);
        }
    }
}
