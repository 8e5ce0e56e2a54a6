//! Lookup predicates
//!
//! One variant per route. Each checks its candidate fields on a record and
//! matches if any of them does.

use crate::dataset::Country;

/// How many records a lookup answers with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// First match only, `{}` when nothing matches
    One,
    /// Every match in dataset order
    Many,
}

/// A single-dimension query over the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Every record
    All,
    /// Case-insensitive substring of the common or official name
    NameContains(String),
    /// Case-insensitive equality with the common or official name
    NameEquals(String),
    /// Alpha codes and IOC code case-insensitively, numeric code exactly
    Code(String),
    /// Raw membership of any code in the given set
    Codes(Vec<String>),
    /// Currency code present in `currencies`
    Currency(String),
    /// Case-insensitive equality with the English male or female demonym
    Demonym(String),
    /// Exact language display name
    Language(String),
    /// Exact capital city name
    Capital(String),
    Region(String),
    Subregion(String),
    /// Case-insensitive equality with any translated common name
    Translation(String),
}

impl Lookup {
    /// Route name used in logs and metrics
    pub fn name(&self) -> &'static str {
        match self {
            Lookup::All => "all",
            Lookup::NameContains(_) => "name",
            Lookup::NameEquals(_) => "fullname",
            Lookup::Code(_) => "code",
            Lookup::Codes(_) => "codes",
            Lookup::Currency(_) => "currency",
            Lookup::Demonym(_) => "demonym",
            Lookup::Language(_) => "lang",
            Lookup::Capital(_) => "capital",
            Lookup::Region(_) => "region",
            Lookup::Subregion(_) => "subregion",
            Lookup::Translation(_) => "translation",
        }
    }

    pub fn cardinality(&self) -> Cardinality {
        match self {
            Lookup::Code(_) => Cardinality::One,
            _ => Cardinality::Many,
        }
    }

    /// Check whether `country` satisfies this lookup
    pub fn matches(&self, country: &Country) -> bool {
        match self {
            Lookup::All => true,
            Lookup::NameContains(needle) => {
                let needle = needle.to_lowercase();
                [&country.name.common, &country.name.official]
                    .iter()
                    .any(|name| name.to_lowercase().contains(&needle))
            }
            Lookup::NameEquals(needle) => {
                eq_folded(&country.name.common, needle) || eq_folded(&country.name.official, needle)
            }
            Lookup::Code(code) => {
                eq_folded(&country.cca2, code)
                    || eq_folded(&country.cca3, code)
                    || country.ccn3.as_deref() == Some(code.as_str())
                    || country.cioc.as_deref().is_some_and(|cioc| eq_folded(cioc, code))
            }
            Lookup::Codes(codes) => country
                .codes()
                .any(|own| codes.iter().any(|code| code == own)),
            Lookup::Currency(code) => country.currencies.contains_key(code),
            Lookup::Demonym(needle) => country
                .english_demonym()
                .is_some_and(|d| eq_folded(&d.m, needle) || eq_folded(&d.f, needle)),
            Lookup::Language(language) => country.languages.values().any(|l| l == language),
            Lookup::Capital(capital) => country.capital.iter().any(|c| c == capital),
            Lookup::Region(region) => eq_folded(&country.region, region),
            Lookup::Subregion(subregion) => country
                .subregion
                .as_deref()
                .is_some_and(|s| eq_folded(s, subregion)),
            Lookup::Translation(needle) => country
                .translations
                .values()
                .any(|t| eq_folded(&t.common, needle)),
        }
    }
}

fn eq_folded(field: &str, needle: &str) -> bool {
    field.to_lowercase() == needle.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn united_states() -> Country {
        serde_json::from_value(json!({
            "name": {"common": "United States", "official": "United States of America"},
            "cca2": "US",
            "cca3": "USA",
            "ccn3": "840",
            "cioc": "USA",
            "currencies": {"USD": {"name": "United States dollar", "symbol": "$"}},
            "demonyms": {"eng": {"f": "American", "m": "American"}},
            "languages": {"eng": "English"},
            "capital": ["Washington D.C."],
            "region": "Americas",
            "subregion": "North America",
            "translations": {
                "deu": {"common": "Vereinigte Staaten", "official": "Vereinigte Staaten von Amerika"},
                "fra": {"common": "États-Unis", "official": "Les états-unis d'Amérique"}
            }
        }))
        .unwrap()
    }

    fn antarctica() -> Country {
        serde_json::from_value(json!({
            "name": {"common": "Antarctica", "official": "Antarctica"},
            "cca2": "AQ",
            "cca3": "ATA",
            "ccn3": "010",
            "region": "Antarctic"
        }))
        .unwrap()
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(Lookup::All.matches(&united_states()));
        assert!(Lookup::All.matches(&antarctica()));
    }

    #[test]
    fn test_name_contains() {
        let us = united_states();
        assert!(Lookup::NameContains("united".into()).matches(&us));
        assert!(Lookup::NameContains("OF AMER".into()).matches(&us));
        assert!(!Lookup::NameContains("kingdom".into()).matches(&us));
    }

    #[test]
    fn test_name_equals() {
        let us = united_states();
        assert!(Lookup::NameEquals("united states".into()).matches(&us));
        assert!(Lookup::NameEquals("UNITED STATES OF AMERICA".into()).matches(&us));
        assert!(!Lookup::NameEquals("united".into()).matches(&us));
    }

    #[test]
    fn test_code_alpha_case_insensitive() {
        let us = united_states();
        assert!(Lookup::Code("us".into()).matches(&us));
        assert!(Lookup::Code("Usa".into()).matches(&us));
        assert!(Lookup::Code("840".into()).matches(&us));
        assert!(!Lookup::Code("zz".into()).matches(&us));
    }

    #[test]
    fn test_code_without_cioc() {
        let aq = antarctica();
        assert!(Lookup::Code("010".into()).matches(&aq));
        assert!(!Lookup::Code("ANT".into()).matches(&aq));
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let us = united_states();
        assert!(Lookup::Codes(vec!["xx".into(), "USA".into()]).matches(&us));
        assert!(Lookup::Codes(vec!["840".into()]).matches(&us));
        assert!(!Lookup::Codes(vec!["usa".into(), "us".into()]).matches(&us));
    }

    #[test]
    fn test_currency_key_presence() {
        assert!(Lookup::Currency("USD".into()).matches(&united_states()));
        assert!(!Lookup::Currency("EUR".into()).matches(&united_states()));
        assert!(!Lookup::Currency("USD".into()).matches(&antarctica()));
    }

    #[test]
    fn test_demonym() {
        assert!(Lookup::Demonym("american".into()).matches(&united_states()));
        assert!(!Lookup::Demonym("american".into()).matches(&antarctica()));
    }

    #[test]
    fn test_language_and_capital_are_exact() {
        let us = united_states();
        assert!(Lookup::Language("English".into()).matches(&us));
        assert!(!Lookup::Language("english".into()).matches(&us));
        assert!(!Lookup::Language("eng".into()).matches(&us));

        assert!(Lookup::Capital("Washington D.C.".into()).matches(&us));
        assert!(!Lookup::Capital("washington d.c.".into()).matches(&us));
        assert!(!Lookup::Capital("Washington D.C.".into()).matches(&antarctica()));
    }

    #[test]
    fn test_region_and_subregion() {
        let us = united_states();
        assert!(Lookup::Region("AMERICAS".into()).matches(&us));
        assert!(Lookup::Subregion("north america".into()).matches(&us));
        assert!(!Lookup::Subregion("antarctic".into()).matches(&antarctica()));
    }

    #[test]
    fn test_translation_any_language() {
        let us = united_states();
        assert!(Lookup::Translation("vereinigte staaten".into()).matches(&us));
        assert!(Lookup::Translation("ÉTATS-UNIS".into()).matches(&us));
        assert!(!Lookup::Translation("Vereinigte Staaten von Amerika".into()).matches(&us));
    }

    #[test]
    fn test_cardinality() {
        assert_eq!(Lookup::Code("us".into()).cardinality(), Cardinality::One);
        assert_eq!(Lookup::Region("europe".into()).cardinality(), Cardinality::Many);
    }
}
