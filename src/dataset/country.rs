//! Typed country model
//!
//! The fields lookup predicates read. Everything else in a source record is
//! kept only in the raw document (see [`super::CountryRecord`]).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Common and official country names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

/// Currency metadata keyed by ISO 4217 code in [`Country::currencies`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Gendered demonym forms for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demonym {
    pub f: String,
    pub m: String,
}

/// A country name in another language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

/// One country record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,

    /// ISO 3166-1 alpha-2
    pub cca2: String,

    /// ISO 3166-1 alpha-3
    pub cca3: String,

    /// ISO 3166-1 numeric, absent for a few territories
    #[serde(default)]
    pub ccn3: Option<String>,

    /// International Olympic Committee code
    #[serde(default)]
    pub cioc: Option<String>,

    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,

    #[serde(default)]
    pub demonyms: Option<BTreeMap<String, Demonym>>,

    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    #[serde(default)]
    pub capital: Vec<String>,

    pub region: String,

    #[serde(default)]
    pub subregion: Option<String>,

    #[serde(default)]
    pub translations: BTreeMap<String, Translation>,
}

impl Country {
    /// English demonym forms, if the record has any
    pub fn english_demonym(&self) -> Option<&Demonym> {
        self.demonyms.as_ref().and_then(|d| d.get("eng"))
    }

    /// Codes a record can be addressed by, in candidate order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.cca2.as_str()),
            Some(self.cca3.as_str()),
            self.ccn3.as_deref(),
            self.cioc.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}
