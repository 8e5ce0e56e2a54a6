//! # Lookup Router
//!
//! Runs [`Lookup`] predicates against the shared dataset.
//!
//! Every lookup is a pure, synchronous scan of the immutable dataset, so
//! results are deterministic and repeated calls return identical answers.

mod predicate;

pub use predicate::{Cardinality, Lookup};

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::dataset::{CountryRecord, Dataset};

/// Answer to a lookup, before projection
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    /// First match, or an empty object
    One(Value),
    /// All matches in dataset order
    Many(Vec<Value>),
}

impl LookupResult {
    /// Number of records carried
    pub fn record_count(&self) -> usize {
        match self {
            LookupResult::One(Value::Object(map)) if map.is_empty() => 0,
            LookupResult::One(_) => 1,
            LookupResult::Many(records) => records.len(),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            LookupResult::One(record) => record,
            LookupResult::Many(records) => Value::Array(records),
        }
    }
}

/// Executes lookups over a shared dataset
#[derive(Debug, Clone)]
pub struct LookupRouter {
    dataset: Arc<Dataset>,
}

impl LookupRouter {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Every matching record, in dataset order
    pub fn find_all<'a>(&'a self, lookup: &'a Lookup) -> impl Iterator<Item = &'a CountryRecord> {
        self.dataset
            .iter()
            .filter(move |record| lookup.matches(record.country()))
    }

    /// First matching record
    pub fn find_first(&self, lookup: &Lookup) -> Option<&CountryRecord> {
        self.dataset
            .iter()
            .find(|record| lookup.matches(record.country()))
    }

    /// Run a lookup and shape the answer by its cardinality
    pub fn run(&self, lookup: &Lookup) -> LookupResult {
        match lookup.cardinality() {
            Cardinality::One => LookupResult::One(
                self.find_first(lookup)
                    .map(|record| record.document().clone())
                    .unwrap_or_else(|| Value::Object(Map::new())),
            ),
            Cardinality::Many => LookupResult::Many(
                self.find_all(lookup)
                    .map(|record| record.document().clone())
                    .collect(),
            ),
        }
    }
}
