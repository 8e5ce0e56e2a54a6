//! # Country Dataset
//!
//! The immutable, in-memory set of country records every lookup reads.
//!
//! A dataset is built once at startup (usually with [`Dataset::load`]) and
//! then shared behind an `Arc`. Nothing mutates it afterwards, so concurrent
//! readers need no locking.
//!
//! Each record carries two views of the same data:
//! - the typed [`Country`], which predicates match against
//! - the source JSON document, which responses and projections are built from

mod country;
mod errors;

pub use country::{Country, CountryName, Currency, Demonym, Translation};
pub use errors::{DatasetError, DatasetResult};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

/// A single dataset entry
#[derive(Debug, Clone)]
pub struct CountryRecord {
    country: Country,
    document: Value,
}

impl CountryRecord {
    /// Build a record from its source document
    pub fn from_document(document: Value) -> Result<Self, serde_json::Error> {
        let country = Country::deserialize(&document)?;
        Ok(Self { country, document })
    }

    /// Typed view
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// Source document, exactly as loaded
    pub fn document(&self) -> &Value {
        &self.document
    }
}

/// Ordered, read-only collection of country records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<CountryRecord>,
}

impl Dataset {
    /// Load a dataset from a JSON file holding an array of records
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content)
    }

    /// Parse a dataset from JSON text
    pub fn from_json_str(content: &str) -> DatasetResult<Self> {
        let value: Value = serde_json::from_str(content)?;

        match value {
            Value::Array(documents) => Self::from_documents(documents),
            _ => Err(DatasetError::NotAnArray),
        }
    }

    /// Build a dataset from already-parsed documents, preserving their order
    pub fn from_documents(documents: Vec<Value>) -> DatasetResult<Self> {
        let records = documents
            .into_iter()
            .enumerate()
            .map(|(index, document)| {
                CountryRecord::from_document(document)
                    .map_err(|source| DatasetError::InvalidRecord { index, source })
            })
            .collect::<DatasetResult<Vec<_>>>()?;

        Ok(Self { records })
    }

    /// All records in dataset order
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records per region, keyed by region name
    pub fn region_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.country().region.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_documents() -> Vec<Value> {
        vec![
            json!({
                "name": {"common": "France", "official": "French Republic"},
                "cca2": "FR",
                "cca3": "FRA",
                "ccn3": "250",
                "cioc": "FRA",
                "region": "Europe",
                "subregion": "Western Europe",
                "population": 67391582
            }),
            json!({
                "name": {"common": "Japan", "official": "Japan"},
                "cca2": "JP",
                "cca3": "JPN",
                "ccn3": "392",
                "region": "Asia",
                "subregion": "Eastern Asia"
            }),
        ]
    }

    #[test]
    fn test_from_documents_preserves_order() {
        let dataset = Dataset::from_documents(sample_documents()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].country().cca2, "FR");
        assert_eq!(dataset.records()[1].country().cca2, "JP");
    }

    #[test]
    fn test_document_keeps_untyped_fields() {
        let dataset = Dataset::from_documents(sample_documents()).unwrap();

        assert_eq!(dataset.records()[0].document()["population"], 67391582);
    }

    #[test]
    fn test_invalid_record_reports_index() {
        let mut documents = sample_documents();
        documents.push(json!({"cca2": "ZZ"}));

        let err = Dataset::from_documents(documents).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRecord { index: 2, .. }));
    }

    #[test]
    fn test_non_array_rejected() {
        let err = Dataset::from_json_str(r#"{"name": "not a list"}"#).unwrap_err();
        assert!(matches!(err, DatasetError::NotAnArray));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Dataset::from_json_str("[{").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        let body = serde_json::to_string(&sample_documents()).unwrap();
        file.write_all(body.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load(Path::new("/nonexistent/countries.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_region_counts() {
        let dataset = Dataset::from_documents(sample_documents()).unwrap();
        let counts = dataset.region_counts();

        assert_eq!(counts.get("Europe"), Some(&1));
        assert_eq!(counts.get("Asia"), Some(&1));
    }
}
