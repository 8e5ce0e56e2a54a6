//! # Field Projection
//!
//! Reduces records to a caller-selected set of field paths.
//!
//! A projection is parsed from a comma-separated list such as
//! `name.common,cca2,capital`. Applying it to a record builds a new object
//! keyed by each path's text, in the order the paths were listed. Paths that
//! do not resolve are left out; they never produce `null` and never fail.
//!
//! ```
//! use restcountries::projection::project;
//! use serde_json::json;
//!
//! let record = json!({"name": {"common": "Japan"}, "cca2": "JP"});
//! let projected = project(record, Some("name.common,flag"));
//! assert_eq!(projected, json!({"name.common": "Japan"}));
//! ```

mod path;

pub use path::FieldPath;

use serde_json::{Map, Value};

/// Ordered set of field paths to keep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    paths: Vec<FieldPath>,
}

impl Projection {
    /// Parse a comma-separated field list
    ///
    /// Returns `None` for an empty list, which means "no projection".
    pub fn parse(spec: &str) -> Option<Self> {
        if spec.is_empty() {
            return None;
        }

        let mut paths: Vec<FieldPath> = Vec::new();
        for raw in spec.split(',') {
            if !paths.iter().any(|p| p.as_str() == raw) {
                paths.push(FieldPath::parse(raw));
            }
        }

        Some(Self { paths })
    }

    pub fn paths(&self) -> &[FieldPath] {
        &self.paths
    }

    /// Project one record
    pub fn apply_record(&self, record: &Value) -> Value {
        let mut projected = Map::with_capacity(self.paths.len());
        for path in &self.paths {
            if let Some(value) = path.resolve(record) {
                projected.insert(path.as_str().to_string(), value.clone());
            }
        }
        Value::Object(projected)
    }

    /// Project a record, or every record of an array
    pub fn apply(&self, data: &Value) -> Value {
        match data {
            Value::Array(records) => {
                Value::Array(records.iter().map(|r| self.apply_record(r)).collect())
            }
            record => self.apply_record(record),
        }
    }
}

/// Project `data` by an optional comma-separated field list
///
/// With no field list (or an empty one) the data is returned unchanged.
pub fn project(data: Value, fields: Option<&str>) -> Value {
    match fields.and_then(Projection::parse) {
        Some(projection) => projection.apply(&data),
        None => data,
    }
}
