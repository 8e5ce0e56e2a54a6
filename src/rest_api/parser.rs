//! # Query Parameter Parser
//!
//! Parses the query string shared by the country routes.

use std::collections::HashMap;

use crate::projection::Projection;

use super::errors::{RestError, RestResult};

/// Parsed query parameters
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Fields to keep (None = whole records)
    pub fields: Option<Projection>,

    /// Raw codes from `codes=`, split on commas
    pub codes: Option<Vec<String>>,
}

impl QueryParams {
    /// Parse query parameters from a HashMap
    ///
    /// Unknown parameters are ignored.
    pub fn parse(params: &HashMap<String, String>) -> Self {
        Self {
            fields: params.get("fields").and_then(|v| Projection::parse(v)),
            codes: params.get("codes").and_then(|v| parse_codes(v)),
        }
    }

    /// The `codes` list, or a 400 if it was not given
    pub fn require_codes(&self) -> RestResult<&[String]> {
        self.codes
            .as_deref()
            .ok_or_else(|| RestError::MissingParam("codes".to_string()))
    }
}

/// Split a comma-separated code list; an empty value counts as absent
fn parse_codes(value: &str) -> Option<Vec<String>> {
    if value.is_empty() {
        return None;
    }

    Some(value.split(',').map(str::to_string).collect())
}
