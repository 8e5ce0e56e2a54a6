//! # REST API Handler
//!
//! Turns a lookup plus query parameters into a response body.

use std::sync::Arc;

use serde_json::Value;

use crate::dataset::Dataset;
use crate::lookup::{Lookup, LookupResult, LookupRouter};
use crate::projection::Projection;

use super::errors::RestResult;

/// Projected answer and the number of records it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerOutput {
    pub body: Value,
    pub records: usize,
}

/// Handler trait for country lookups
pub trait CountryHandler: Send + Sync {
    /// Run a lookup and project its answer
    fn lookup(&self, lookup: &Lookup, fields: Option<&Projection>) -> RestResult<HandlerOutput>;

    /// Number of records available
    fn country_count(&self) -> usize;
}

/// Handler backed by the in-memory dataset
pub struct DatasetHandler {
    router: LookupRouter,
}

impl DatasetHandler {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            router: LookupRouter::new(dataset),
        }
    }
}

impl CountryHandler for DatasetHandler {
    fn lookup(&self, lookup: &Lookup, fields: Option<&Projection>) -> RestResult<HandlerOutput> {
        let result: LookupResult = self.router.run(lookup);
        let records = result.record_count();
        let body = result.into_value();

        let body = match fields {
            Some(projection) => projection.apply(&body),
            None => body,
        };

        Ok(HandlerOutput { body, records })
    }

    fn country_count(&self) -> usize {
        self.router.dataset().len()
    }
}
