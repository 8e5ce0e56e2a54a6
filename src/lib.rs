//! restcountries - a read-only lookup service over an in-memory country dataset
//!
//! - `dataset`: immutable country records loaded once at startup
//! - `projection`: dotted field-path selection over JSON records
//! - `lookup`: per-route predicates run against the dataset
//! - `rest_api` / `http_server`: the Axum HTTP surface

pub mod cli;
pub mod dataset;
pub mod http_server;
pub mod lookup;
pub mod observability;
pub mod projection;
pub mod rest_api;
