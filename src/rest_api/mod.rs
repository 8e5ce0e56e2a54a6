//! # Country REST API
//!
//! HTTP endpoints for the country lookups. Every route accepts an optional
//! `fields` query parameter that projects the answer.

pub mod errors;
pub mod extract;
pub mod handler;
pub mod parser;
pub mod server;

pub use errors::{ErrorCause, ErrorResponse, RestError, RestResult, INTERNAL_ERROR_MESSAGE};
pub use extract::{PathParam, QueryMap};
pub use handler::{CountryHandler, DatasetHandler, HandlerOutput};
pub use parser::QueryParams;
pub use server::{RestServer, RouteName};
