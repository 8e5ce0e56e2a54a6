//! # HTTP Server Module
//!
//! Assembles the public HTTP surface into one Axum server.
//!
//! # Endpoints
//!
//! - `/` - API documentation page
//! - `/countries/*` - Country lookups
//! - `/health` - Health check
//! - `/metrics` - Request counters

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig, PORT_ENV};
pub use server::{App, HttpServer};
