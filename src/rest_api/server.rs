//! # REST API Routes
//!
//! Axum routes for the country lookups.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::lookup::Lookup;
use crate::observability::MetricsRegistry;

use super::errors::RestResult;
use super::extract::{PathParam, QueryMap};
use super::handler::CountryHandler;
use super::parser::QueryParams;

/// REST API server state
pub struct RestServer<H: CountryHandler> {
    handler: Arc<H>,
    metrics: Arc<MetricsRegistry>,
}

impl<H: CountryHandler + 'static> RestServer<H> {
    pub fn new(handler: H, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            handler: Arc::new(handler),
            metrics,
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/countries", get(all_handler::<H>))
            .route("/countries/name/:name", get(name_handler::<H>))
            .route("/countries/fullname/:name", get(fullname_handler::<H>))
            .route("/countries/code/:code", get(code_handler::<H>))
            .route("/countries/alpha/:code", get(code_handler::<H>))
            .route("/countries/codes", get(codes_handler::<H>))
            .route("/countries/currency/:currency", get(currency_handler::<H>))
            .route("/countries/demonym/:demonym", get(demonym_handler::<H>))
            .route("/countries/lang/:language", get(language_handler::<H>))
            .route("/countries/capital/:capital", get(capital_handler::<H>))
            .route("/countries/region/:region", get(region_handler::<H>))
            .route("/countries/subregion/:subregion", get(subregion_handler::<H>))
            .route("/countries/translation/:translation", get(translation_handler::<H>))
            .with_state(state)
    }
}

/// Shared state type
type ServerState<H> = Arc<RestServer<H>>;

/// Route that answered, attached to the response for the access log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteName(pub &'static str);

fn tagged(route: &'static str, result: RestResult<Json<Value>>) -> Response {
    let mut response = result.into_response();
    response.extensions_mut().insert(RouteName(route));
    response
}

/// Run a lookup, project it and count the records returned
fn answer<H: CountryHandler>(
    server: &RestServer<H>,
    lookup: &Lookup,
    params: &QueryParams,
) -> RestResult<Json<Value>> {
    let output = server.handler.lookup(lookup, params.fields.as_ref())?;
    server.metrics.add_records_returned(output.records as u64);
    Ok(Json(output.body))
}

fn respond<H: CountryHandler>(
    server: &RestServer<H>,
    lookup: Lookup,
    query: &HashMap<String, String>,
) -> Response {
    tagged(lookup.name(), answer(server, &lookup, &QueryParams::parse(query)))
}

async fn all_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::All, &query)
}

async fn name_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    PathParam(name): PathParam,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::NameContains(name), &query)
}

async fn fullname_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    PathParam(name): PathParam,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::NameEquals(name), &query)
}

/// Serves both `/code/:code` and `/alpha/:code`
async fn code_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    PathParam(code): PathParam,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::Code(code), &query)
}

async fn codes_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    QueryMap(query): QueryMap,
) -> Response {
    let params = QueryParams::parse(&query);
    let result = params
        .require_codes()
        .and_then(|codes| answer(&server, &Lookup::Codes(codes.to_vec()), &params));

    tagged("codes", result)
}

async fn currency_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    PathParam(currency): PathParam,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::Currency(currency), &query)
}

async fn demonym_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    PathParam(demonym): PathParam,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::Demonym(demonym), &query)
}

async fn language_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    PathParam(language): PathParam,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::Language(language), &query)
}

async fn capital_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    PathParam(capital): PathParam,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::Capital(capital), &query)
}

async fn region_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    PathParam(region): PathParam,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::Region(region), &query)
}

async fn subregion_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    PathParam(subregion): PathParam,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::Subregion(subregion), &query)
}

async fn translation_handler<H: CountryHandler + 'static>(
    State(server): State<ServerState<H>>,
    PathParam(translation): PathParam,
    QueryMap(query): QueryMap,
) -> Response {
    respond(&server, Lookup::Translation(translation), &query)
}
