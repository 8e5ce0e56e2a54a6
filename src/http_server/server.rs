//! # HTTP Server
//!
//! Combines the country routes, the docs page and the observability routes
//! into one Axum server.

use std::sync::Arc;

use axum::extract::Request;
use axum::{middleware, Router, ServiceExt};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::services::ServeFile;

use crate::dataset::Dataset;
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::rest_api::{CountryHandler, DatasetHandler, RestError, RestServer};

use super::config::HttpServerConfig;
use super::observability_routes::{
    observability_routes, observe_request, panic_response, ObservabilityState,
};

/// The full service: routes behind trailing-slash normalization
pub type App = NormalizePath<Router>;

/// HTTP server for the country lookups
pub struct HttpServer {
    config: HttpServerConfig,
    app: App,
}

impl HttpServer {
    /// Create a server over a loaded dataset
    pub fn new(config: HttpServerConfig, dataset: Arc<Dataset>) -> Self {
        Self::with_handler(config, DatasetHandler::new(dataset))
    }

    /// Create a server over any handler
    pub fn with_handler<H: CountryHandler + 'static>(config: HttpServerConfig, handler: H) -> Self {
        let app = NormalizePath::trim_trailing_slash(Self::build_router(&config, handler));
        Self { config, app }
    }

    fn build_router<H: CountryHandler + 'static>(config: &HttpServerConfig, handler: H) -> Router {
        let metrics = Arc::new(MetricsRegistry::new());
        let observability_state = Arc::new(ObservabilityState {
            metrics: metrics.clone(),
            countries: handler.country_count(),
        });

        Router::new()
            .route_service("/", ServeFile::new(&config.docs_path))
            .merge(RestServer::new(handler, metrics.clone()).router())
            .merge(observability_routes(observability_state))
            .fallback(route_not_found)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(middleware::from_fn_with_state(metrics, observe_request))
            .layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if config.cors_origins.is_empty() {
            cors.allow_origin(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            cors.allow_origin(AllowOrigin::list(origins))
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the service (for testing)
    pub fn app(self) -> App {
        self.app
    }

    /// Bind the configured address; host names are resolved
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.config.socket_addr()).await
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        log_event_with_fields(Event::Serving, &[("addr", &listener.local_addr()?.to_string())]);

        axum::serve(listener, ServiceExt::<Request>::into_make_service(self.app))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn route_not_found() -> RestError {
    RestError::RouteNotFound
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log_event(Event::ShutdownStart),
        Err(e) => {
            log_event_with_fields(Event::SignalUnavailable, &[("error", &e.to_string())]);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9000);
        let server = HttpServer::new(config, Arc::new(Dataset::default()));
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["https://example.org".to_string()],
            ..Default::default()
        };
        let _app = HttpServer::new(config, Arc::new(Dataset::default())).app();
    }

    #[tokio::test]
    async fn test_bind_resolves_host_name() {
        let config = HttpServerConfig {
            host: "localhost".to_string(),
            port: 0,
            ..Default::default()
        };
        let server = HttpServer::new(config, Arc::new(Dataset::default()));

        let listener = server.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
