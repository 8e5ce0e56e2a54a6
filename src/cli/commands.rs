//! CLI command implementations
//!
//! `serve` boots in a fixed order: resolve configuration, load the dataset,
//! bind, serve. Any failure before binding aborts startup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::json;

use crate::dataset::Dataset;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Flags given to `serve`; each one set overrides the config file and `PORT`
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub config: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data: Option<PathBuf>,
    pub docs: Option<PathBuf>,
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            data,
            docs,
        } => serve(ServeOverrides {
            config,
            host,
            port,
            data,
            docs,
        }),
        Command::Check { data } => check(&data),
    }
}

/// Resolve configuration: defaults, config file, `PORT`, then flags
pub fn resolve_config(overrides: &ServeOverrides) -> CliResult<HttpServerConfig> {
    let base = match &overrides.config {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    let mut config = base.apply_env()?;

    if let Some(host) = &overrides.host {
        config.host = host.clone();
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(data) = &overrides.data {
        config.dataset_path = data.clone();
    }
    if let Some(docs) = &overrides.docs {
        config.docs_path = docs.clone();
    }

    Ok(config)
}

/// Load the dataset named by `path`, logging the outcome
fn load_dataset(path: &Path) -> CliResult<Dataset> {
    let path_str = path.display().to_string();

    match Dataset::load(path) {
        Ok(dataset) => {
            log_event_with_fields(
                Event::DatasetLoaded,
                &[("countries", &dataset.len().to_string()), ("path", &path_str)],
            );
            Ok(dataset)
        }
        Err(e) => {
            log_event_with_fields(
                Event::DatasetInvalid,
                &[("error", &e.to_string()), ("path", &path_str)],
            );
            Err(e.into())
        }
    }
}

/// Boot and serve the HTTP API until interrupted
pub fn serve(overrides: ServeOverrides) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = resolve_config(&overrides)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", &config.socket_addr()),
            ("dataset", &config.dataset_path.display().to_string()),
        ],
    );

    let dataset = Arc::new(load_dataset(&config.dataset_path)?);
    let server = HttpServer::new(config, dataset);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a dataset file and print a summary as one JSON line
pub fn check(data: &Path) -> CliResult<()> {
    match Dataset::load(data) {
        Ok(dataset) => write_response(json!({
            "countries": dataset.len(),
            "regions": dataset.region_counts(),
        })),
        Err(e) => {
            let err = CliError::from(e);
            write_error(err.code_str(), err.message())?;
            Err(err)
        }
    }
}
