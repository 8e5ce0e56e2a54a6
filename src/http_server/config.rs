//! HTTP Server Configuration
//!
//! Host, port, CORS and file locations. Values are layered: defaults, then an
//! optional JSON config file, then the `PORT` environment variable, then CLI
//! flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the listening port
pub const PORT_ENV: &str = "PORT";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid PORT value '{0}': expected a port number")]
    InvalidPort(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, meaning any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Country dataset file
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// HTML page served at `/`
    #[serde(default = "default_docs_path")]
    pub docs_path: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/countries.json")
}

fn default_docs_path() -> PathBuf {
    PathBuf::from("static/index.html")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            dataset_path: default_dataset_path(),
            docs_path: default_docs_path(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file; missing keys take defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Apply the `PORT` environment variable, if set
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_port_var(std::env::var(PORT_ENV).ok().as_deref())
    }

    fn apply_port_var(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = value {
            self.port = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
        }
        Ok(self)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
