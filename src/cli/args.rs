//! CLI argument definitions using clap
//!
//! Commands:
//! - restcountries serve [--config <path>] [--host <host>] [--port <port>] [--data <path>] [--docs <path>]
//! - restcountries check [--data <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// restcountries - read-only country lookup service
#[derive(Parser, Debug)]
#[command(name = "restcountries")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the dataset and serve the HTTP API
    Serve {
        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Country dataset file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Documentation page served at /
        #[arg(long)]
        docs: Option<PathBuf>,
    },

    /// Validate a dataset file and print a summary
    Check {
        /// Country dataset file
        #[arg(long, default_value = "data/countries.json")]
        data: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
