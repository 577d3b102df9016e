//! Command line arguments.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::source::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, SchemaSource};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "types.rs";

/// Generate Rust types for the GraphQL types listed in typegen.yaml.
#[derive(Parser, Debug, Clone)]
#[command(name = "typegen", version, about)]
pub struct Args {
    /// debug level logging (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// config file with the package name and root types
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// file the generated types are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// read a saved introspection result instead of querying the endpoint
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// GraphQL endpoint to introspect
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

impl Args {
    /// Returns where the schema should be loaded from.
    ///
    /// A schema file wins over the endpoint; the API key for the endpoint
    /// is read from the environment.
    #[must_use]
    pub fn source(&self) -> SchemaSource {
        match &self.schema {
            Some(path) => SchemaSource::File(path.clone()),
            None => SchemaSource::endpoint_from_env(
                self.endpoint.clone(),
                Duration::from_secs(self.timeout),
            ),
        }
    }
}
