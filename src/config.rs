//! Configuration management for the client registry.
//!
//! Configuration is layered from multiple sources, later ones overriding
//! earlier ones:
//! 1. Default configuration (embedded in the binary)
//! 2. System-wide configuration file (`/etc/client-registry/config.toml`)
//! 3. User-specified configuration file
//! 4. Environment variables (prefixed with `CLIENT_REGISTRY_`)
//! 5. Command-line arguments
//!
//! The core only ever consumes `storage.connection`, an opaque string
//! identifying the embedded database (`:memory:` or a file path), handed
//! to the store at construction time.

use crate::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Args {
    /// Configuration file path
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Storage connection string
    #[clap(long)]
    pub connection: Option<String>,
}

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Storage configuration
    pub storage: StorageSettings,
}

/// Embedded storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Opaque connection string for the embedded database
    #[serde(default = "default_connection")]
    pub connection: String,
}

impl RegistryConfig {
    /// Load configuration from all sources
    pub fn load(args: &Args) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(config::File::with_name("/etc/client-registry/config.toml").required(false));

        // Load user config if specified
        if let Some(path) = &args.config {
            builder = builder.add_source(config::File::from(path.as_path()));
        }

        // Add environment variables
        builder = builder.add_source(
            config::Environment::with_prefix("CLIENT_REGISTRY").separator("__"),
        );

        // Build config
        let mut config: RegistryConfig = builder.build()?.try_deserialize()?;

        // Override with command line args
        if let Some(connection) = &args.connection {
            config.storage.connection = connection.clone();
        }

        Ok(config)
    }
}

fn default_connection() -> String {
    ":memory:".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let args = Args {
            config: None,
            connection: None,
        };

        let config = RegistryConfig::load(&args).unwrap();
        assert_eq!(config.storage.connection, ":memory:");
    }

    #[test]
    fn test_cli_override() {
        let args = Args {
            config: None,
            connection: Some("/tmp/clients.db".into()),
        };

        let config = RegistryConfig::load(&args).unwrap();
        assert_eq!(config.storage.connection, "/tmp/clients.db");
    }
}
