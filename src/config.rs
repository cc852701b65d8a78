//! Server configuration.
//!
//! Layered lowest to highest: built-in defaults, the config file
//! (`~/.config/civic-events/config.toml` unless `--config` is given),
//! `CIVIC_*` environment variables, then command-line flags.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4096;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Tracing filter used when RUST_LOG is not set (e.g. "info", "civic_core=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Populate the catalog with the sample events on startup
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            seed: default_seed(),
        }
    }
}

impl ServerConfig {
    /// Default config file location (~/.config/civic-events/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("civic-events").join("config.toml"))
    }

    /// Load configuration from `path` (required to exist) or from the
    /// default location (optional), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                if let Some(path) = Self::default_path() {
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }

        let config: ServerConfig = builder
            .add_source(Environment::with_prefix("CIVIC").try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid host address '{}'", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
