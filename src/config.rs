use anyhow::{Context, Result};
use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::api::client::LEETCODE_GRAPHQL;

const CONFIG_ENV: &str = "LEETCODE_REST_CONFIG";
const ENV_PREFIX: &str = "LEETCODE_REST";
const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub graphql_url: String,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            graphql_url: LEETCODE_GRAPHQL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("leetcode-rest").join("config.toml"))
    }

    /// Layers, lowest first: the TOML file (if any), `LEETCODE_REST_*`
    /// variables, then a bare `PORT`.
    pub fn load() -> Result<Self> {
        let file = Self::config_path().map(|path| File::from(path).format(FileFormat::Toml).required(false));
        Self::from_sources(file, std::env::var(PORT_ENV).ok())
    }

    fn from_sources<F>(file: Option<F>, port: Option<String>) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file);
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("port", port.map(|p| p.trim().to_string()))?
            .build()?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}
