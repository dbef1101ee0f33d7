//! Application configuration.
//!
//! Configuration comes from an optional YAML file named by `VENDING_CONFIG`.
//! Every field has a default, so running without a file serves the standard
//! nine-button machine on localhost.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Product, ProductCatalog};
use crate::storage::DEFAULT_MAX_SESSIONS;

pub const CONFIG_PATH_ENV: &str = "VENDING_CONFIG";
pub const BIND_ADDRESS_ENV: &str = "VENDING_BIND_ADDRESS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Origin of the presentation layer allowed through CORS
    pub allowed_origin: String,
    /// Live sessions allowed at once; sessions are freed by DELETE only
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            allowed_origin: "http://localhost:8080".to_string(),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Invalid bind address {:?}", self.bind_address))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub products: Vec<Product>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            products: ProductCatalog::default_lineup().products().to_vec(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_yaml_file(Path::new(&path))?,
            None => {
                info!("{} not set, using default configuration", CONFIG_PATH_ENV);
                Self::default()
            }
        };

        if let Ok(bind_address) = std::env::var(BIND_ADDRESS_ENV) {
            info!("Overriding bind address with {}", bind_address);
            config.server.bind_address = bind_address;
        }

        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        info!("Reading configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// Validated product catalog for this configuration
    pub fn catalog(&self) -> Result<ProductCatalog> {
        ProductCatalog::from_products(self.products.clone()).context("Invalid product lineup")
    }
}
