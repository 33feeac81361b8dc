//! Configuration management for the admin core
//!
//! This module handles loading and validation of the catalog and the Users
//! API settings.

pub mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{AdminError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the admin core
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AdminConfig {
    /// Users REST backend settings
    #[serde(default)]
    pub users_api: UsersApiConfig,
    /// Permission catalog; defaults to the built-in NGO catalog
    #[serde(default = "default_catalog")]
    pub catalog: PermissionCatalog,
}

/// Clone of the shared built-in catalog
fn default_catalog() -> PermissionCatalog {
    models::catalog::DEFAULT_CATALOG.clone()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            users_api: UsersApiConfig::default(),
            catalog: default_catalog(),
        }
    }
}

impl AdminConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AdminError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| AdminError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate the full configuration
    pub fn validate(&self) -> Result<()> {
        self.users_api.validate().map_err(AdminError::Config)?;
        self.catalog.validate().map_err(AdminError::Config)?;
        Ok(())
    }
}
