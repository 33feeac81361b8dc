//! Configuration loading utilities
//!
//! Environment-variable overrides for deployments that do not ship a config
//! file.

use super::AdminConfig;
use crate::utils::error::{AdminError, Result};
use std::env;
use tracing::debug;

impl AdminConfig {
    /// Load configuration from environment variables, starting from defaults
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-variable overrides on top of the current values
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(base_url) = env::var("USERS_API_BASE_URL") {
            self.users_api.base_url = base_url;
        }
        if let Ok(token) = env::var("USERS_API_TOKEN") {
            self.users_api.api_token = Some(token);
        }
        if let Ok(timeout) = env::var("USERS_API_TIMEOUT") {
            self.users_api.timeout_secs = timeout
                .parse()
                .map_err(|e| AdminError::Config(format!("Invalid timeout: {}", e)))?;
        }
        Ok(())
    }
}
