//! Users API configuration

use super::{default_timeout, default_users_api_base_url};
use serde::{Deserialize, Serialize};

/// Configuration for the Users REST backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersApiConfig {
    /// Base URL of the backend (e.g. `https://api.example.org`)
    #[serde(default = "default_users_api_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Bearer token sent with every request, if set
    #[serde(default)]
    pub api_token: Option<String>,
}

impl Default for UsersApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_users_api_base_url(),
            timeout_secs: default_timeout(),
            api_token: None,
        }
    }
}

impl UsersApiConfig {
    /// Validate Users API configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Users API base_url must not be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "Users API base_url must be an http(s) URL, got: {}",
                self.base_url
            ));
        }
        if self.timeout_secs == 0 {
            return Err("Users API timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}
