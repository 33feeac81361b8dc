//! Configuration data models
//!
//! This module defines all configuration structures used by the admin core.

pub mod catalog;
pub mod users_api;

// Re-export all configuration types
pub use catalog::*;
pub use users_api::*;

/// Default Users API base URL
pub fn default_users_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}
