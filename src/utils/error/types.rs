//! Error types for the admin core

use thiserror::Error;

/// Result type alias for the admin core
pub type Result<T> = std::result::Result<T, AdminError>;

/// Main error type for the admin core
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A toggle or lookup referenced a module/submodule/action key that is
    /// not part of the static catalog
    #[error("Catalog mismatch: {0}")]
    CatalogMismatch(String),

    /// Attempted to persist permissions without an identified subject user
    #[error("Missing subject: {0}")]
    MissingSubject(String),

    /// The Users persistence collaborator rejected or failed a write
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdminError {
    /// Whether the error came from the persistence boundary and the caller
    /// may keep its in-memory state and offer a retry
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::HttpClient(_))
    }
}
