//! Helper functions for creating specific error types

use super::types::AdminError;

/// Helper functions for creating specific errors
impl AdminError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn catalog_mismatch<S: Into<String>>(message: S) -> Self {
        Self::CatalogMismatch(message.into())
    }

    pub fn missing_subject<S: Into<String>>(message: S) -> Self {
        Self::MissingSubject(message.into())
    }

    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence(message.into())
    }
}
