//! Tests for error construction and classification

#[cfg(test)]
mod tests {
    use crate::utils::error::AdminError;

    #[test]
    fn test_helper_constructors() {
        let err = AdminError::catalog_mismatch("unknown module: foo");
        assert!(matches!(err, AdminError::CatalogMismatch(_)));
        assert_eq!(err.to_string(), "Catalog mismatch: unknown module: foo");

        let err = AdminError::missing_subject("no user id");
        assert_eq!(err.to_string(), "Missing subject: no user id");
    }

    #[test]
    fn test_persistence_classification() {
        assert!(AdminError::persistence("backend said no").is_persistence());
        assert!(!AdminError::config("bad base url").is_persistence());
        assert!(!AdminError::catalog_mismatch("drift").is_persistence());
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AdminError = parse_err.into();
        assert!(matches!(err, AdminError::Serialization(_)));
        assert!(!err.is_persistence());
    }
}
