//! Integration tests for configuration loading

use ngo_admin_rs::AdminConfig;
use std::io::Write;

#[tokio::test]
async fn test_load_config_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
users_api:
  base_url: "https://api.example.org"
  timeout_secs: 10
catalog:
  modules:
    - key: program
      label: Program
      submodules:
        - key: dashboard
          label: Dashboard
          actions: [view]
        - key: targets
          label: Targets
          actions: [create, list_view, view, update, delete]
"#
    )
    .unwrap();

    let config = AdminConfig::from_file(file.path()).await.unwrap();
    assert_eq!(config.users_api.base_url, "https://api.example.org");
    assert_eq!(config.users_api.timeout_secs, 10);
    assert_eq!(config.catalog.modules.len(), 1);
    assert_eq!(
        config
            .catalog
            .submodule("program", "targets")
            .unwrap()
            .actions
            .len(),
        5
    );
}

#[tokio::test]
async fn test_missing_catalog_falls_back_to_builtin() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
users_api:
  base_url: "https://api.example.org"
"#
    )
    .unwrap();

    let config = AdminConfig::from_file(file.path()).await.unwrap();
    assert!(config.catalog.module("fund_raising").is_some());
    assert!(config.catalog.module("users").is_some());
}

#[tokio::test]
async fn test_invalid_catalog_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
catalog:
  modules:
    - key: program
      label: Program
      submodules:
        - key: dashboard
          label: Dashboard
          actions: []
"#
    )
    .unwrap();

    let err = AdminConfig::from_file(file.path()).await.unwrap_err();
    assert!(err.to_string().contains("no actions"));
}
