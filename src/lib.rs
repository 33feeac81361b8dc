//! # ngo-admin-rs
//!
//! Permission-matrix core for the NGO admin platform. The platform's screens
//! (donors, donations, HR, procurement, programs, users) gate every feature
//! behind a module → submodule → action permission tree; this crate owns
//! that tree: the static catalog describing which keys exist, the toggle
//! operations with their bulk-overwrite semantics, the pure tri-state
//! (checked / indeterminate / unchecked) derivation for hierarchical
//! checkbox UIs, and the REST persistence boundary for saved payloads.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ngo_admin_rs::{
//!     Action, AdminConfig, HttpUsersStore, PermissionEditor,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AdminConfig::from_env()?;
//!     let store = Arc::new(HttpUsersStore::new(&config.users_api)?);
//!     let catalog = Arc::new(config.catalog.clone());
//!
//!     let mut editor =
//!         PermissionEditor::open(store, catalog, Some("user-42".to_string())).await?;
//!     editor.toggle_module("fund_raising", true)?;
//!     editor.toggle_action("program", "targets", Action::View, true)?;
//!     let saved = editor.save().await?;
//!     println!("persisted {} modules", saved.modules.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Design notes
//!
//! - Tri-states are derived from the tree on every query and never stored;
//!   the catalog is small enough that caching would only invite staleness.
//! - The `super_admin` flag is persisted beside the tree but never folded
//!   into it; enforcement-side callers use
//!   [`PermissionState::grants`](crate::core::permissions::PermissionState::grants)
//!   when the flag should short-circuit.
//! - Saves are full overwrites, fire-once, with the in-memory tree kept
//!   intact on failure so the UI can offer a retry.

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export the main types at the crate root
pub use crate::config::{
    AdminConfig, ModuleDefinition, PermissionCatalog, SubmoduleDefinition, UsersApiConfig,
};
pub use crate::core::editor::PermissionEditor;
pub use crate::core::permissions::{
    Action, CheckState, PermissionMatrix, PermissionPayload, PermissionState,
};
pub use crate::storage::{HttpUsersStore, MemoryUsersStore, UserPermissionsStore};
pub use crate::utils::{init_logging, AdminError, Debouncer, Result};
