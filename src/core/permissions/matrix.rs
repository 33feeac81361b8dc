//! Permission matrix operations
//!
//! [`PermissionMatrix`] couples a [`PermissionState`] to the catalog that
//! defines its shape. Every toggle is a well-defined bulk update over
//! catalog keys only, so the checked/indeterminate derivation is always
//! meaningful. The matrix never holds derived state; tri-states are
//! recomputed from the tree on every query.

use crate::config::models::catalog::PermissionCatalog;
use crate::utils::error::{AdminError, Result};
use std::sync::Arc;
use tracing::{debug, warn};

use super::types::{Action, CheckState, PermissionState};
use super::wire::{parse_action, PermissionPayload};

/// A consistent boolean permission tree bound to a static catalog
#[derive(Debug, Clone)]
pub struct PermissionMatrix {
    catalog: Arc<PermissionCatalog>,
    state: PermissionState,
}

impl PermissionMatrix {
    /// Create an all-false matrix for the given catalog
    pub fn new(catalog: Arc<PermissionCatalog>) -> Self {
        Self {
            catalog,
            state: PermissionState::default(),
        }
    }

    /// Seed a matrix from a wire payload.
    ///
    /// Keys absent from the payload stay absent in the tree (≡ false). Keys
    /// absent from the catalog are dropped with a warning: a stale payload
    /// must not brick the editor, and the editor must never write keys the
    /// catalog does not define.
    pub fn from_payload(catalog: Arc<PermissionCatalog>, payload: &PermissionPayload) -> Self {
        let mut state = PermissionState {
            super_admin: payload.super_admin,
            ..Default::default()
        };

        for (module_key, submodules) in &payload.modules {
            for (submodule_key, actions) in submodules {
                for (action_key, value) in actions {
                    let action = match parse_action(action_key) {
                        Some(action) => action,
                        None => {
                            warn!(
                                module = %module_key,
                                submodule = %submodule_key,
                                action = %action_key,
                                "dropping unknown action key from stored permissions"
                            );
                            continue;
                        }
                    };
                    if !catalog.contains_action(module_key, submodule_key, action) {
                        warn!(
                            module = %module_key,
                            submodule = %submodule_key,
                            action = %action_key,
                            "dropping permission key not present in catalog"
                        );
                        continue;
                    }
                    state
                        .tree
                        .entry(module_key.clone())
                        .or_default()
                        .entry(submodule_key.clone())
                        .or_default()
                        .insert(action, *value);
                }
            }
        }

        Self { catalog, state }
    }

    /// The catalog this matrix is bound to
    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    /// The current state (read-only; mutate through the toggle operations)
    pub fn state(&self) -> &PermissionState {
        &self.state
    }

    /// Current super admin flag
    pub fn super_admin(&self) -> bool {
        self.state.super_admin
    }

    /// Whether a single leaf is enabled (missing ≡ false)
    pub fn action_enabled(&self, module_key: &str, submodule_key: &str, action: Action) -> bool {
        self.state.action_enabled(module_key, submodule_key, action)
    }

    /// Set exactly one leaf; every other leaf is untouched
    pub fn toggle_action(
        &mut self,
        module_key: &str,
        submodule_key: &str,
        action: Action,
        value: bool,
    ) -> Result<()> {
        if !self.catalog.contains_action(module_key, submodule_key, action) {
            return Err(AdminError::catalog_mismatch(format!(
                "action {}.{}.{} is not in the catalog",
                module_key, submodule_key, action
            )));
        }

        debug!(
            module = %module_key,
            submodule = %submodule_key,
            action = %action,
            value,
            "toggling action"
        );
        self.state
            .tree
            .entry(module_key.to_string())
            .or_default()
            .entry(submodule_key.to_string())
            .or_default()
            .insert(action, value);
        Ok(())
    }

    /// Overwrite every action under a submodule with `value`.
    ///
    /// Bulk semantics: actions previously at a different value are forced to
    /// `value` too. Partial states are only ever produced bottom-up by
    /// single-action toggles.
    pub fn toggle_submodule(
        &mut self,
        module_key: &str,
        submodule_key: &str,
        value: bool,
    ) -> Result<()> {
        let catalog = Arc::clone(&self.catalog);
        let submodule = catalog.submodule(module_key, submodule_key).ok_or_else(|| {
            AdminError::catalog_mismatch(format!(
                "submodule {}.{} is not in the catalog",
                module_key, submodule_key
            ))
        })?;

        debug!(module = %module_key, submodule = %submodule_key, value, "toggling submodule");
        let grants = self
            .state
            .tree
            .entry(module_key.to_string())
            .or_default()
            .entry(submodule_key.to_string())
            .or_default();
        for action in &submodule.actions {
            grants.insert(*action, value);
        }
        Ok(())
    }

    /// Overwrite every action of every submodule under a module with `value`
    pub fn toggle_module(&mut self, module_key: &str, value: bool) -> Result<()> {
        let catalog = Arc::clone(&self.catalog);
        let module = catalog.module(module_key).ok_or_else(|| {
            AdminError::catalog_mismatch(format!("module {} is not in the catalog", module_key))
        })?;

        debug!(module = %module_key, value, "toggling module");
        for submodule in &module.submodules {
            let grants = self
                .state
                .tree
                .entry(module_key.to_string())
                .or_default()
                .entry(submodule.key.clone())
                .or_default();
            for action in &submodule.actions {
                grants.insert(*action, value);
            }
        }
        Ok(())
    }

    /// Set the super admin flag. The detailed tree is never touched; the
    /// flag and the tree are persisted side by side.
    pub fn set_super_admin(&mut self, value: bool) {
        debug!(value, "setting super admin flag");
        self.state.super_admin = value;
    }

    /// Tri-state of a submodule, derived from its catalog actions
    pub fn submodule_state(&self, module_key: &str, submodule_key: &str) -> Result<CheckState> {
        let submodule = self
            .catalog
            .submodule(module_key, submodule_key)
            .ok_or_else(|| {
                AdminError::catalog_mismatch(format!(
                    "submodule {}.{} is not in the catalog",
                    module_key, submodule_key
                ))
            })?;

        let enabled = submodule
            .actions
            .iter()
            .filter(|action| self.state.action_enabled(module_key, submodule_key, **action))
            .count();
        Ok(CheckState::from_counts(enabled, submodule.actions.len()))
    }

    /// Tri-state of a module, derived over every action of every submodule
    pub fn module_state(&self, module_key: &str) -> Result<CheckState> {
        let module = self.catalog.module(module_key).ok_or_else(|| {
            AdminError::catalog_mismatch(format!("module {} is not in the catalog", module_key))
        })?;

        let mut enabled = 0;
        let mut total = 0;
        for submodule in &module.submodules {
            total += submodule.actions.len();
            enabled += submodule
                .actions
                .iter()
                .filter(|action| self.state.action_enabled(module_key, &submodule.key, **action))
                .count();
        }
        Ok(CheckState::from_counts(enabled, total))
    }

    /// Serialize the full state to the wire format
    pub fn payload(&self) -> PermissionPayload {
        PermissionPayload::from(&self.state)
    }
}
