//! Wire format for persisted permissions
//!
//! The Users backend stores permissions as a plain nested object: module
//! keys at the top level as siblings of `super_admin`, submodule keys below
//! them, action keys mapped to booleans at the leaves. Action keys travel as
//! strings so a payload written by a newer catalog does not fail to parse.

use super::types::{Action, PermissionState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nested-object permission payload as the Users backend stores it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionPayload {
    /// Top-level super admin flag
    #[serde(default)]
    pub super_admin: bool,
    /// module key → submodule key → action key → granted
    #[serde(flatten, default)]
    pub modules: BTreeMap<String, BTreeMap<String, BTreeMap<String, bool>>>,
}

impl PermissionPayload {
    /// Whether the payload carries no grants at all
    pub fn is_empty(&self) -> bool {
        !self.super_admin && self.modules.values().flat_map(|m| m.values()).all(|a| a.is_empty())
    }
}

impl From<&PermissionState> for PermissionPayload {
    fn from(state: &PermissionState) -> Self {
        let modules = state
            .tree
            .iter()
            .map(|(module_key, submodules)| {
                let submodules = submodules
                    .iter()
                    .map(|(submodule_key, actions)| {
                        let actions = actions
                            .iter()
                            .map(|(action, value)| (action.as_str().to_string(), *value))
                            .collect();
                        (submodule_key.clone(), actions)
                    })
                    .collect();
                (module_key.clone(), submodules)
            })
            .collect();

        Self {
            super_admin: state.super_admin,
            modules,
        }
    }
}

/// Parse a wire action key into the closed vocabulary, `None` when unknown
pub(super) fn parse_action(key: &str) -> Option<Action> {
    key.parse().ok()
}
