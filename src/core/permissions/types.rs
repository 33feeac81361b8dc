//! Permission tree type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// CRUD-style capability on a submodule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    ListView,
    View,
    Update,
    Delete,
}

impl Action {
    /// The full action vocabulary, in display order
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::ListView,
        Action::View,
        Action::Update,
        Action::Delete,
    ];

    /// Wire key for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::ListView => "list_view",
            Action::View => "view",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "list_view" => Ok(Action::ListView),
            "view" => Ok(Action::View),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            other => Err(format!("unknown action: {}", other)),
        }
    }
}

/// Grants for the actions of one submodule
pub type ActionGrants = BTreeMap<Action, bool>;

/// Grants for the submodules of one module, keyed by submodule key
pub type SubmoduleGrants = BTreeMap<String, ActionGrants>;

/// The full nested permission tree, keyed by module key.
///
/// Absence of a key at any level is equivalent to `false`.
pub type PermissionTree = BTreeMap<String, SubmoduleGrants>;

/// The mutable permission entity owned by an open editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionState {
    /// Grants every action in every module when enforcement chooses to
    /// honor it; stored alongside the tree, never folded into it
    pub super_admin: bool,
    /// Detailed grants
    pub tree: PermissionTree,
}

impl PermissionState {
    /// Whether a single leaf is set in the tree (missing key ≡ false).
    ///
    /// This reads the tree only; it does not consult `super_admin`.
    pub fn action_enabled(&self, module_key: &str, submodule_key: &str, action: Action) -> bool {
        self.tree
            .get(module_key)
            .and_then(|m| m.get(submodule_key))
            .and_then(|s| s.get(&action))
            .copied()
            .unwrap_or(false)
    }

    /// Enforcement-side check: super admins pass everything, everyone else
    /// falls back to the tree leaf.
    pub fn grants(&self, module_key: &str, submodule_key: &str, action: Action) -> bool {
        self.super_admin || self.action_enabled(module_key, submodule_key, action)
    }

    /// Flatten the tree into leaf entries, explicit `false` leaves included.
    pub fn leaves(&self) -> Vec<(String, String, Action, bool)> {
        let mut out = Vec::new();
        for (module_key, submodules) in &self.tree {
            for (submodule_key, actions) in submodules {
                for (action, value) in actions {
                    out.push((module_key.clone(), submodule_key.clone(), *action, *value));
                }
            }
        }
        out
    }
}

/// Tri-state of a hierarchical checkbox, derived from the tree on every
/// query and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    /// Every action under the node is true (vacuously true for zero actions)
    Checked,
    /// At least one action is true but not all of them
    Indeterminate,
    /// No action under the node is true
    Unchecked,
}

impl CheckState {
    /// Derive the state from how many of a node's actions are enabled
    pub(crate) fn from_counts(enabled: usize, total: usize) -> Self {
        if enabled == total {
            CheckState::Checked
        } else if enabled > 0 {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, CheckState::Indeterminate)
    }
}
