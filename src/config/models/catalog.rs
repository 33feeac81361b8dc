//! Permission catalog configuration
//!
//! The catalog is the static description of which permission keys exist:
//! an ordered list of modules, each with ordered submodules, each with a set
//! of actions drawn from the closed [`Action`] vocabulary. The matrix logic
//! is catalog-agnostic; the catalog alone decides the shape of the tree.

use crate::core::permissions::Action;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A feature area within a module (e.g. "Donations" under "Fund Raising")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmoduleDefinition {
    /// Stable key used in the permission tree and on the wire
    pub key: String,
    /// Display name
    pub label: String,
    /// Actions that can be granted on this submodule
    pub actions: Vec<Action>,
}

impl SubmoduleDefinition {
    pub fn new(key: &str, label: &str, actions: &[Action]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            actions: actions.to_vec(),
        }
    }
}

/// A top-level permission category (e.g. "Fund Raising")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    /// Stable key used in the permission tree and on the wire
    pub key: String,
    /// Display name
    pub label: String,
    /// Ordered submodules; display order follows declaration order
    pub submodules: Vec<SubmoduleDefinition>,
}

impl ModuleDefinition {
    pub fn new(key: &str, label: &str, submodules: Vec<SubmoduleDefinition>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            submodules,
        }
    }

    /// Look up a submodule by key
    pub fn submodule(&self, key: &str) -> Option<&SubmoduleDefinition> {
        self.submodules.iter().find(|s| s.key == key)
    }
}

/// The full static catalog of permission keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCatalog {
    pub modules: Vec<ModuleDefinition>,
}

impl PermissionCatalog {
    /// Look up a module by key
    pub fn module(&self, key: &str) -> Option<&ModuleDefinition> {
        self.modules.iter().find(|m| m.key == key)
    }

    /// Look up a submodule under a module
    pub fn submodule(&self, module_key: &str, submodule_key: &str) -> Option<&SubmoduleDefinition> {
        self.module(module_key)?.submodule(submodule_key)
    }

    /// Whether the given action is defined for the given submodule
    pub fn contains_action(&self, module_key: &str, submodule_key: &str, action: Action) -> bool {
        self.submodule(module_key, submodule_key)
            .map(|s| s.actions.contains(&action))
            .unwrap_or(false)
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.modules.is_empty() {
            return Err("Permission catalog must define at least one module".to_string());
        }

        let mut module_keys = HashSet::new();
        for module in &self.modules {
            if module.key.is_empty() {
                return Err("Module key must not be empty".to_string());
            }
            if !module_keys.insert(&module.key) {
                return Err(format!("Duplicate module key: {}", module.key));
            }
            if module.submodules.is_empty() {
                return Err(format!("Module {} has no submodules", module.key));
            }

            let mut submodule_keys = HashSet::new();
            for submodule in &module.submodules {
                if submodule.key.is_empty() {
                    return Err(format!("Empty submodule key under module {}", module.key));
                }
                if !submodule_keys.insert(&submodule.key) {
                    return Err(format!(
                        "Duplicate submodule key {} under module {}",
                        submodule.key, module.key
                    ));
                }
                if submodule.actions.is_empty() {
                    return Err(format!(
                        "Submodule {}.{} defines no actions",
                        module.key, submodule.key
                    ));
                }
                let unique: HashSet<_> = submodule.actions.iter().collect();
                if unique.len() != submodule.actions.len() {
                    return Err(format!(
                        "Duplicate action under submodule {}.{}",
                        module.key, submodule.key
                    ));
                }
            }
        }

        Ok(())
    }

    /// The built-in catalog for the NGO admin platform
    pub fn ngo_default() -> Self {
        use Action::*;

        let crud = [Create, ListView, View, Update, Delete];
        let view_only = [View];

        Self {
            modules: vec![
                ModuleDefinition::new(
                    "accounts_and_finance",
                    "Accounts & Finance",
                    vec![
                        SubmoduleDefinition::new("dashboard", "Dashboard", &view_only),
                        SubmoduleDefinition::new("budgets", "Budgets", &crud),
                        SubmoduleDefinition::new("expenses", "Expenses", &crud),
                    ],
                ),
                ModuleDefinition::new(
                    "fund_raising",
                    "Fund Raising",
                    vec![
                        SubmoduleDefinition::new("dashboard", "Dashboard", &view_only),
                        SubmoduleDefinition::new("donors", "Donors", &crud),
                        SubmoduleDefinition::new("donations", "Donations", &crud),
                    ],
                ),
                ModuleDefinition::new(
                    "hr",
                    "Human Resources",
                    vec![
                        SubmoduleDefinition::new("dashboard", "Dashboard", &view_only),
                        SubmoduleDefinition::new("employees", "Employees", &crud),
                        SubmoduleDefinition::new("payroll", "Payroll", &crud),
                    ],
                ),
                ModuleDefinition::new(
                    "procurement",
                    "Procurement",
                    vec![
                        SubmoduleDefinition::new("dashboard", "Dashboard", &view_only),
                        SubmoduleDefinition::new("vendors", "Vendors", &crud),
                        SubmoduleDefinition::new("purchase_orders", "Purchase Orders", &crud),
                    ],
                ),
                ModuleDefinition::new(
                    "program",
                    "Program",
                    vec![
                        SubmoduleDefinition::new("dashboard", "Dashboard", &view_only),
                        SubmoduleDefinition::new("targets", "Targets", &crud),
                    ],
                ),
                ModuleDefinition::new(
                    "users",
                    "Users",
                    vec![
                        SubmoduleDefinition::new("users", "Users", &crud),
                        SubmoduleDefinition::new("permissions", "Permissions", &[View, Update]),
                    ],
                ),
            ],
        }
    }
}

/// Shared instance of the built-in catalog
pub static DEFAULT_CATALOG: Lazy<PermissionCatalog> = Lazy::new(PermissionCatalog::ngo_default);
