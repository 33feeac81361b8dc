//! Tests for the permission matrix

#[cfg(test)]
mod tests {
    use crate::config::models::catalog::{
        ModuleDefinition, PermissionCatalog, SubmoduleDefinition,
    };
    use crate::core::permissions::{Action, CheckState, PermissionMatrix, PermissionPayload};
    use std::collections::BTreeSet;
    use std::sync::Arc;

    const CRUD: [Action; 5] = Action::ALL;

    /// Small synthetic catalog: module `program` with a view-only
    /// `dashboard` and a full-CRUD `targets` submodule.
    fn program_catalog() -> Arc<PermissionCatalog> {
        Arc::new(PermissionCatalog {
            modules: vec![ModuleDefinition::new(
                "program",
                "Program",
                vec![
                    SubmoduleDefinition::new("dashboard", "Dashboard", &[Action::View]),
                    SubmoduleDefinition::new("targets", "Targets", &CRUD),
                ],
            )],
        })
    }

    fn ngo_catalog() -> Arc<PermissionCatalog> {
        Arc::new(PermissionCatalog::ngo_default())
    }

    /// Snapshot of every explicit leaf, for locality diffs
    fn leaf_snapshot(matrix: &PermissionMatrix) -> BTreeSet<(String, String, Action, bool)> {
        matrix.state().leaves().into_iter().collect()
    }

    #[test]
    fn test_default_catalog_is_valid() {
        assert!(ngo_catalog().validate().is_ok());
    }

    #[test]
    fn test_states_are_mutually_exclusive() {
        let catalog = program_catalog();
        let mut matrix = PermissionMatrix::new(Arc::clone(&catalog));

        // Walk through a range of trees and check the invariant after each
        // mutation.
        let steps: Vec<Box<dyn Fn(&mut PermissionMatrix)>> = vec![
            Box::new(|m| m.toggle_action("program", "targets", Action::View, true).unwrap()),
            Box::new(|m| m.toggle_action("program", "targets", Action::Create, true).unwrap()),
            Box::new(|m| m.toggle_submodule("program", "targets", true).unwrap()),
            Box::new(|m| m.toggle_action("program", "dashboard", Action::View, true).unwrap()),
            Box::new(|m| m.toggle_module("program", true).unwrap()),
            Box::new(|m| m.toggle_action("program", "targets", Action::Delete, false).unwrap()),
            Box::new(|m| m.toggle_module("program", false).unwrap()),
        ];

        for step in steps {
            step(&mut matrix);
            let module = matrix.module_state("program").unwrap();
            assert!(!(module.is_checked() && module.is_indeterminate()));
            for submodule in ["dashboard", "targets"] {
                let state = matrix.submodule_state("program", submodule).unwrap();
                assert!(!(state.is_checked() && state.is_indeterminate()));
            }
        }
    }

    #[test]
    fn test_bulk_toggle_is_idempotent() {
        let catalog = ngo_catalog();

        for value in [true, false] {
            let mut once = PermissionMatrix::new(Arc::clone(&catalog));
            once.toggle_module("fund_raising", value).unwrap();

            let mut twice = PermissionMatrix::new(Arc::clone(&catalog));
            twice.toggle_module("fund_raising", value).unwrap();
            twice.toggle_module("fund_raising", value).unwrap();

            assert_eq!(once.state(), twice.state());
        }
    }

    #[test]
    fn test_action_toggle_changes_exactly_one_leaf() {
        let catalog = ngo_catalog();
        let mut matrix = PermissionMatrix::new(Arc::clone(&catalog));
        matrix.toggle_module("hr", true).unwrap();

        let before = leaf_snapshot(&matrix);
        matrix
            .toggle_action("hr", "payroll", Action::Delete, false)
            .unwrap();
        let after = leaf_snapshot(&matrix);

        let removed: Vec<_> = before.difference(&after).collect();
        let added: Vec<_> = after.difference(&before).collect();
        assert_eq!(removed.len(), 1);
        assert_eq!(added.len(), 1);
        assert_eq!(
            added[0],
            &(
                "hr".to_string(),
                "payroll".to_string(),
                Action::Delete,
                false
            )
        );
    }

    #[test]
    fn test_payload_round_trip() {
        let catalog = ngo_catalog();
        let mut matrix = PermissionMatrix::new(Arc::clone(&catalog));
        matrix.toggle_module("program", true).unwrap();
        matrix
            .toggle_action("fund_raising", "donors", Action::View, true)
            .unwrap();
        matrix
            .toggle_action("hr", "employees", Action::Update, false)
            .unwrap();
        matrix.set_super_admin(true);

        let payload = matrix.payload();
        let restored = PermissionMatrix::from_payload(Arc::clone(&catalog), &payload);
        assert_eq!(matrix.state(), restored.state());

        // And through JSON, since that is what actually travels.
        let json = serde_json::to_string(&payload).unwrap();
        let reparsed: PermissionPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload, reparsed);
    }

    #[test]
    fn test_wire_shape_has_super_admin_beside_modules() {
        let catalog = ngo_catalog();
        let mut matrix = PermissionMatrix::new(catalog);
        matrix
            .toggle_action("program", "targets", Action::View, true)
            .unwrap();
        matrix.set_super_admin(true);

        let value = serde_json::to_value(matrix.payload()).unwrap();
        assert_eq!(value["super_admin"], serde_json::json!(true));
        assert_eq!(value["program"]["targets"]["view"], serde_json::json!(true));
    }

    #[test]
    fn test_empty_payload_means_all_false() {
        let catalog = ngo_catalog();
        let payload: PermissionPayload = serde_json::from_str("{}").unwrap();
        let matrix = PermissionMatrix::from_payload(Arc::clone(&catalog), &payload);

        assert!(!matrix.super_admin());
        for module in &catalog.modules {
            let state = matrix.module_state(&module.key).unwrap();
            assert_eq!(state, CheckState::Unchecked);
            for submodule in &module.submodules {
                let state = matrix.submodule_state(&module.key, &submodule.key).unwrap();
                assert_eq!(state, CheckState::Unchecked);
                for action in &submodule.actions {
                    assert!(!matrix.action_enabled(&module.key, &submodule.key, *action));
                }
            }
        }
    }

    #[test]
    fn test_unknown_payload_keys_are_dropped() {
        let catalog = program_catalog();
        let payload: PermissionPayload = serde_json::from_value(serde_json::json!({
            "super_admin": false,
            "program": {
                "targets": { "view": true, "approve": true },
                "retired_submodule": { "view": true }
            },
            "retired_module": { "anything": { "view": true } }
        }))
        .unwrap();

        let matrix = PermissionMatrix::from_payload(catalog, &payload);
        assert!(matrix.action_enabled("program", "targets", Action::View));
        assert_eq!(matrix.state().leaves().len(), 1);
    }

    #[test]
    fn test_module_toggle_cascades_to_submodules() {
        let catalog = ngo_catalog();
        let mut matrix = PermissionMatrix::new(Arc::clone(&catalog));
        matrix.toggle_module("procurement", true).unwrap();

        for submodule in ["dashboard", "vendors", "purchase_orders"] {
            assert!(matrix
                .submodule_state("procurement", submodule)
                .unwrap()
                .is_checked());
        }
        assert!(matrix.module_state("procurement").unwrap().is_checked());

        // Other modules stay untouched.
        assert_eq!(
            matrix.module_state("hr").unwrap(),
            CheckState::Unchecked
        );
    }

    #[test]
    fn test_single_action_then_submodule_scenario() {
        let catalog = program_catalog();
        let mut matrix = PermissionMatrix::new(catalog);

        matrix
            .toggle_action("program", "targets", Action::View, true)
            .unwrap();
        assert_eq!(
            matrix.submodule_state("program", "targets").unwrap(),
            CheckState::Indeterminate
        );
        assert_eq!(
            matrix.module_state("program").unwrap(),
            CheckState::Indeterminate
        );

        matrix.toggle_submodule("program", "targets", true).unwrap();
        for action in Action::ALL {
            assert!(matrix.action_enabled("program", "targets", action));
        }
        assert!(!matrix.action_enabled("program", "dashboard", Action::View));
        assert!(matrix
            .submodule_state("program", "targets")
            .unwrap()
            .is_checked());
        // dashboard.view is still false, so the module stays indeterminate.
        assert_eq!(
            matrix.module_state("program").unwrap(),
            CheckState::Indeterminate
        );
    }

    #[test]
    fn test_super_admin_does_not_touch_the_tree() {
        let catalog = ngo_catalog();
        let mut matrix = PermissionMatrix::new(catalog);
        matrix
            .toggle_action("fund_raising", "donations", Action::Create, true)
            .unwrap();
        matrix
            .toggle_action("users", "permissions", Action::Update, false)
            .unwrap();

        let before = matrix.state().tree.clone();
        matrix.set_super_admin(true);
        assert_eq!(matrix.state().tree, before);
        matrix.set_super_admin(false);
        assert_eq!(matrix.state().tree, before);

        // Derivations keep reading the tree only.
        assert_eq!(
            matrix.module_state("hr").unwrap(),
            CheckState::Unchecked
        );
    }

    #[test]
    fn test_grants_honors_super_admin_explicitly() {
        let catalog = ngo_catalog();
        let mut matrix = PermissionMatrix::new(catalog);
        assert!(!matrix.state().grants("hr", "payroll", Action::Delete));
        matrix.set_super_admin(true);
        assert!(matrix.state().grants("hr", "payroll", Action::Delete));
        assert!(!matrix.action_enabled("hr", "payroll", Action::Delete));
    }

    #[test]
    fn test_toggle_outside_catalog_fails_loudly() {
        let catalog = program_catalog();
        let mut matrix = PermissionMatrix::new(catalog);

        assert!(matrix.toggle_module("finance", true).is_err());
        assert!(matrix.toggle_submodule("program", "reports", true).is_err());
        // dashboard only defines view
        assert!(matrix
            .toggle_action("program", "dashboard", Action::Delete, true)
            .is_err());
        // Failed toggles must not leave partial writes behind.
        assert!(matrix.state().leaves().is_empty());
    }

    #[test]
    fn test_submodule_toggle_overwrites_partial_state() {
        let catalog = program_catalog();
        let mut matrix = PermissionMatrix::new(catalog);
        matrix
            .toggle_action("program", "targets", Action::View, true)
            .unwrap();
        matrix
            .toggle_action("program", "targets", Action::Create, true)
            .unwrap();

        matrix
            .toggle_submodule("program", "targets", false)
            .unwrap();
        assert_eq!(
            matrix.submodule_state("program", "targets").unwrap(),
            CheckState::Unchecked
        );
        for action in Action::ALL {
            assert!(!matrix.action_enabled("program", "targets", action));
        }
    }
}
